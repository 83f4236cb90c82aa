//! The cents-entry editor behind an amount field.
//!
//! Every keystroke is treated as appending a digit to a running count of
//! cents, like a point-of-sale terminal: typing "1", "0", "0" shows "0,01",
//! "0,10" and then "1,00". The user never places the decimal separator.

use std::ops::Range;

use crate::money::{MAX_MINOR_UNITS, MonetaryAmount, format_amount, format_minor_units};

/// The state of one amount field for the duration of an edit session.
///
/// The amount itself is owned by the caller (e.g. a form). The editor keeps
/// the text currently shown in the field and the last amount it saw, and
/// reports the amount produced by each edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountEditor {
    value: MonetaryAmount,
    display_value: String,
}

impl AmountEditor {
    /// Create an editor showing `value`.
    pub fn new(value: MonetaryAmount) -> Self {
        Self {
            value,
            display_value: format_amount(value),
        }
    }

    /// The last amount set externally or produced by an edit.
    pub fn value(&self) -> MonetaryAmount {
        self.value
    }

    /// The text to show in the field.
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// Replace the shown text with the rendering of `value`.
    ///
    /// Any edit in progress is discarded: external resets always win.
    pub fn set_external_value(&mut self, value: MonetaryAmount) {
        self.value = value;
        self.display_value = format_amount(value);
    }

    /// Bind the editor to the authoritative `value` held by the caller.
    ///
    /// Call this on every render. If `value` differs from the amount the editor
    /// last saw, it was changed from outside and replaces the shown text.
    /// Echoing back the amount returned by [AmountEditor::on_user_input] leaves
    /// the shown text untouched.
    pub fn sync(&mut self, value: MonetaryAmount) {
        if value != self.value {
            self.set_external_value(value);
        }
    }

    /// Apply the raw text of the field after a keystroke or paste.
    ///
    /// Non-digit characters are dropped and the remaining digits are read as a
    /// count of cents. Text without any digits clears the field and yields zero.
    /// Digits that would exceed the maximum amount are ignored, leaving the
    /// field as it was. Typed zeros show "0,00" only while the amount was
    /// already zero; zeroing a non-zero amount blanks the field.
    ///
    /// Returns the amount the caller should store.
    pub fn on_user_input(&mut self, raw_text: &str) -> MonetaryAmount {
        let digits: String = raw_text.chars().filter(char::is_ascii_digit).collect();

        if digits.is_empty() {
            self.value = MonetaryAmount::ZERO;
            self.display_value.clear();
            return self.value;
        }

        let minor_units = match digits.parse::<u64>() {
            Ok(minor_units) if minor_units <= MAX_MINOR_UNITS => minor_units,
            _ => {
                tracing::debug!(
                    "ignoring amount input with {} digits, keeping {}",
                    digits.len(),
                    self.value
                );
                return self.value;
            }
        };

        let previous = self.value;
        self.value = MonetaryAmount::from_minor_units(minor_units);
        // Zeroing a non-zero amount changes the caller's value, which resets the
        // field like any other external change.
        self.display_value = if self.value.is_zero() && !previous.is_zero() {
            format_amount(self.value)
        } else {
            format_minor_units(self.value)
        };

        self.value
    }

    /// The selection to apply when the field gains focus.
    ///
    /// The whole text is selected so the next keystroke replaces it. The range
    /// is measured in characters.
    pub fn on_focus(&self) -> Range<usize> {
        0..self.display_value.chars().count()
    }
}
