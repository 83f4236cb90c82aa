//! Amount field module
//!
//! A text field for entering money as a running count of cents. The editing
//! rules live in [AmountEditor]; the handlers serve the field as an htmx
//! component that re-renders on every keystroke.

mod editor;
mod handlers;

pub use editor::AmountEditor;
pub use handlers::{get_amount_field, update_amount_field};
