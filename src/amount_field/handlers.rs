//! Amount field page, fragment and keystroke endpoint.

use std::ops::Range;

use axum::{
    Form,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    amount_field::AmountEditor,
    endpoints,
    html::{FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base},
    money::MonetaryAmount,
    statistics::amount_from_summary,
};

const DEFAULT_FIELD_ID: &str = "amount";

/// The state needed for rendering amount fields.
#[derive(Debug, Clone)]
pub struct AmountFieldState {
    /// The symbol shown in front of the amount, e.g. "R$".
    pub currency_symbol: String,
}

impl FromRef<AppState> for AmountFieldState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            currency_symbol: state.currency_symbol.clone(),
        }
    }
}

/// Query parameters for rendering a fresh amount field.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AmountFieldQuery {
    /// The initial amount in major units, e.g. 12.5.
    pub value: Option<f64>,
    /// The formatted price of an existing record, e.g. "R$ 12,50".
    ///
    /// Only used when `value` is not given.
    pub price: Option<String>,
    /// The DOM ID of the text input.
    pub id: Option<String>,
}

/// Form data sent by the field on every edit.
#[derive(Debug, Serialize, Deserialize)]
pub struct AmountFieldForm {
    /// The raw text of the field after the edit.
    #[serde(default)]
    pub display: String,
    /// The amount before the edit, in canonical decimal form.
    #[serde(default)]
    pub amount: f64,
    /// The DOM ID of the text input.
    #[serde(default = "default_field_id")]
    pub field_id: String,
}

fn default_field_id() -> String {
    DEFAULT_FIELD_ID.to_owned()
}

/// Render an amount field showing the amount given in the query.
///
/// htmx requests get the bare field so it can be embedded in a form, other
/// requests get a page containing the field.
pub async fn get_amount_field(
    State(state): State<AmountFieldState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<AmountFieldQuery>,
) -> Result<Response, Error> {
    let initial_value = match (query.value, query.price.as_deref()) {
        (Some(value), _) => MonetaryAmount::from_major_units(value)?,
        (None, Some(price)) => amount_from_summary(price)?,
        (None, None) => MonetaryAmount::ZERO,
    };

    let mut editor = AmountEditor::default();
    editor.set_external_value(initial_value);

    let field_id = query.id.as_deref().unwrap_or(DEFAULT_FIELD_ID);
    let field = amount_field_view(field_id, &editor, &state.currency_symbol, false);

    if is_htmx_request {
        Ok(field.into_response())
    } else {
        Ok(amount_field_page(field_id, &field).into_response())
    }
}

/// Apply an edit to an amount field and return the re-rendered field.
pub async fn update_amount_field(
    State(state): State<AmountFieldState>,
    Form(form): Form<AmountFieldForm>,
) -> Result<Response, Error> {
    let previous = MonetaryAmount::from_major_units(form.amount)?;

    let mut editor = AmountEditor::new(previous);
    let amount = editor.on_user_input(&form.display);
    tracing::debug!(
        "amount field {} changed from {previous} to {amount}",
        form.field_id
    );

    Ok(amount_field_view(&form.field_id, &editor, &state.currency_symbol, true).into_response())
}

fn amount_field_page(field_id: &str, field: &Markup) -> Markup {
    let content = html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            form class="w-full space-y-4 md:space-y-6"
            {
                label for=(field_id) class=(FORM_LABEL_STYLE) { "Amount" }
                (field)
            }
        }
    };

    base("Amount", &[], &content)
}

/// The amount field: the visible text input, the canonical amount for the
/// enclosing form, and the currency prefix.
///
/// Set `after_keystroke` when the field replaces one the user is typing in.
fn amount_field_view(
    field_id: &str,
    editor: &AmountEditor,
    currency_symbol: &str,
    after_keystroke: bool,
) -> Markup {

    html! {
        div
            id=(format!("{field_id}-field"))
            class="amount-field relative"
        {
            input type="hidden" name="field_id" value=(field_id);
            input type="hidden" name="amount" value=(editor.value().to_string());

            input
                id=(field_id)
                type="text"
                name="display"
                inputmode="numeric"
                autocomplete="off"
                placeholder="0,00"
                value=(editor.display_value())
                data-refocus=[after_keystroke.then_some("true")]
                hx-post=(endpoints::AMOUNT_FIELD)
                hx-trigger="input"
                hx-include="closest .amount-field"
                hx-target="closest .amount-field"
                hx-swap="outerHTML"
                onfocus=(focus_script(&editor.on_focus()))
                class=(format!("{FORM_TEXT_INPUT_STYLE} pl-8"));

            span
                class="absolute left-3 top-1/2 -translate-y-1/2 text-sm text-gray-500 pointer-events-none"
            {
                (currency_symbol)
            }
        }
    }
}

/// The `onfocus` handler of the text input.
///
/// htmx focuses the swapped-in input after each keystroke. That focus puts the
/// caret after the last digit so the next digit is appended. Any other focus
/// selects `selection` so the next digit starts a new amount.
fn focus_script(selection: &Range<usize>) -> String {
    format!(
        "if (this.dataset.refocus) {{ delete this.dataset.refocus; this.setSelectionRange({end}, {end}); }} \
         else {{ this.setSelectionRange({start}, {end}); }}",
        start = selection.start,
        end = selection.end,
    )
}
