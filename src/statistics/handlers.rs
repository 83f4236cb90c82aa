//! Statistics HTTP handler and view rendering.

use std::path::PathBuf;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    html::{
        HeadElement, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base,
    },
    money::{MonetaryAmount, format_currency},
    statistics::{
        aggregation::{ChartEntry, build_chart_data, percentage_share, total_expenses},
        charts::{StatisticsChart, charts_script, charts_view, expenses_chart},
        summary::load_category_response,
    },
};

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

/// The state needed for displaying the statistics page.
#[derive(Debug, Clone)]
pub struct StatisticsState {
    /// The JSON file holding the latest summary payload from the upstream service.
    pub summary_path: PathBuf,
}

impl FromRef<AppState> for StatisticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            summary_path: state.summary_path.clone(),
        }
    }
}

/// Display the total expenses per category as a summary card, chart and table.
pub async fn get_statistics_page(State(state): State<StatisticsState>) -> Result<Response, Error> {
    let response = load_category_response(&state.summary_path).await?;
    let entries = build_chart_data(&response.categories);

    if entries.is_empty() {
        return Ok(statistics_no_data_view().into_response());
    }

    let total = total_expenses(&entries);
    tracing::debug!(
        "rendering statistics for {} categories totalling {total}",
        entries.len()
    );

    Ok(statistics_view(&entries, total).into_response())
}

fn statistics_view(entries: &[ChartEntry], total: f64) -> Markup {
    let charts = [StatisticsChart {
        id: "expenses-chart",
        options: expenses_chart(entries, total).to_string(),
    }];

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl grid gap-6"
            {
                (total_card(total))
                (charts_view(&charts))
                (breakdown_table(entries, total))
            }
        }
    };

    base(
        "Statistics",
        &[
            HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
            charts_script(&charts),
        ],
        &content,
    )
}

fn statistics_no_data_view() -> Markup {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            p class="text-center text-gray-500 dark:text-gray-400 py-8"
            {
                "No expense data available. Add some transactions to see statistics."
            }
        }
    };

    base("Statistics", &[], &content)
}

fn total_card(total: f64) -> Markup {
    html! {
        section
            id="total-expenses"
            class="w-full p-6 bg-white rounded-lg shadow dark:bg-gray-800 text-center"
        {
            h2 class="text-xl font-semibold" { "Total Expenses: " (format_total(total)) }
        }
    }
}

fn breakdown_table(entries: &[ChartEntry], total: f64) -> Markup {
    html! {
        table id="category-breakdown" class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Transactions" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Share" }
                }
            }

            tbody
            {
                @for entry in entries {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE)
                        {
                            span
                                class="inline-block w-3 h-3 mr-2 rounded-full"
                                style=(format!("background-color: {}", entry.category_color))
                            {}
                            (entry.name)
                        }
                        td class=(TABLE_CELL_STYLE) { (entry.count) }
                        td class=(TABLE_CELL_STYLE) { (format_total(entry.value)) }
                        td class=(TABLE_CELL_STYLE) { (percentage_share(entry.value, total)) "%" }
                    }
                }
            }
        }
    }
}

/// Render a parsed total as a summary string, e.g. "R$ 1.234,56".
///
/// Totals too large to represent are shown as the raw number.
fn format_total(value: f64) -> String {
    match MonetaryAmount::from_major_units(value) {
        Ok(amount) => format_currency(amount),
        Err(error) => {
            tracing::warn!("could not format total: {error}");
            format!("R$ {value:.2}")
        }
    }
}
