//! Chart generation and rendering for the statistics page.
//!
//! The expenses chart is generated as ECharts JSON configuration and mounted by
//! a small initialization script, with one bar per category coloured in the
//! category's own colour.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip,
        Trigger,
    },
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, statistics::aggregation::ChartEntry};

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct StatisticsChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for `charts`.
pub(super) fn charts_view(charts: &[StatisticsChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            @for chart in charts {
                div
                    id=(chart.id)
                    class="min-h-[400px] rounded dark:bg-gray-100"
                {}
            }
        }
    )
}

/// Generates JavaScript initialization code for `charts`.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[StatisticsChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id,
                escape_script_text(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Stops chart options from closing the surrounding `<script>` element.
///
/// Category names come from the upstream payload, so they may contain
/// `</script>`. Inside a JS string `<\/` reads the same as `</`.
fn escape_script_text(options: &str) -> String {
    options.replace("</", "<\\/").replace("<!--", "<\\!--")
}

/// A bar chart of the total expenses per category.
///
/// `entries` are plotted in the order given. `total` is used to show each
/// category's share in the tooltip.
pub(super) fn expenses_chart(entries: &[ChartEntry], total: f64) -> Chart {
    let labels: Vec<String> = entries.iter().map(|entry| entry.name.clone()).collect();
    let data: Vec<DataPointItem> = entries
        .iter()
        .map(|entry| {
            DataPointItem::new(entry.value)
                .name(entry.name.clone())
                .item_style(ItemStyle::new().color(entry.category_color.as_str()))
        })
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(share_formatter(total))
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .axis_label(AxisLabel::new().rotate(45.0))
                .data(labels),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(rounded_currency_formatter())),
        )
        .series(bar::Bar::new().name("Valor").data(data))
}

/// Formats axis values as whole BRL amounts, e.g. "R$ 1.235".
fn rounded_currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('pt-BR', {
              style: 'currency',
              currency: 'BRL',
              minimumFractionDigits: 0,
              maximumFractionDigits: 0
            });
            return currencyFormatter.format(number);",
    )
}

/// Formats a category total with its share of `total`, e.g. "R$ 12,50 (25.0%)".
fn share_formatter(total: f64) -> JsFunction {
    JsFunction::new_with_args(
        "value",
        &format!(
            "const total = {total};
            const currencyFormatter = new Intl.NumberFormat('pt-BR', {{
              style: 'currency',
              currency: 'BRL'
            }});
            const percentage = total > 0 ? ((Number(value) / total) * 100).toFixed(1) : '0.0';
            return currencyFormatter.format(Number(value)) + ' (' + percentage + '%)';"
        ),
    )
}
