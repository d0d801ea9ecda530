//! Chart generation and rendering for the dashboard.
//!
//! The monthly income/expense breakdown is rendered as an ECharts bar chart.
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a corresponding HTML container and JavaScript
//! initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip,
        Trigger,
    },
    series::Bar,
};
use maud::{Markup, PreEscaped, html};

use crate::summary::MonthlyTotals;

const ECHARTS_SOURCE: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

const INCOME_COLOR: &str = "#27ae60";
const EXPENSE_COLOR: &str = "#eb5757";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(crate) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(crate) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html! {
        @for chart in charts {
            div id=(chart.id) class="chart-container" {}
        }
    }
}

/// Generates the script tags that load ECharts and initialize each chart
/// with responsive resizing.
pub(crate) fn charts_script(charts: &[DashboardChart]) -> Markup {
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
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    html! {
        script src=(ECHARTS_SOURCE) {}
        script { (PreEscaped(wrapped_script)) }
    }
}

/// A bar chart of income and expense totals per month, in the same order as
/// the breakdown itself.
pub(crate) fn monthly_totals_chart(months: &[MonthlyTotals]) -> Chart {
    let labels: Vec<String> = months.iter().map(|totals| totals.month.clone()).collect();
    let income: Vec<f64> = months.iter().map(|totals| totals.income as f64).collect();
    let expense: Vec<f64> = months.iter().map(|totals| totals.expense as f64).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Monthly Overview")
                .subtext("Income and expenses per month"),
        )
        .tooltip(rupiah_tooltip())
        .legend(Legend::new().left(250).top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(rupiah_formatter())),
        )
        .series(
            Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color(INCOME_COLOR))
                .data(income),
        )
        .series(
            Bar::new()
                .name("Expense")
                .item_style(ItemStyle::new().color(EXPENSE_COLOR))
                .data(expense),
        )
}

#[inline]
fn rupiah_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const rupiahFormatter = new Intl.NumberFormat('id-ID', {
              style: 'currency',
              currency: 'IDR',
              maximumFractionDigits: 0
            });
            return (number) ? rupiahFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for Rupiah values.
fn rupiah_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(rupiah_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod charts_tests {
    use crate::summary::MonthlyTotals;

    use super::{DashboardChart, charts_script, charts_view, monthly_totals_chart};

    fn sample_months() -> Vec<MonthlyTotals> {
        vec![
            MonthlyTotals {
                month: "2024-02".to_owned(),
                income: 0,
                expense: 300_000,
            },
            MonthlyTotals {
                month: "2024-01".to_owned(),
                income: 5_000_000,
                expense: 150_000,
            },
        ]
    }

    #[test]
    fn chart_options_contain_months_and_both_series() {
        let options = monthly_totals_chart(&sample_months()).to_string();

        assert!(options.contains("2024-02"));
        assert!(options.contains("2024-01"));
        assert!(options.contains("Income"));
        assert!(options.contains("Expense"));
        // Month order mirrors the breakdown, not the calendar.
        assert!(options.find("2024-02").unwrap() < options.find("2024-01").unwrap());
    }

    #[test]
    fn charts_view_renders_a_container_per_chart() {
        let charts = [DashboardChart {
            id: "monthly-chart",
            options: String::new(),
        }];

        let html = charts_view(&charts).into_string();

        assert!(html.contains("id=\"monthly-chart\""));
        assert!(html.contains("chart-container"));
    }

    #[test]
    fn charts_script_initializes_each_chart() {
        let charts = [DashboardChart {
            id: "monthly-chart",
            options: "{}".to_owned(),
        }];

        let html = charts_script(&charts).into_string();

        assert!(html.contains("echarts.init"));
        assert!(html.contains("monthly-chart"));
    }
}
