//! The dashboard page: balance cards and the monthly breakdown.

use axum::extract::State;
use maud::{Markup, html};

use crate::{
    AppState,
    charts::{DashboardChart, charts_script, charts_view, monthly_totals_chart},
    currency::{format_rupiah, format_rupiah_amount},
    endpoints,
    html::page,
    summary::{LedgerSummary, MonthlyTotals, monthly_breakdown, summarize},
};

/// Renders the dashboard page.
///
/// The summary and monthly breakdown are recomputed from the ledger snapshot
/// on every request.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn get_dashboard_page(State(state): State<AppState>) -> Markup {
    let ledger = state.ledger.lock().unwrap();
    let summary = summarize(ledger.transactions());
    let months = monthly_breakdown(ledger.transactions());

    dashboard_view(summary, &months)
}

fn dashboard_view(summary: LedgerSummary, months: &[MonthlyTotals]) -> Markup {
    let charts = [DashboardChart {
        id: "monthly-chart",
        options: monthly_totals_chart(months).to_string(),
    }];

    let content = html! {
        div class="metric-row" {
            (metric_card("BALANCE", "value-balance", &format_rupiah(summary.balance)))
            (metric_card(
                "INCOME",
                "value-income",
                &format!("+{}", format_rupiah_amount(summary.total_income)),
            ))
            (metric_card(
                "EXPENSE",
                "value-expense",
                &format!("-{}", format_rupiah_amount(summary.total_expense)),
            ))
        }

        div class="card" {
            h2 { "Dashboard" }
            p class="card-subtitle" { "Overview of your monthly income and expenses." }

            @if months.is_empty() {
                p class="empty-state" { "No transactions yet." }
            } @else {
                (charts_view(&charts))
                table {
                    thead {
                        tr {
                            th { "Month" }
                            th { "Income" }
                            th { "Expense" }
                        }
                    }
                    tbody {
                        @for totals in months {
                            tr {
                                td { (totals.month) }
                                td class="amount amount-income" {
                                    (format_rupiah_amount(totals.income))
                                }
                                td class="amount amount-expense" {
                                    (format_rupiah_amount(totals.expense))
                                }
                            }
                        }
                    }
                }
            }
        }

        @if !months.is_empty() {
            (charts_script(&charts))
        }
    };

    page("Dashboard", endpoints::DASHBOARD_VIEW, &content)
}

fn metric_card(label: &str, value_class: &str, value: &str) -> Markup {
    html! {
        div class="card card-metric" {
            div class="card-metric-label" { (label) }
            div class={ "card-metric-value " (value_class) } { (value) }
        }
    }
}

#[cfg(test)]
mod dashboard_tests {
    use crate::summary::{LedgerSummary, MonthlyTotals};

    use super::dashboard_view;

    #[test]
    fn renders_all_three_metric_cards() {
        let summary = LedgerSummary {
            total_income: 5_000_000,
            total_expense: 150_000,
            balance: 4_850_000,
        };
        let months = [MonthlyTotals {
            month: "2024-01".to_owned(),
            income: 5_000_000,
            expense: 150_000,
        }];

        let html = dashboard_view(summary, &months).into_string();

        assert!(html.contains("Rp 4.850.000"));
        assert!(html.contains("+Rp 5.000.000"));
        assert!(html.contains("-Rp 150.000"));
        assert!(html.contains("2024-01"));
    }

    #[test]
    fn renders_the_monthly_chart_with_initialization_script() {
        let summary = LedgerSummary {
            total_income: 5_000_000,
            total_expense: 150_000,
            balance: 4_850_000,
        };
        let months = [MonthlyTotals {
            month: "2024-01".to_owned(),
            income: 5_000_000,
            expense: 150_000,
        }];

        let html = dashboard_view(summary, &months).into_string();

        assert!(html.contains("id=\"monthly-chart\""));
        assert!(html.contains("echarts.init"));
    }

    #[test]
    fn renders_empty_state_without_transactions() {
        let summary = LedgerSummary {
            total_income: 0,
            total_expense: 0,
            balance: 0,
        };

        let html = dashboard_view(summary, &[]).into_string();

        assert!(html.contains("No transactions yet."));
        assert!(html.contains("Rp 0"));
        assert!(!html.contains("echarts.init"));
    }
}
