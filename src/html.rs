//! The base page layout and shared styling.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::navigation::NavBar;

// The app ships a single hand-written stylesheet inlined into every page, so
// there are no static assets to serve.
const STYLESHEET: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: system-ui, -apple-system, sans-serif;
    background: #f7f6f3;
    color: #222;
}
.topbar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
    padding: 0 2rem;
    background: #fff;
    border-bottom: 1px solid #e3e3e3;
}
.logo { font-weight: 700; font-size: 22px; color: #2f80ed; letter-spacing: 1px; }
.navbar {
    display: flex;
    gap: 8px;
    padding: 0.75rem 2rem;
    background: #fff;
    border-bottom: 1px solid #e3e3e3;
}
.nav-link {
    padding: 0.4rem 0.9rem;
    border-radius: 6px;
    color: #555;
    text-decoration: none;
    font-weight: 500;
}
.nav-link:hover { background: #f2f6fc; }
.nav-link.active { background: #2f80ed; color: #fff; }
.main-content { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.card {
    background: #fff;
    border-radius: 10px;
    padding: 1.5rem 2rem;
    margin-bottom: 2rem;
    box-shadow: 0 2px 8px rgba(0,0,0,0.03);
}
.card-subtitle { margin-top: 4px; color: #888; font-size: 15px; }
.metric-row { display: flex; gap: 2rem; flex-wrap: wrap; margin-bottom: 2rem; }
.card-metric { flex: 1; min-width: 220px; margin-bottom: 0; }
.card-metric-label { color: #888; font-weight: 600; font-size: 13px; letter-spacing: 1px; }
.card-metric-value { font-size: 28px; font-weight: 700; }
.value-balance { color: #2f80ed; }
.value-income { color: #27ae60; }
.value-expense { color: #eb5757; }
table { width: 100%; border-collapse: collapse; margin-top: 1rem; font-size: 15px; }
th { text-align: left; padding: 0.5rem; background: #f7f6f3; }
td { padding: 0.5rem; border-bottom: 1px solid #eee; }
td.amount { text-align: right; font-weight: 500; }
.amount-income { color: #27ae60; }
.amount-expense { color: #eb5757; }
.empty-state { color: #888; text-align: center; margin-top: 1rem; }
.chart-container { width: 100%; min-height: 320px; margin-top: 1.5rem; }
.about-card { min-height: 220px; max-width: 600px; margin: 0 auto; }
.about-highlight {
    margin-top: 2rem;
    background: #f7f6f3;
    border-radius: 8px;
    padding: 1.5rem 2rem;
    color: #2f80ed;
    font-weight: 500;
    font-size: 16px;
    box-shadow: 0 2px 8px rgba(47,128,237,0.04);
}
form.transaction-form {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
    gap: 1rem;
    margin-bottom: 1.5rem;
    align-items: end;
}
label { display: block; font-weight: 500; color: #555; margin-bottom: 0.25rem; }
input, select {
    width: 100%;
    padding: 0.5rem;
    border-radius: 6px;
    border: 1px solid #ccc;
    font-size: 15px;
}
button, .button {
    padding: 0.7rem 1.5rem;
    border-radius: 8px;
    border: none;
    background: #2f80ed;
    color: #fff;
    font-weight: 700;
    font-size: 16px;
    cursor: pointer;
    text-decoration: none;
    display: inline-block;
}
button.delete {
    background: none;
    color: #eb5757;
    font-size: 1.1rem;
    padding: 2px 10px;
    border-radius: 4px;
}
.button-import { background: #27ae60; }
.alert { border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1.5rem; }
.alert-success { background: #eafaf1; color: #1e874b; }
.alert-error { background: #fdecec; color: #c0392b; }
.alert-message { margin: 0; font-weight: 600; }
.alert-details { margin: 0.25rem 0 0; font-size: 14px; }
"#;

/// Wrap `content` in the base page layout: topbar, navigation and styling.
///
/// `active_endpoint` decides which navigation link is highlighted.
pub fn page(title: &str, active_endpoint: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Duit" }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                header class="topbar" {
                    div class="logo" { "💸 Duit" }
                    span { "Hi, User" }
                }
                (NavBar::new(active_endpoint).into_html())
                main class="main-content" {
                    (content)
                }
            }
        }
    }
}

/// A full-page error view used for responses outside the normal page flow.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html! {
        div class="card" {
            h1 class="value-balance" { (header) }
            h2 { (description) }
            p class="card-subtitle" { (fix) }
            p { a class="button" href="/" { "Back to Dashboard" } }
        }
    };

    page(title, "", &content)
}

#[cfg(test)]
mod html_tests {
    use maud::html;

    use crate::endpoints;

    use super::page;

    #[test]
    fn page_includes_title_navigation_and_content() {
        let markup = page(
            "Dashboard",
            endpoints::DASHBOARD_VIEW,
            &html! { p { "hello" } },
        )
        .into_string();

        assert!(markup.contains("<title>Dashboard - Duit</title>"));
        assert!(markup.contains("nav-link active"));
        assert!(markup.contains("hello"));
    }
}
