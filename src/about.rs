//! The static About page.

use maud::{Markup, html};

use crate::{endpoints, html::page};

/// Renders the About page.
pub async fn get_about_page() -> Markup {
    let content = html! {
        div class="card about-card" {
            h2 { "About" }
            p class="card-subtitle" {
                "Personal finance tracker built with Rust & axum."
            }
            div class="about-highlight" {
                span { "Track your income and expenses, month by month, entirely on your own machine." }
            }
        }
    };

    page("About", endpoints::ABOUT_VIEW, &content)
}

#[cfg(test)]
mod about_tests {
    use super::get_about_page;

    #[tokio::test]
    async fn renders_the_about_card() {
        let html = get_about_page().await.into_string();

        assert!(html.contains("About"));
        assert!(html.contains("Personal finance tracker"));
        assert!(html.contains("about-highlight"));
    }
}
