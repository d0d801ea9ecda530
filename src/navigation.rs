//! The navigation bar shown on every page.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the navigation bar.
///
/// It will change appearance if `is_current` is set to `true`. Only one link
/// should be active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let class = if self.is_current {
            "nav-link active"
        } else {
            "nav-link"
        };

        html!( a href=(self.url) class=(class) { (self.title) } )
    }
}

/// The navigation bar template.
pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, that link is marked as active and
    /// displayed differently.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::DASHBOARD_VIEW,
                title: "Dashboard",
                is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
            },
            Link {
                url: endpoints::TRANSACTIONS_VIEW,
                title: "Transactions",
                is_current: active_endpoint == endpoints::TRANSACTIONS_VIEW,
            },
            Link {
                url: endpoints::BACKUP_VIEW,
                title: "Backup",
                is_current: active_endpoint == endpoints::BACKUP_VIEW,
            },
            Link {
                url: endpoints::ACTIVITY_VIEW,
                title: "Activity Log",
                is_current: active_endpoint == endpoints::ACTIVITY_VIEW,
            },
            Link {
                url: endpoints::ABOUT_VIEW,
                title: "About",
                is_current: active_endpoint == endpoints::ABOUT_VIEW,
            },
        ];

        NavBar { links }
    }

    /// Render the navigation bar as HTML.
    pub fn into_html(self) -> Markup {
        html! {
            nav class="navbar" {
                @for link in self.links {
                    (link.into_html())
                }
            }
        }
    }
}

#[cfg(test)]
mod navigation_tests {
    use crate::endpoints;

    use super::NavBar;

    #[test]
    fn marks_the_active_endpoint() {
        let html = NavBar::new(endpoints::TRANSACTIONS_VIEW)
            .into_html()
            .into_string();

        assert!(html.contains(&format!(
            "href=\"{}\" class=\"nav-link active\"",
            endpoints::TRANSACTIONS_VIEW
        )));
        assert!(html.contains(&format!(
            "href=\"{}\" class=\"nav-link\"",
            endpoints::DASHBOARD_VIEW
        )));
    }
}
