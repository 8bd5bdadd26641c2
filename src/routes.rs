use crate::layout;
use crate::pages::{self, contact::ContactView};

/// The pages of the site
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Page {
    Home,
    Experience,
    Projects,
    SecureVigil,
    Skills,
    Contact,
}

pub(crate) static ROUTES: [(&str, Page); 6] = [
    ("/", Page::Home),
    ("/experience", Page::Experience),
    ("/projects", Page::Projects),
    ("/projects/securevigil", Page::SecureVigil),
    ("/skills", Page::Skills),
    ("/contact", Page::Contact),
];

impl Page {
    /// Exact lookup, ignoring a single trailing slash
    pub fn from_path(path: &str) -> Option<Page> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        ROUTES.iter().find(|(route, _)| *route == path).map(|(_, page)| *page)
    }

    pub fn path(self: &Self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, page)| page == self)
            .map(|(route, _)| *route)
            .unwrap_or("/")
    }

    pub fn title(self: &Self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Experience => "Experience",
            Page::Projects => "Projects",
            Page::SecureVigil => "SecureVigil",
            Page::Skills => "Skills",
            Page::Contact => "Contact",
        }
    }
}

/// Full HTML document for `page`, with navigation computed from `current_path`
pub(crate) fn render(page: Page, current_path: &str) -> String {
    let body = match page {
        Page::Home => pages::home::render(),
        Page::Experience => pages::experience::render(),
        Page::Projects => pages::projects::render(),
        Page::SecureVigil => pages::securevigil::render(),
        Page::Skills => pages::skills::render(),
        Page::Contact => pages::contact::render(&ContactView::default()),
    };
    layout::document(page.title(), current_path, &body)
}

pub(crate) fn render_contact(current_path: &str, view: &ContactView) -> String {
    layout::document(Page::Contact.title(), current_path, &pages::contact::render(view))
}

pub(crate) fn render_not_found(current_path: &str) -> String {
    let body = format!(
        "<div class=\"page page-not-found\"><header class=\"page-header\">\
         <h1 class=\"page-title\">Page Not Found</h1>\
         <p class=\"page-lead\">The page you are looking for does not exist.</p>\
         <a href=\"{}\" class=\"button button-primary\">Back to Home</a></header></div>",
        Page::Home.path()
    );
    layout::document("Not Found", current_path, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_modulo_trailing_slash() -> () {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path("/skills/"), Some(Page::Skills));
        assert_eq!(Page::from_path("/projects/securevigil"), Some(Page::SecureVigil));
        assert_eq!(Page::from_path("/projects/other"), None);
        assert_eq!(Page::from_path("/skills//"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn path_round_trips_through_lookup() -> () {
        for (route, page) in ROUTES.iter() {
            assert_eq!(page.path(), *route);
            assert_eq!(Page::from_path(route), Some(*page));
        }
    }

    #[test]
    fn every_route_renders_a_document() -> () {
        for (route, page) in ROUTES.iter() {
            let html = render(*page, route);
            assert!(html.contains(&format!("<title>{} | ", page.title())));
            assert!(html.ends_with("</html>"));
        }
    }

    #[test]
    fn not_found_has_no_active_link() -> () {
        let html = render_not_found("/nowhere");
        assert!(html.contains("Page Not Found"));
        assert!(!html.contains("aria-current"));
    }
}
