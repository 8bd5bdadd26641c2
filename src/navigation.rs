use std::fmt::Write;

use crate::data::PERSONAL_INFO;
use crate::markup::{escape, Markup};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

pub(crate) static NAV_LINKS: [NavLink; 5] = [
    NavLink { path: "/", label: "Home" },
    NavLink { path: "/experience", label: "Experience" },
    NavLink { path: "/projects", label: "Projects" },
    NavLink { path: "/skills", label: "Skills" },
    NavLink { path: "/contact", label: "Contact" },
];

/// Root is active only on an exact match, every other link on a prefix match
pub(crate) fn is_active(link: &NavLink, current_path: &str) -> bool {
    if link.path == "/" {
        return current_path == "/";
    }
    current_path.starts_with(link.path)
}

pub(crate) fn active_link(current_path: &str) -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| is_active(link, current_path))
}

fn render_links(markup: &mut Markup, current_path: &str, class: &str) {
    for link in NAV_LINKS.iter() {
        let (active_class, current_attr) = if is_active(link, current_path) {
            (" active", " aria-current=\"page\"")
        } else {
            ("", "")
        };
        let _ = write!(
            markup,
            "<a href=\"{}\" class=\"{}{}\"{}>{}</a>",
            link.path,
            class,
            active_class,
            current_attr,
            escape(link.label)
        );
    }
}

/// Top bar: brand, desktop link row, and a collapsible menu for small screens
pub(crate) fn render(current_path: &str) -> String {
    let mut markup = Markup::new();
    markup.raw("<nav class=\"site-nav\"><div class=\"container nav-bar\">");
    let _ = write!(
        markup,
        "<a href=\"/\" class=\"brand\"><span class=\"icon icon-shield\" aria-hidden=\"true\"></span><span>{}</span></a>",
        escape(&PERSONAL_INFO.name)
    );

    markup.raw("<div class=\"nav-desktop\">");
    render_links(&mut markup, current_path, "nav-link");
    markup.raw("</div>");

    markup.raw("<details class=\"nav-mobile\"><summary aria-label=\"Toggle menu\"><span class=\"icon icon-menu\"></span></summary><div class=\"nav-mobile-links\">");
    render_links(&mut markup, current_path, "nav-mobile-link");
    markup.raw("</div></details>");

    markup.raw("</div></nav>");
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(path: &str) -> Vec<&'static str> {
        NAV_LINKS.iter().filter(|link| is_active(link, path)).map(|link| link.label).collect()
    }

    #[test]
    fn exactly_one_link_active_per_route() -> () {
        let expected = [
            ("/", "Home"),
            ("/experience", "Experience"),
            ("/projects", "Projects"),
            ("/projects/securevigil", "Projects"),
            ("/skills", "Skills"),
            ("/contact", "Contact"),
        ];
        for (path, label) in expected.iter() {
            assert_eq!(active_labels(path), vec![*label], "path {}", path);
        }
    }

    #[test]
    fn home_needs_exact_match() -> () {
        let home = &NAV_LINKS[0];
        assert!(is_active(home, "/"));
        assert!(!is_active(home, "/experience"));
        assert!(!is_active(home, ""));
    }

    #[test]
    fn non_root_links_match_by_prefix() -> () {
        assert_eq!(active_link("/skills/"), Some(&NAV_LINKS[3]));
        assert_eq!(active_link("/projects/anything"), Some(&NAV_LINKS[2]));
        assert_eq!(active_link("/unknown"), None);
    }

    #[test]
    fn rendered_bar_marks_active_link_in_both_menus() -> () {
        let html = render("/projects/securevigil");
        assert_eq!(html.matches("aria-current=\"page\"").count(), 2);
        assert!(html.contains("<a href=\"/projects\" class=\"nav-link active\" aria-current=\"page\">Projects</a>"));
        assert!(html.contains("<a href=\"/\" class=\"nav-link\">Home</a>"));
    }

    #[test]
    fn mobile_links_carry_the_same_active_state() -> () {
        let html = render("/skills");
        assert!(html.contains("<a href=\"/skills\" class=\"nav-mobile-link active\" aria-current=\"page\">Skills</a>"));
        assert!(html.contains("<a href=\"/contact\" class=\"nav-mobile-link\">Contact</a>"));
        assert_eq!(html.matches(" active\"").count(), 2);
    }
}
