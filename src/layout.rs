use std::fmt::Write;

use crate::data::{CV_FILE_NAME, PERSONAL_INFO};
use crate::markup::{escape, Markup};
use crate::navigation;

/// Wraps a rendered page body in the site shell
///
/// The shell is the same for every route:
///  - document head with the page title and stylesheet
///  - navigation bar with the link for `current_path` marked active
///  - the page body inside `<main>`
///  - footer with the CV download
pub(crate) fn document(page_title: &str, current_path: &str, body: &str) -> String {
    let mut markup = Markup::new();
    markup.raw("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">");
    markup.raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    let _ = write!(
        markup,
        "<title>{} | {}</title>",
        escape(page_title),
        escape(&PERSONAL_INFO.name)
    );
    markup.raw("<link rel=\"stylesheet\" href=\"/assets/site.css\"></head>");
    let section = navigation::active_link(current_path).map(|link| link.label).unwrap_or("none");
    let _ = write!(
        markup,
        "<body data-section=\"{}\"><div class=\"page-shell\">",
        section.to_ascii_lowercase()
    );
    markup.raw(&navigation::render(current_path));
    markup.raw("<main class=\"container\">");
    markup.raw(body);
    markup.raw("</main>");
    let _ = write!(
        markup,
        "<footer class=\"site-footer container\"><p>&copy; {}</p><a href=\"/{}\" download>Download CV (PDF)</a></footer>",
        escape(&PERSONAL_INFO.name),
        CV_FILE_NAME
    );
    markup.raw("</div></body></html>");
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_contains_title_nav_and_body() -> () {
        let html = document("Skills", "/skills", "<p id=\"body\">x</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Skills | Olaribigbe Amodu</title>"));
        assert!(html.contains("<main class=\"container\"><p id=\"body\">x</p></main>"));
        assert!(html.contains("href=\"/Ola-Amodu-CV.pdf\" download"));
        assert!(html.contains("class=\"nav-link active\" aria-current=\"page\">Skills<"));
        assert!(html.contains("<body data-section=\"skills\">"));
    }
}
