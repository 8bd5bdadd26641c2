use std::fmt::Write;

use super::icon;
use crate::data::{HOME_HIGHLIGHTS, PERSONAL_INFO, PROFESSIONAL_SUMMARY};
use crate::markup::{escape, Markup};

pub(crate) fn render() -> String {
    let info = &*PERSONAL_INFO;
    let mut markup = Markup::new();

    markup.raw("<div class=\"page page-home\">");

    // hero
    markup.raw("<section class=\"hero\"><div class=\"avatar\">");
    if let Some(ref photo) = info.photo {
        let _ = write!(
            markup,
            "<img src=\"/assets/{}\" alt=\"{}\" class=\"avatar-photo\">",
            escape(photo),
            escape(&info.name)
        );
    }
    let _ = write!(markup, "<span class=\"avatar-badge\">{}</span></div>", icon("lock"));
    markup.element("h1", "hero-name", &info.name);
    markup.element("p", "hero-headline", &info.headline);
    markup.element("p", "hero-summary", &info.summary);
    markup.raw("<div class=\"hero-actions\">");
    markup.raw("<a href=\"/projects\" class=\"button button-primary\">View Projects</a>");
    markup.raw("<a href=\"/contact\" class=\"button button-outline\">Get in Touch</a>");
    markup.raw("</div></section>");

    markup.raw("<section class=\"card-grid highlights\">");
    for highlight in HOME_HIGHLIGHTS.iter() {
        let _ = write!(markup, "<div class=\"card highlight\" data-entry>{}", icon(highlight.icon));
        markup.element("h3", "card-title", &highlight.title);
        markup.element("p", "card-text", &highlight.blurb);
        markup.raw("</div>");
    }
    markup.raw("</section>");

    markup.raw("<section class=\"panel summary\">");
    markup.element("h2", "section-title", "Professional Summary");
    markup.raw("<div class=\"summary-points\">");
    for point in PROFESSIONAL_SUMMARY.iter() {
        let separator = if point.rest.starts_with(',') { "" } else { " " };
        let _ = write!(
            markup,
            "<p><strong>{}</strong>{}{}</p>",
            escape(&point.lead),
            separator,
            escape(&point.rest)
        );
    }
    markup.raw("</div></section>");

    markup.raw("<section class=\"cta\">");
    markup.element("h2", "section-title", "Ready to Collaborate?");
    markup.element(
        "p",
        "cta-text",
        "Let's discuss how I can contribute to your organization's security and infrastructure needs.",
    );
    markup.raw("<a href=\"/contact\" class=\"button button-primary\">Contact Me</a>");
    markup.raw("</section>");

    markup.raw("</div>");
    markup.into_string()
}
