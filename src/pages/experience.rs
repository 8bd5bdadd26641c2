use std::fmt::Write;

use super::{icon, page_header};
use crate::data::EXPERIENCES;
use crate::dataobjects::Experience;
use crate::markup::{escape, Markup};

fn render_entry(markup: &mut Markup, index: usize, exp: &Experience) {
    let _ = write!(markup, "<article class=\"card experience-entry\" data-entry=\"{}\">", index);

    markup.raw("<div class=\"entry-head\"><div>");
    markup.element("h3", "entry-title", &exp.title);
    let _ = write!(
        markup,
        "<div class=\"entry-org\">{}<span>{}</span></div>",
        icon("briefcase"),
        escape(&exp.organization)
    );
    if let Some(ref location) = exp.location {
        let _ = write!(markup, "<div class=\"entry-location\">{}<span>{}</span></div>", icon("map-pin"), escape(location));
    }
    let _ = write!(
        markup,
        "</div><div class=\"entry-period\">{}<span>{}</span></div></div>",
        icon("calendar"),
        escape(&exp.period)
    );

    if let Some(ref description) = exp.description {
        markup.element("p", "entry-description", description);
    }

    markup.raw("<div class=\"entry-achievements\">");
    markup.element("h4", "", "Key Achievements:");
    markup.list("bullets", &exp.achievements);
    markup.raw("</div>");

    markup.element("span", "tag", &exp.kind);
    markup.raw("</article>");
}

pub(crate) fn render() -> String {
    render_entries(&EXPERIENCES)
}

pub(crate) fn render_entries(experiences: &[Experience]) -> String {
    let mut markup = Markup::new();
    markup.raw("<div class=\"page page-experience\">");
    page_header(
        &mut markup,
        "Professional Experience",
        "7+ Years of Leadership in IT Infrastructure, Cybersecurity, and Education",
    );
    markup.raw("<div class=\"timeline\">");
    for (index, exp) in experiences.iter().enumerate() {
        render_entry(&mut markup, index, exp);
    }
    markup.raw("</div></div>");
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn one_block_per_entry_in_order() -> () {
        let experiences = data::experiences();
        let html = render_entries(&experiences);
        assert_eq!(html.matches("class=\"card experience-entry\"").count(), experiences.len());

        let positions: Vec<usize> = experiences
            .iter()
            .map(|exp| html.find(&*escape(&exp.title)).expect("title rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn optional_fields_are_skipped() -> () {
        let exp = Experience {
            title: "Intern".into(),
            organization: "Org".into(),
            period: "2015".into(),
            achievements: vec!["one".into()],
            kind: "Support".into(),
            ..Default::default()
        };
        let html = render_entries(&[exp]);
        assert!(!html.contains("entry-location"));
        assert!(!html.contains("entry-description"));
        assert!(html.contains("<li>one</li>"));
    }
}
