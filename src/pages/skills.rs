use std::fmt::Write;

use super::{icon, page_header};
use crate::data::{CERTIFICATIONS, KEY_SKILLS, SKILL_CATEGORIES};
use crate::dataobjects::{Certification, CertificationStatus, SkillCategory};
use crate::markup::{escape, Markup};

fn render_category(markup: &mut Markup, index: usize, category: &SkillCategory) {
    let _ = write!(markup, "<div class=\"card skill-category\" data-entry=\"{}\">", index);
    markup.element("h3", "card-title", &category.category);
    markup.raw("<div class=\"chips\">");
    for skill in category.skills.iter() {
        markup.element("span", "chip", skill);
    }
    markup.raw("</div></div>");
}

fn render_certification(markup: &mut Markup, index: usize, cert: &Certification) {
    let status_class = match cert.status {
        CertificationStatus::Certified => "status-certified",
        _ => "status-pending",
    };
    let _ = write!(
        markup,
        "<div class=\"card certification\" data-entry=\"{}\">{}<div>",
        index,
        icon("award")
    );
    markup.element("h3", "cert-name", &cert.name);
    markup.element("p", "cert-issuer", &cert.issuer);
    let _ = write!(
        markup,
        "<div class=\"cert-meta\"><span class=\"status {}\">{}</span>",
        status_class,
        cert.status.label()
    );
    if let Some(ref year) = cert.year {
        let _ = write!(markup, "<span class=\"cert-year\">{}</span>", escape(year));
    }
    markup.raw("</div></div></div>");
}

pub(crate) fn render() -> String {
    render_sections(&SKILL_CATEGORIES, &KEY_SKILLS, &CERTIFICATIONS)
}

pub(crate) fn render_sections(
    categories: &[SkillCategory],
    key_skills: &[String],
    certifications: &[Certification],
) -> String {
    let mut markup = Markup::new();
    markup.raw("<div class=\"page page-skills\">");
    page_header(
        &mut markup,
        "Technical Skills & Certifications",
        "Comprehensive expertise across cybersecurity, infrastructure, and development",
    );

    markup.raw("<section class=\"skills\">");
    markup.element("h2", "section-title", "Technical Skills");
    markup.raw("<div class=\"card-grid\">");
    for (index, category) in categories.iter().enumerate() {
        render_category(&mut markup, index, category);
    }
    markup.raw("</div></section>");

    markup.raw("<section class=\"panel key-skills\">");
    markup.element("h2", "section-title", "Key Applied Skills");
    markup.raw("<div class=\"key-skill-grid\">");
    for skill in key_skills.iter() {
        let _ = write!(
            markup,
            "<div class=\"key-skill\">{}<span>{}</span></div>",
            icon("check-circle"),
            escape(skill)
        );
    }
    markup.raw("</div></section>");

    markup.raw("<section class=\"certifications\">");
    let _ = write!(markup, "<h2 class=\"section-title\">{}Certifications &amp; Credentials</h2>", icon("award"));
    markup.raw("<div class=\"card-grid\">");
    for (index, cert) in certifications.iter().enumerate() {
        render_certification(&mut markup, index, cert);
    }
    markup.raw("</div></section>");

    markup.raw("<section class=\"panel references\">");
    markup.element("h2", "section-title", "References");
    markup.element("p", "", "Available upon request");
    markup.raw("</section>");

    markup.raw("</div>");
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn in_order(html: &str, needles: &[String]) -> bool {
        let mut from = 0;
        for needle in needles {
            match html[from..].find(needle.as_str()) {
                Some(offset) => from += offset + needle.len(),
                None => return false,
            }
        }
        true
    }

    #[test]
    fn one_block_per_category_and_certification() -> () {
        let categories = data::skill_categories();
        let certifications = data::certifications();
        let html = render_sections(&categories, &data::key_skills(), &certifications);

        assert_eq!(html.matches("class=\"card skill-category\"").count(), categories.len());
        assert_eq!(html.matches("class=\"card certification\"").count(), certifications.len());

        let category_names: Vec<String> = categories.iter().map(|c| escape(&c.category).into_owned()).collect();
        assert!(in_order(&html, &category_names));

        // names repeat ("Ethical Hacking" twice), so match name and issuer together
        let cert_blocks: Vec<String> = certifications
            .iter()
            .map(|c| format!("{}</h3><p class=\"cert-issuer\">{}", escape(&c.name), escape(&c.issuer)))
            .collect();
        assert!(in_order(&html, &cert_blocks));
    }

    #[test]
    fn status_badge_depends_on_status() -> () {
        let certs = vec![
            Certification {
                name: "A".into(),
                issuer: "X".into(),
                status: CertificationStatus::InView,
                year: None,
            },
            Certification {
                name: "B".into(),
                issuer: "X".into(),
                status: CertificationStatus::Certified,
                year: Some("2025".into()),
            },
        ];
        let html = render_sections(&[], &[], &certs);
        assert!(html.contains("<span class=\"status status-pending\">In View</span></div>"));
        assert!(html.contains("<span class=\"status status-certified\">Certified</span><span class=\"cert-year\">2025</span>"));
    }
}
