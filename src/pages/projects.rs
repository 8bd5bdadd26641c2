use std::fmt::Write;

use super::{icon, page_header};
use crate::data::PROJECTS;
use crate::dataobjects::Project;
use crate::markup::{escape, Markup};

fn render_project(markup: &mut Markup, index: usize, project: &Project) {
    let variant = if project.featured { "featured" } else { "regular" };
    let _ = write!(markup, "<article class=\"card project {}\" data-entry=\"{}\">", variant, index);

    if project.featured {
        markup.raw("<div class=\"project-badge\"><span class=\"badge badge-featured\">&#11088; Featured Project</span></div>");
    }

    let _ = write!(markup, "<div class=\"project-head\"><div class=\"project-icon\">{}</div><div>", icon(project.icon));
    markup.element("h3", "project-title", &project.title);
    markup.element("p", "project-category", &project.category);
    markup.raw("</div></div>");

    markup.element("p", "project-description", &project.description);

    markup.raw("<div class=\"project-technologies\">");
    markup.element("h4", "", "Technologies:");
    markup.raw("<div class=\"badges\">");
    for tech in project.technologies.iter() {
        markup.element("span", "badge", tech);
    }
    markup.raw("</div></div>");

    markup.raw("<div class=\"project-outcomes\">");
    markup.element("h4", "", "Key Outcomes:");
    markup.raw("<ul class=\"checks\">");
    for outcome in project.outcomes.iter() {
        let _ = write!(markup, "<li><span class=\"check\">&#10003;</span><span>{}</span></li>", escape(outcome));
    }
    markup.raw("</ul></div>");

    markup.raw("<div class=\"project-proof\">");
    markup.element("h4", "", "Proof of Work:");
    markup.element("p", "", &project.proof);
    if let Some(ref link) = project.link {
        let _ = write!(
            markup,
            "<a href=\"{}\" class=\"button button-primary\">View Full Project Details</a>",
            escape(link)
        );
    }
    markup.raw("</div></article>");
}

pub(crate) fn render() -> String {
    render_projects(&PROJECTS)
}

pub(crate) fn render_projects(projects: &[Project]) -> String {
    let mut markup = Markup::new();
    markup.raw("<div class=\"page page-projects\">");
    page_header(
        &mut markup,
        "Portfolio Projects",
        "Production-grade projects demonstrating cybersecurity, infrastructure, and automation expertise \
         with real-world business impact and documented proof of work.",
    );

    markup.raw("<div class=\"project-grid\">");
    for (index, project) in projects.iter().enumerate() {
        render_project(&mut markup, index, project);
    }
    markup.raw("</div>");

    markup.raw("<section class=\"panel more-projects\">");
    markup.element("h3", "section-title", "Additional Projects & Documentation");
    markup.element(
        "p",
        "",
        "Comprehensive project files, code samples, configuration scripts, and technical documentation \
         available on GitHub. All projects include setup instructions, security considerations, and lessons learned.",
    );
    markup.raw("<div class=\"actions\">");
    markup.raw("<a href=\"https://github.com/olaribigbeamodu\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"button button-primary\">View GitHub Profile</a>");
    markup.raw("<a href=\"/contact\" class=\"button button-outline\">Request Project Details</a>");
    markup.raw("</div></section>");

    markup.raw("</div>");
    markup.into_string()
}
