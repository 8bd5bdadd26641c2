//! Page bodies, one module per route. Each `render` returns the markup that
//! goes inside `<main>`; `layout::document` adds the shell.

pub(crate) mod contact;
pub(crate) mod experience;
pub(crate) mod home;
pub(crate) mod projects;
pub(crate) mod securevigil;
pub(crate) mod skills;

/// Decorative icon placeholder, styled by `site.css`
pub(crate) fn icon(name: &str) -> String {
    format!("<span class=\"icon icon-{}\" aria-hidden=\"true\"></span>", name)
}

/// Centered page heading with a lead paragraph
pub(crate) fn page_header(markup: &mut crate::markup::Markup, title: &str, lead: &str) {
    markup.raw("<header class=\"page-header\">");
    markup.element("h1", "page-title", title);
    markup.element("p", "page-lead", lead);
    markup.raw("</header>");
}
