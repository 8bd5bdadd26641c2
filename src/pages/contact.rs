//- Contact page with the demo message form.
//-
//- The form mirrors a browser-only form:
//-  - every field is `required` in the markup
//-  - a complete submission is acknowledged, then the form comes back empty
//-  - nothing is sent anywhere and nothing is kept

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::{icon, page_header};
use crate::data::{AREAS_OF_INTEREST, CV_FILE_NAME, PERSONAL_INFO, PROFILE_LINKS};
use crate::markup::{escape, Markup};

pub(crate) const SUCCESS_NOTICE: &str =
    "Thank you for your message! This is a demo form. In production, your message would be sent.";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn key(self: &Self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    fn label(self: &Self) -> &'static str {
        match self {
            Field::Name => "Your Name *",
            Field::Email => "Email Address *",
            Field::Subject => "Subject *",
            Field::Message => "Message *",
        }
    }

    fn placeholder(self: &Self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Subject => "Collaboration Opportunity",
            Field::Message => "Tell me about your project or opportunity...",
        }
    }
}

/// The four form fields. Absent fields decode as empty strings.
#[derive(Default, Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(self: &Self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Fields a browser would refuse to submit because of `required`
    pub fn missing_fields(self: &Self) -> Vec<Field> {
        Field::ALL.iter().copied().filter(|field| self.value(*field).trim().is_empty()).collect()
    }
}

/// What the contact page shows: the form values, the fields flagged as
/// missing, and whether the success notice is up
#[derive(Default, Debug, Clone)]
pub(crate) struct ContactView {
    pub form: ContactForm,
    pub missing: Vec<Field>,
    pub notice: Option<&'static str>,
}

impl ContactView {
    pub fn is_success(self: &Self) -> bool {
        self.notice.is_some()
    }
}

/// Handles a submission. A complete form is acknowledged and discarded, the
/// returned view carrying an empty form. An incomplete one is handed back as
/// entered with its missing fields flagged.
pub(crate) fn submit(form: ContactForm) -> ContactView {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return ContactView { form, missing, notice: None };
    }
    ContactView {
        form: ContactForm::default(),
        missing: vec![],
        notice: Some(SUCCESS_NOTICE),
    }
}

fn render_field(markup: &mut Markup, view: &ContactView, field: Field) {
    let key = field.key();
    let value = view.form.value(field);
    let invalid = view.missing.contains(&field);

    markup.raw("<div class=\"form-field\">");
    let _ = write!(markup, "<label for=\"{}\">{}</label>", key, escape(field.label()));
    let invalid_attr = if invalid { " aria-invalid=\"true\"" } else { "" };
    match field {
        Field::Message => {
            let _ = write!(
                markup,
                "<textarea id=\"{0}\" name=\"{0}\" rows=\"6\" required placeholder=\"{1}\"{2}>{3}</textarea>",
                key,
                escape(field.placeholder()),
                invalid_attr,
                escape(value)
            );
        }
        _ => {
            let input_type = if field == Field::Email { "email" } else { "text" };
            let _ = write!(
                markup,
                "<input id=\"{0}\" name=\"{0}\" type=\"{1}\" required placeholder=\"{2}\" value=\"{3}\"{4}>",
                key,
                input_type,
                escape(field.placeholder()),
                escape(value),
                invalid_attr
            );
        }
    }
    if invalid {
        markup.element("p", "field-error", "Please fill out this field.");
    }
    markup.raw("</div>");
}

fn render_form(markup: &mut Markup, view: &ContactView) {
    markup.raw("<section class=\"card contact-form\">");
    markup.element("h2", "section-title", "Send a Message");
    markup.raw("<form method=\"post\" action=\"/contact\">");
    for field in Field::ALL.iter() {
        render_field(markup, view, *field);
    }
    let _ = write!(
        markup,
        "<button type=\"submit\" class=\"button button-primary button-block\">{}Send Message</button>",
        icon("send")
    );
    markup.element(
        "p",
        "form-note",
        "* This is a demo form. In production, messages would be sent to the email address.",
    );
    markup.raw("</form></section>");
}

fn render_notice(markup: &mut Markup, notice: &str) {
    markup.raw("<dialog open class=\"notice\" role=\"alertdialog\"><form method=\"dialog\">");
    markup.element("p", "", notice);
    markup.raw("<a href=\"/contact\" class=\"button button-primary\">OK</a></form></dialog>");
}

fn render_contact_info(markup: &mut Markup) {
    let info = &*PERSONAL_INFO;

    markup.raw("<section class=\"card contact-info\">");
    markup.element("h2", "section-title", "Contact Information");
    let _ = write!(
        markup,
        "<div class=\"contact-row\">{}<div><p class=\"muted\">Email</p><a href=\"mailto:{}\">{}</a></div></div>",
        icon("mail"),
        escape(&info.email),
        escape(&info.email)
    );
    let _ = write!(
        markup,
        "<div class=\"contact-row\">{}<div><p class=\"muted\">Phone</p><a href=\"tel:{}\">{}</a></div></div>",
        icon("phone"),
        escape(&info.phone),
        escape(&info.phone_display)
    );
    let _ = write!(
        markup,
        "<div class=\"contact-row\">{}<div><p class=\"muted\">Location</p><p>{}</p></div></div>",
        icon("map-pin"),
        escape(&info.location)
    );
    markup.raw("</section>");

    markup.raw("<section class=\"card profiles\">");
    markup.element("h2", "section-title", "Professional Profiles");
    for link in PROFILE_LINKS.iter() {
        let _ = write!(
            markup,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"profile-link\">{}<div><p class=\"profile-label\">{}</p><p class=\"muted\">{}</p></div></a>",
            escape(&link.url),
            icon(&link.label.to_lowercase()),
            escape(&link.label),
            escape(&link.blurb)
        );
    }
    markup.raw("</section>");

    markup.raw("<section class=\"card interests\">");
    markup.element("h2", "section-title", "Open to Opportunities In:");
    markup.list("bullets", AREAS_OF_INTEREST.iter());
    markup.raw("</section>");
}

pub(crate) fn render(view: &ContactView) -> String {
    let mut markup = Markup::new();
    markup.raw("<div class=\"page page-contact\">");
    page_header(
        &mut markup,
        "Get In Touch",
        "Interested in collaborating on cybersecurity projects or discussing IT infrastructure solutions? \
         Let's connect and explore opportunities together.",
    );

    if let Some(notice) = view.notice {
        render_notice(&mut markup, notice);
    }

    markup.raw("<div class=\"two-columns\"><div class=\"column\">");
    render_contact_info(&mut markup);
    markup.raw("</div>");
    render_form(&mut markup, view);
    markup.raw("</div>");

    markup.raw("<section class=\"cv-download\">");
    markup.element("h2", "section-title", "Download My Complete CV");
    markup.element(
        "p",
        "",
        "Get the full details of my experience, certifications, and project portfolio",
    );
    let _ = write!(
        markup,
        "<a href=\"/{}\" download class=\"button button-primary\">Download CV (PDF)</a>",
        CV_FILE_NAME
    );
    markup.raw("</section>");

    markup.raw("</div>");
    markup.into_string()
}
