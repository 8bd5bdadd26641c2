//- Small helpers for producing HTML text. Pages build their markup with
//- `write!` into a `Markup` and route every piece of display text through
//- `escape` on the way in.

use std::borrow::Cow;
use std::fmt;

/// Escapes text for use in element content and double-quoted attributes
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Growable HTML buffer
#[derive(Default, Debug)]
pub(crate) struct Markup {
    buffer: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends trusted markup as-is
    pub fn raw(self: &mut Self, html: &str) -> &mut Self {
        self.buffer.push_str(html);
        self
    }

    /// Appends escaped text
    pub fn text(self: &mut Self, text: &str) -> &mut Self {
        self.buffer.push_str(&escape(text));
        self
    }

    /// `<tag class="..">text</tag>`, text escaped
    pub fn element(self: &mut Self, tag: &str, class: &str, text: &str) -> &mut Self {
        if class.is_empty() {
            self.buffer.push_str(&format!("<{}>", tag));
        } else {
            self.buffer.push_str(&format!("<{} class=\"{}\">", tag, class));
        }
        self.text(text);
        self.buffer.push_str(&format!("</{}>", tag));
        self
    }

    /// A `<ul>` with one escaped `<li>` per item
    pub fn list<I, S>(self: &mut Self, class: &str, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buffer.push_str(&format!("<ul class=\"{}\">", class));
        for item in items {
            self.element("li", "", item.as_ref());
        }
        self.buffer.push_str("</ul>");
        self
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl fmt::Write for Markup {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}
