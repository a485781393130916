mod dial;
mod say;

pub use dial::Dial;
pub use say::Say;

pub trait Action {
    fn as_twiml(&self) -> String;
}

#[derive(Debug, Default)]
pub struct Twiml {
    body: String,
}

impl Twiml {
    pub fn new() -> Twiml {
        Twiml::default()
    }

    pub fn add(&mut self, a: &dyn Action) -> &mut Twiml {
        self.body.push_str(&a.as_twiml());
        self
    }

    pub fn as_twiml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><Response>{}</Response>"#,
            self.body
        )
    }
}

// Inner content is escaped as text, not nested elements
fn format_xml_string(tag: &str, attributes: &[(&str, &str)], inner: &str) -> String {
    let attrs: String = attributes
        .iter()
        .map(|(k, v)| format!(r#" {}="{}""#, k, escape(v)))
        .collect();

    format!("<{tag}{attrs}>{}</{tag}>", escape(inner))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
