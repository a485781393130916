use super::{format_xml_string, Action};

#[derive(Debug, Default)]
pub struct Dial {
    pub number: String,
    pub caller_id: Option<String>,
}

impl Action for Dial {
    fn as_twiml(&self) -> String {
        let mut attrs = Vec::new();
        if let Some(ref c) = self.caller_id {
            attrs.push(("callerId", c.as_str()));
        }

        format_xml_string("Dial", &attrs, &self.number)
    }
}
