use super::{format_xml_string, Action};

#[derive(Debug, Default)]
pub struct Say {
    pub txt: String,
}

impl Action for Say {
    fn as_twiml(&self) -> String {
        format_xml_string("Say", &[], &self.txt)
    }
}
