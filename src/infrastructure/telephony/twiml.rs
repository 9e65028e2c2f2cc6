//! Minimal TwiML document builder

/// `<Record>` verb attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub max_length_secs: u32,
    pub transcribe: bool,
    pub transcribe_callback: String,
    pub action: String,
    pub timeout_secs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Verb {
    Say {
        text: String,
        voice: String,
        language: String,
    },
    Record(Record),
    Hangup,
}

/// A `<Response>` document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(mut self, text: &str, voice: &str, language: &str) -> Self {
        self.verbs.push(Verb::Say {
            text: text.to_string(),
            voice: voice.to_string(),
            language: language.to_string(),
        });
        self
    }

    pub fn record(mut self, record: Record) -> Self {
        self.verbs.push(Verb::Record(record));
        self
    }

    pub fn hangup(mut self) -> Self {
        self.verbs.push(Verb::Hangup);
        self
    }

    /// Render as an XML document
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><Response>"#);

        for verb in &self.verbs {
            let element = match verb {
                Verb::Say { text, voice, language } => format!(
                    r#"<Say voice="{}" language="{}">{}</Say>"#,
                    escape(voice),
                    escape(language),
                    escape(text)
                ),
                Verb::Record(r) => format!(
                    r#"<Record maxLength="{}" transcribe="{}" transcribeCallback="{}" action="{}" timeout="{}"/>"#,
                    r.max_length_secs,
                    r.transcribe,
                    escape(&r.transcribe_callback),
                    escape(&r.action),
                    r.timeout_secs
                ),
                Verb::Hangup => "<Hangup/>".to_string(),
            };
            xml.push_str(&element);
        }

        xml.push_str("</Response>");
        xml
    }
}

/// Escape text for use in XML content and attribute values
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
