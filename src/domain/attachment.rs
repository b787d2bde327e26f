/// How a mail client should present an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment,
}

impl Default for Disposition {
    fn default() -> Self {
        Disposition::Attachment
    }
}

impl Disposition {
    /// Reads the body of a `Content-Disposition` header, e.g.
    /// `inline; filename="logo.png"`. Parameters are ignored.
    pub fn parse(header_body: &str) -> Disposition {
        let token = header_body.split(';').next().unwrap_or("").trim();
        if token.eq_ignore_ascii_case("inline") {
            Disposition::Inline
        } else {
            Disposition::Attachment
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    content: Vec<u8>,
    content_type: String,
    filename: Option<String>,
    disposition: Disposition,
}

impl Attachment {
    pub fn new(content: impl Into<Vec<u8>>, content_type: &str) -> Self {
        Self {
            content: content.into(),
            content_type: content_type.to_string(),
            filename: None,
            disposition: Disposition::default(),
        }
    }

    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = Some(filename.to_string());
        self
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    pub fn inline(self) -> Self {
        self.with_disposition(Disposition::Inline)
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    pub fn is_inline(&self) -> bool {
        self.disposition == Disposition::Inline
    }
}
