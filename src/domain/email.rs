use crate::domain::{Address, Attachment, Header};

/// An assembled outgoing message.
///
/// ```rust
/// use mandrill_mailer::domain::{Address, Email};
///
/// # fn main() -> Result<(), String> {
/// let email = Email::new()
///     .from(Address::named("noreply@example.com", "Example")?)
///     .to(Address::plain("user@example.com")?)
///     .subject("Welcome!")
///     .text("Welcome aboard.");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Email {
    subject: String,
    html: Option<String>,
    text: Option<String>,
    from: Vec<Address>,
    sender: Option<Address>,
    to: Vec<Address>,
    cc: Vec<Address>,
    bcc: Vec<Address>,
    headers: Vec<Header>,
    attachments: Vec<Attachment>,
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.html = Some(html.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn from(mut self, address: Address) -> Self {
        self.from.push(address);
        self
    }

    /// Mailbox responsible for the transmission, when it differs from `from`.
    pub fn sender(mut self, address: Address) -> Self {
        self.sender = Some(address);
        self
    }

    pub fn to(mut self, address: Address) -> Self {
        self.to.push(address);
        self
    }

    pub fn cc(mut self, address: Address) -> Self {
        self.cc.push(address);
        self
    }

    pub fn bcc(mut self, address: Address) -> Self {
        self.bcc.push(address);
        self
    }

    pub fn header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn get_subject(&self) -> &str {
        &self.subject
    }

    pub fn get_html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn get_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn get_from(&self) -> &[Address] {
        &self.from
    }

    pub fn get_sender(&self) -> Option<&Address> {
        self.sender.as_ref()
    }

    pub fn get_to(&self) -> &[Address] {
        &self.to
    }

    pub fn get_cc(&self) -> &[Address] {
        &self.cc
    }

    pub fn get_bcc(&self) -> &[Address] {
        &self.bcc
    }

    pub fn get_headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn get_attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}
