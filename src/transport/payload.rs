//! Request body of Mandrill's `messages/send` call.

use crate::domain::{Address, Attachment, Email, Envelope};
use serde::Serialize;

/// Compared case-insensitively; these are carried by dedicated payload
/// fields or set by Mandrill itself.
const HEADERS_TO_BYPASS: [&str; 6] = ["from", "to", "cc", "bcc", "subject", "content-type"];

#[derive(Serialize)]
pub struct SendRequest<'a> {
    key: &'a str,
    message: Message<'a>,
}

#[derive(Serialize)]
struct Message<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    subject: &'a str,
    from_email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_name: Option<&'a str>,
    to: Vec<Recipient<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<AttachmentRecord<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<AttachmentRecord<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    headers: Vec<String>,
}

#[derive(Serialize)]
struct Recipient<'a> {
    email: &'a str,
    #[serde(rename = "type")]
    kind: RecipientType,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    To,
    Cc,
    Bcc,
}

impl RecipientType {
    /// Bcc is checked before cc, so a mailbox listed in both is sent as bcc.
    pub fn classify(recipient: &Address, email: &Email) -> RecipientType {
        let listed_in = |list: &[Address]| list.iter().any(|a| a.is_same_mailbox(recipient));
        if listed_in(email.get_bcc()) {
            RecipientType::Bcc
        } else if listed_in(email.get_cc()) {
            RecipientType::Cc
        } else {
            RecipientType::To
        }
    }
}

#[derive(Serialize)]
struct AttachmentRecord<'a> {
    content: String,
    #[serde(rename = "type")]
    content_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> From<&'a Attachment> for AttachmentRecord<'a> {
    fn from(attachment: &'a Attachment) -> Self {
        Self {
            content: base64::encode(attachment.content()),
            content_type: attachment.content_type(),
            name: attachment.filename(),
        }
    }
}

impl<'a> SendRequest<'a> {
    pub fn new(key: &'a str, email: &'a Email, envelope: &'a Envelope) -> Self {
        let sender = envelope.sender();
        let to = envelope
            .recipients()
            .iter()
            .map(|recipient| Recipient {
                email: recipient.email().as_ref(),
                kind: RecipientType::classify(recipient, email),
                name: recipient.name().map(|n| n.as_ref()),
            })
            .collect();

        let (inline, regular): (Vec<&Attachment>, Vec<&Attachment>) =
            email.get_attachments().iter().partition(|a| a.is_inline());

        let headers = email
            .get_headers()
            .iter()
            .filter(|header| !HEADERS_TO_BYPASS.iter().any(|name| header.is_named(name)))
            .map(|header| header.to_string())
            .collect();

        Self {
            key,
            message: Message {
                html: email.get_html(),
                text: email.get_text(),
                subject: email.get_subject(),
                from_email: sender.email().as_ref(),
                from_name: sender.name().map(|n| n.as_ref()),
                to,
                images: inline.into_iter().map(AttachmentRecord::from).collect(),
                attachments: regular.into_iter().map(AttachmentRecord::from).collect(),
                headers,
            },
        }
    }
}
