use crate::domain::{Address, Email};

/// The mailbox pair actually used for delivery, as opposed to the
/// display headers carried by the message.
#[derive(Debug, Clone)]
pub struct Envelope {
    sender: Address,
    recipients: Vec<Address>,
}

impl Envelope {
    pub fn new(sender: Address, recipients: Vec<Address>) -> Result<Envelope, String> {
        if recipients.is_empty() {
            return Err("An envelope must have at least one recipient".to_string());
        }
        Ok(Self { sender, recipients })
    }

    /// Sender is `Sender` if set, else the first `From`; recipients are
    /// `To`, `Cc` and `Bcc` in that order.
    pub fn from_email(email: &Email) -> Result<Envelope, String> {
        let sender = email
            .get_sender()
            .or_else(|| email.get_from().first())
            .cloned()
            .ok_or_else(|| "Unable to determine the sender of the message".to_string())?;
        let recipients: Vec<Address> = email
            .get_to()
            .iter()
            .chain(email.get_cc())
            .chain(email.get_bcc())
            .cloned()
            .collect();
        Self::new(sender, recipients)
    }

    pub fn sender(&self) -> &Address {
        &self.sender
    }

    pub fn recipients(&self) -> &[Address] {
        &self.recipients
    }
}
