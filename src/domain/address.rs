use crate::domain::{DisplayName, EmailAddress};

/// A mailbox, optionally carrying a human-readable display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    Plain(EmailAddress),
    Named {
        email: EmailAddress,
        name: DisplayName,
    },
}

impl Address {
    pub fn plain(email: &str) -> Result<Address, String> {
        let email = EmailAddress::parse(email.to_string())?;
        Ok(Address::Plain(email))
    }

    pub fn named(email: &str, name: &str) -> Result<Address, String> {
        let email = EmailAddress::parse(email.to_string())?;
        let name = DisplayName::parse(name.to_string())?;
        Ok(Address::Named { email, name })
    }

    pub fn email(&self) -> &EmailAddress {
        match self {
            Address::Plain(email) => email,
            Address::Named { email, .. } => email,
        }
    }

    pub fn name(&self) -> Option<&DisplayName> {
        match self {
            Address::Plain(_) => None,
            Address::Named { name, .. } => Some(name),
        }
    }

    /// Compares the mailbox only; display names are ignored.
    pub fn is_same_mailbox(&self, other: &Address) -> bool {
        self.email() == other.email()
    }
}

impl From<EmailAddress> for Address {
    fn from(email: EmailAddress) -> Self {
        Address::Plain(email)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Address::Plain(email) => write!(f, "{}", email),
            Address::Named { email, name } => write!(f, "{} <{}>", name, email),
        }
    }
}
