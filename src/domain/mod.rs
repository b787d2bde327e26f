mod address;
mod api_key;
mod attachment;
mod display_name;
mod email;
mod email_address;
mod envelope;
mod header;

pub use address::Address;
pub use api_key::ApiKey;
pub use attachment::{Attachment, Disposition};
pub use display_name::DisplayName;
pub use email::Email;
pub use email_address::EmailAddress;
pub use envelope::Envelope;
pub use header::Header;
