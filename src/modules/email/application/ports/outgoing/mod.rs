pub mod contact_notifier;
pub mod email_relay;

pub use contact_notifier::{ContactNotice, ContactNotificationError, ContactNotifier};
pub use email_relay::{EmailRelay, EmailRelayError, OutgoingEmail};
