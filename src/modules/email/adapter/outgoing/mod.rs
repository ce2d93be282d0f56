pub mod mock_relay;
pub mod resend_relay;
pub mod smtp_relay;

pub use mock_relay::MockEmailRelay;
pub use resend_relay::ResendRelay;
pub use smtp_relay::SmtpRelay;
