mod contact_notification_service;

pub use contact_notification_service::{ContactNotificationService, MailRouting};
