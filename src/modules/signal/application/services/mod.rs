pub mod selection_mailbox_service;

pub use selection_mailbox_service::SelectionMailboxService;
