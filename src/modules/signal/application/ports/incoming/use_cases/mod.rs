mod queue_selection;
mod subscribe_selection;
mod take_pending_selection;

pub use queue_selection::{QueueSelectionError, QueueSelectionUseCase};
pub use subscribe_selection::{SelectionSubscription, SubscribeSelectionUseCase};
pub use take_pending_selection::{TakePendingSelectionError, TakePendingSelectionUseCase};
