mod slot_store;

pub use slot_store::{SlotStore, SlotStoreError};
