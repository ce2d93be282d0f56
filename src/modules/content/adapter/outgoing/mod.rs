mod content_query_postgres;
pub mod sea_orm_entity;
mod snapshot_cache_slot_store;

pub use content_query_postgres::ContentQueryPostgres;
pub use snapshot_cache_slot_store::SlotStoreSnapshotCache;
