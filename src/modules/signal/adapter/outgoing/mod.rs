pub mod slot_store_memory;
pub mod slot_store_redis;

pub use slot_store_memory::InMemorySlotStore;
pub use slot_store_redis::RedisSlotStore;
