//! In-memory adapters for item storage.

mod item;

pub use item::InMemoryItemRepository;
