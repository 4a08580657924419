//! Application services for item orchestration.

mod items;

pub use items::{ItemService, ItemServiceError, ItemServiceResult, sample_items};
