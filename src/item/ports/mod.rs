//! Port contracts for item storage.
//!
//! Ports define infrastructure-agnostic interfaces used by item services.

pub mod repository;

pub use repository::{ItemRepository, ItemRepositoryError, ItemRepositoryResult};

#[cfg(test)]
pub use repository::MockItemRepository;
