//! Domain model for items.
//!
//! Items carry no invariants of their own; submitted values are validated at
//! the boundary before they reach the domain.

mod error;
mod ids;
mod item;

pub use error::ItemDomainError;
pub use ids::ItemId;
pub use item::{Item, ItemDetails};
