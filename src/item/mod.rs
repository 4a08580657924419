//! Item registration, lookup, and editing.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Submitted form shapes and their validation in [`forms`] and
//!   [`validation`]

pub mod adapters;
pub mod domain;
pub mod forms;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
