//! Item registration with layered form validation.
//!
//! Items are entered through HTML forms or a JSON endpoint. Each submission
//! is bound field by field, validated, and either stored or returned with
//! errors whose messages resolve from a catalogue of prioritised codes.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: items and the validation model, free of HTTP concerns
//! - **Ports**: the item repository and message catalogue traits
//! - **Adapters**: the in-memory store and the actix-web handlers
//!
//! # Modules
//!
//! - [`validation`]: binding, rule tables, message codes, and the catalogue
//! - [`item`]: item domain, storage, forms, and validation strategies
//! - [`web`]: HTML pages and the JSON endpoint
//! - [`config`]: server settings
//! - [`telemetry`]: logging setup

pub mod config;
pub mod item;
pub mod telemetry;
pub mod validation;
pub mod web;
