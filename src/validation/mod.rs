//! Form binding, validation rules, and message resolution.
//!
//! The module is independent of any particular form shape:
//!
//! - [`codes`]: expands an error code into prioritised message keys
//! - [`result`]: the per-submission collection of field and global errors
//! - [`binder`]: coerces raw text fields, recording binding failures
//! - [`rules`]: declarative per-field constraint tables with groups
//! - [`catalog`]: resolves message keys to display text

pub mod binder;
pub mod catalog;
pub mod codes;
pub mod result;
pub mod rules;
pub mod value;

pub use binder::{BindForm, FormBinder, RawFields, TYPE_MISMATCH, bind};
pub use catalog::{MessageCatalog, PropertiesCatalog};
pub use codes::{CodeFormat, MessageCodesResolver};
pub use result::{FieldError, FieldKind, FieldSpec, GlobalError, ValidationResult};
pub use rules::{Check, Constraint, FieldRule, FieldValues, Group, RuleTable};
pub use value::Scalar;
