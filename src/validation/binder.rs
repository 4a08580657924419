//! Binding of raw submitted text fields onto typed form shapes.
//!
//! Each field is bound independently: a value that cannot be coerced to its
//! target type is recorded as a binding failure against that field only, and
//! the remaining fields still bind normally.

use std::collections::BTreeMap;
use std::str::FromStr;

use super::codes::MessageCodesResolver;
use super::result::{FieldSpec, ValidationResult};

/// Raw request fields keyed by submitted name.
pub type RawFields = BTreeMap<String, String>;

/// Error code recorded when a value cannot be coerced to its field type.
pub const TYPE_MISMATCH: &str = "typeMismatch";

/// A form shape that can be populated from [`RawFields`].
pub trait BindForm: Sized {
    /// Declared fields of the shape, used for type-keyed message codes.
    const FIELDS: &'static [FieldSpec];

    /// Reads every field of the shape from `binder`.
    fn bind_from(binder: &mut FormBinder<'_>) -> Self;
}

/// Binds `raw` onto `F`, returning the typed form together with a result
/// holding any binding failures.
///
/// Failures recorded here, and by later validation of the same result, expand
/// their codes with `codes`.
///
/// # Examples
///
/// ```
/// use item_service::validation::binder::{bind, BindForm, FormBinder, RawFields};
/// use item_service::validation::codes::MessageCodesResolver;
/// use item_service::validation::result::FieldSpec;
///
/// struct Quantity {
///     quantity: Option<i32>,
/// }
///
/// impl BindForm for Quantity {
///     const FIELDS: &'static [FieldSpec] = &[FieldSpec::integer("quantity")];
///
///     fn bind_from(binder: &mut FormBinder<'_>) -> Self {
///         Self { quantity: binder.integer("quantity") }
///     }
/// }
///
/// let raw = RawFields::from([("quantity".to_owned(), "ten".to_owned())]);
/// let (form, result) = bind::<Quantity>(&MessageCodesResolver::new(), "item", &raw);
/// assert_eq!(form.quantity, None);
/// assert!(result.has_binding_failure("quantity"));
/// ```
#[must_use]
pub fn bind<F: BindForm>(
    codes: &MessageCodesResolver,
    object_name: &str,
    raw: &RawFields,
) -> (F, ValidationResult) {
    let result = ValidationResult::new(object_name, F::FIELDS).with_resolver(codes.clone());
    let mut binder = FormBinder::new(raw, result);
    let form = F::bind_from(&mut binder);
    (form, binder.finish())
}

/// Field-by-field coercion of raw text, accumulating binding failures.
#[derive(Debug)]
pub struct FormBinder<'a> {
    raw: &'a RawFields,
    result: ValidationResult,
}

impl<'a> FormBinder<'a> {
    /// Creates a binder reading from `raw` and recording into `result`.
    #[must_use]
    pub const fn new(raw: &'a RawFields, result: ValidationResult) -> Self {
        Self { raw, result }
    }

    /// Reads a text field verbatim; absent fields bind to `None`.
    pub fn text(&mut self, field: &str) -> Option<String> {
        self.raw.get(field).cloned()
    }

    /// Reads a 32-bit integer field.
    pub fn integer(&mut self, field: &str) -> Option<i32> {
        self.number(field)
    }

    /// Reads a 64-bit integer field.
    pub fn long(&mut self, field: &str) -> Option<i64> {
        self.number(field)
    }

    /// Consumes the binder and returns the accumulated result.
    #[must_use]
    pub fn finish(self) -> ValidationResult {
        self.result
    }

    fn number<T: FromStr>(&mut self, field: &str) -> Option<T> {
        let raw = self.raw.get(field)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(value) = trimmed.parse::<T>() {
            Some(value)
        } else {
            self.result.reject_binding(field, TYPE_MISMATCH, raw.as_str());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::codes::CodeFormat;
    use crate::validation::value::Scalar;
    use rstest::rstest;

    #[derive(Debug)]
    struct Sample {
        name: Option<String>,
        price: Option<i32>,
        id: Option<i64>,
    }

    impl BindForm for Sample {
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::text("name"),
            FieldSpec::integer("price"),
            FieldSpec::long("id"),
        ];

        fn bind_from(binder: &mut FormBinder<'_>) -> Self {
            Self {
                name: binder.text("name"),
                price: binder.integer("price"),
                id: binder.long("id"),
            }
        }
    }

    fn raw(pairs: &[(&str, &str)]) -> RawFields {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[rstest]
    fn well_formed_fields_bind_without_failures() {
        let (form, result) = bind::<Sample>(
            &MessageCodesResolver::new(),
            "sample",
            &raw(&[("name", "itemA"), ("price", " 1000 "), ("id", "7")]),
        );

        assert_eq!(form.name.as_deref(), Some("itemA"));
        assert_eq!(form.price, Some(1000));
        assert_eq!(form.id, Some(7));
        assert!(!result.has_errors());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_numbers_bind_to_none(#[case] input: &str) {
        let (form, result) =
            bind::<Sample>(&MessageCodesResolver::new(), "sample", &raw(&[("price", input)]));

        assert_eq!(form.price, None);
        assert!(!result.has_errors());
    }

    #[rstest]
    #[case("abc")]
    #[case("12.5")]
    #[case("3000000000")]
    fn unparseable_numbers_record_type_mismatch(#[case] input: &str) {
        let (form, result) = bind::<Sample>(
            &MessageCodesResolver::new(),
            "sample",
            &raw(&[("name", "itemA"), ("price", input)]),
        );

        assert_eq!(form.price, None);
        assert_eq!(form.name.as_deref(), Some("itemA"));
        let error = result.field_errors().first().expect("binding failure");
        assert!(error.is_binding_failure());
        assert_eq!(error.code(), TYPE_MISMATCH);
        assert_eq!(error.rejected_value(), Some(&Scalar::from(input)));
        assert_eq!(
            error.codes(),
            [
                "typeMismatch.sample.price",
                "typeMismatch.price",
                "typeMismatch.Integer",
                "typeMismatch",
            ]
        );
    }

    #[rstest]
    fn absent_fields_bind_to_none() {
        let (form, result) =
            bind::<Sample>(&MessageCodesResolver::new(), "sample", &RawFields::new());

        assert!(form.name.is_none());
        assert!(form.price.is_none());
        assert!(form.id.is_none());
        assert!(!result.has_errors());
    }

    #[rstest]
    fn binding_failures_use_the_configured_resolver() {
        let codes = MessageCodesResolver::new()
            .with_prefix("validation.")
            .with_format(CodeFormat::PostfixErrorCode);

        let (_, result) = bind::<Sample>(&codes, "sample", &raw(&[("id", "x")]));

        let error = result.field_errors().first().expect("binding failure");
        assert_eq!(
            error.codes(),
            [
                "validation.sample.id.typeMismatch",
                "validation.id.typeMismatch",
                "validation.Long.typeMismatch",
                "validation.typeMismatch",
            ]
        );
    }
}
