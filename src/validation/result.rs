//! Per-submission collection of field and global validation errors.

use serde::Serialize;
use std::fmt;

use super::{codes::MessageCodesResolver, value::Scalar};

/// Type descriptor of a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
}

impl FieldKind {
    /// Returns the short type name used in type-keyed message codes.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Text => "String",
            Self::Integer => "Integer",
            Self::Long => "Long",
        }
    }
}

/// Declares one field of a bindable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as submitted and as used in message codes.
    pub name: &'static str,
    /// Target type of the field.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declares a text field.
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    /// Declares a 32-bit integer field.
    #[must_use]
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
        }
    }

    /// Declares a 64-bit integer field.
    #[must_use]
    pub const fn long(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Long,
        }
    }
}

/// A validation failure attributable to one named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    object_name: String,
    field: String,
    rejected_value: Option<Scalar>,
    code: String,
    codes: Vec<String>,
    arguments: Vec<Scalar>,
    default_message: Option<String>,
    binding_failure: bool,
}

impl FieldError {
    /// Returns the name of the object the field belongs to.
    #[must_use]
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the value that was rejected, if any was submitted.
    #[must_use]
    pub const fn rejected_value(&self) -> Option<&Scalar> {
        self.rejected_value.as_ref()
    }

    /// Returns the bare error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the candidate message codes, most specific first.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Returns the positional message arguments.
    #[must_use]
    pub fn arguments(&self) -> &[Scalar] {
        &self.arguments
    }

    /// Returns the fallback message used when no code resolves.
    #[must_use]
    pub fn default_message(&self) -> Option<&str> {
        self.default_message.as_deref()
    }

    /// Returns `true` when the value could not be coerced to the field type.
    #[must_use]
    pub const fn is_binding_failure(&self) -> bool {
        self.binding_failure
    }

    /// Attaches a fallback message.
    #[must_use]
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(message.into());
        self
    }
}

/// A validation failure attributable to the object as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalError {
    object_name: String,
    code: String,
    codes: Vec<String>,
    arguments: Vec<Scalar>,
    default_message: Option<String>,
}

impl GlobalError {
    /// Returns the name of the rejected object.
    #[must_use]
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Returns the bare error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the candidate message codes, most specific first.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Returns the positional message arguments.
    #[must_use]
    pub fn arguments(&self) -> &[Scalar] {
        &self.arguments
    }

    /// Returns the fallback message used when no code resolves.
    #[must_use]
    pub fn default_message(&self) -> Option<&str> {
        self.default_message.as_deref()
    }
}

/// Errors recorded against one submitted object during one request.
///
/// Created fresh per submission, populated by binding and validation, then
/// consulted once to choose between the success and failure paths.
///
/// # Examples
///
/// ```
/// use item_service::validation::result::{FieldSpec, ValidationResult};
///
/// static FIELDS: [FieldSpec; 1] = [FieldSpec::text("itemName")];
///
/// let mut result = ValidationResult::new("item", &FIELDS);
/// assert!(!result.has_errors());
///
/// result.reject_value("itemName", "required", None, Vec::new());
/// let error = result.field_errors().first().expect("one error");
/// assert_eq!(
///     error.codes(),
///     ["required.item.itemName", "required.itemName", "required.String", "required"],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ValidationResult {
    object_name: String,
    fields: &'static [FieldSpec],
    resolver: MessageCodesResolver,
    field_errors: Vec<FieldError>,
    global_errors: Vec<GlobalError>,
}

impl ValidationResult {
    /// Creates an empty result for the named object and its declared fields.
    #[must_use]
    pub fn new(object_name: impl Into<String>, fields: &'static [FieldSpec]) -> Self {
        Self {
            object_name: object_name.into(),
            fields,
            resolver: MessageCodesResolver::new(),
            field_errors: Vec::new(),
            global_errors: Vec::new(),
        }
    }

    /// Replaces the resolver used to expand error codes.
    #[must_use]
    pub fn with_resolver(mut self, resolver: MessageCodesResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Returns the name of the object being validated.
    #[must_use]
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Returns the type name of a declared field, or `None` when the field is
    /// not part of the declared shape.
    #[must_use]
    pub fn field_type(&self, field: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|spec| spec.name == field)
            .map(|spec| spec.kind.type_name())
    }

    /// Records a semantic failure against `field`.
    pub fn reject_value(
        &mut self,
        field: &str,
        code: &str,
        rejected_value: Option<Scalar>,
        arguments: Vec<Scalar>,
    ) {
        let error = self.field_error(field, code, rejected_value, arguments, false);
        self.field_errors.push(error);
    }

    /// Records a failure to coerce `raw` into the type of `field`.
    pub fn reject_binding(&mut self, field: &str, code: &str, raw: impl Into<String>) {
        let error = self.field_error(field, code, Some(Scalar::Text(raw.into())), Vec::new(), true);
        self.field_errors.push(error);
    }

    /// Records an object-level failure.
    pub fn reject(&mut self, code: &str, arguments: Vec<Scalar>) {
        let codes = self.resolver.resolve_object(code, &self.object_name);
        self.global_errors.push(GlobalError {
            object_name: self.object_name.clone(),
            code: code.to_owned(),
            codes,
            arguments,
            default_message: None,
        });
    }

    /// Appends a prebuilt field error.
    pub fn add_field_error(&mut self, error: FieldError) {
        self.field_errors.push(error);
    }

    /// Builds a field error for this object without recording it.
    #[must_use]
    pub fn field_error(
        &self,
        field: &str,
        code: &str,
        rejected_value: Option<Scalar>,
        arguments: Vec<Scalar>,
        binding_failure: bool,
    ) -> FieldError {
        let codes =
            self.resolver
                .resolve_field(code, &self.object_name, field, self.field_type(field));
        FieldError {
            object_name: self.object_name.clone(),
            field: field.to_owned(),
            rejected_value,
            code: code.to_owned(),
            codes,
            arguments,
            default_message: None,
            binding_failure,
        }
    }

    /// Returns `true` when any field or global error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || !self.global_errors.is_empty()
    }

    /// Returns `true` when `field` already carries an error.
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_errors.iter().any(|error| error.field == field)
    }

    /// Returns `true` when `field` failed to bind.
    #[must_use]
    pub fn has_binding_failure(&self, field: &str) -> bool {
        self.field_errors
            .iter()
            .any(|error| error.field == field && error.binding_failure)
    }

    /// Returns the recorded field errors in insertion order.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Returns the errors recorded against `field`.
    pub fn field_errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.field_errors
            .iter()
            .filter(move |error| error.field == field)
    }

    /// Returns the recorded global errors in insertion order.
    #[must_use]
    pub fn global_errors(&self) -> &[GlobalError] {
        &self.global_errors
    }

    /// Returns the total number of recorded errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.field_errors.len() + self.global_errors.len()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s) on '{}'",
            self.error_count(),
            self.object_name
        )?;
        for error in &self.field_errors {
            write!(
                f,
                "; field '{}' [{}] rejected {}",
                error.field,
                error.codes.join(","),
                error
                    .rejected_value
                    .as_ref()
                    .map_or_else(|| "null".to_owned(), ToString::to_string),
            )?;
        }
        for error in &self.global_errors {
            write!(f, "; object [{}]", error.codes.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    static FIELDS: [FieldSpec; 3] = [
        FieldSpec::text("itemName"),
        FieldSpec::integer("price"),
        FieldSpec::integer("quantity"),
    ];

    #[fixture]
    fn result() -> ValidationResult {
        ValidationResult::new("item", &FIELDS)
    }

    #[rstest]
    fn fresh_result_has_no_errors(result: ValidationResult) {
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
    }

    #[rstest]
    fn reject_value_resolves_typed_codes(mut result: ValidationResult) {
        result.reject_value(
            "price",
            "range",
            Some(Scalar::Integer(10)),
            vec![Scalar::Integer(1000), Scalar::Integer(1_000_000)],
        );

        let error = result.field_errors().first().expect("field error recorded");
        assert_eq!(
            error.codes(),
            ["range.item.price", "range.price", "range.Integer", "range"]
        );
        assert_eq!(error.rejected_value(), Some(&Scalar::Integer(10)));
        assert!(!error.is_binding_failure());
        assert!(result.has_errors());
    }

    #[rstest]
    fn undeclared_field_drops_type_key(mut result: ValidationResult) {
        result.reject_value("colour", "required", None, Vec::new());

        let error = result.field_errors().first().expect("field error recorded");
        assert_eq!(
            error.codes(),
            ["required.item.colour", "required.colour", "required"]
        );
    }

    #[rstest]
    fn reject_binding_keeps_raw_value(mut result: ValidationResult) {
        result.reject_binding("quantity", "typeMismatch", "ten");

        let error = result.field_errors().first().expect("field error recorded");
        assert!(error.is_binding_failure());
        assert_eq!(error.rejected_value(), Some(&Scalar::Text("ten".to_owned())));
        assert!(result.has_binding_failure("quantity"));
        assert!(!result.has_binding_failure("price"));
    }

    #[rstest]
    fn reject_records_global_error(mut result: ValidationResult) {
        result.reject(
            "totalPriceMin",
            vec![Scalar::Integer(10_000), Scalar::Integer(500)],
        );

        let error = result.global_errors().first().expect("global error recorded");
        assert_eq!(error.codes(), ["totalPriceMin.item", "totalPriceMin"]);
        assert_eq!(
            error.arguments(),
            [Scalar::Integer(10_000), Scalar::Integer(500)]
        );
        assert!(result.has_errors());
        assert!(result.field_errors().is_empty());
    }

    #[rstest]
    fn display_summarises_errors(mut result: ValidationResult) {
        result.reject_value("itemName", "required", None, Vec::new());
        result.reject("totalPriceMin", Vec::new());

        let rendered = result.to_string();
        assert!(rendered.starts_with("2 error(s) on 'item'"));
        assert!(rendered.contains("field 'itemName'"));
        assert!(rendered.contains("totalPriceMin.item"));
    }
}
