//! Message code resolution for validation failures.
//!
//! A terse failure code such as `required` is expanded into an ordered list
//! of catalogue keys, most specific first, so that a message catalogue can
//! supply progressively more generic fallback text.

/// Separator placed between the parts of a resolved key.
pub const CODE_SEPARATOR: &str = ".";

/// Placement of the error code within each resolved key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeFormat {
    /// The error code leads each key, for example `required.item.itemName`.
    #[default]
    PrefixErrorCode,
    /// The error code trails each key, for example `item.itemName.required`.
    PostfixErrorCode,
}

impl CodeFormat {
    fn join(self, code: &str, parts: &[&str]) -> String {
        let mut segments: Vec<&str> = Vec::with_capacity(parts.len() + 1);
        match self {
            Self::PrefixErrorCode => {
                segments.push(code);
                segments.extend_from_slice(parts);
            }
            Self::PostfixErrorCode => {
                segments.extend_from_slice(parts);
                segments.push(code);
            }
        }
        segments.join(CODE_SEPARATOR)
    }
}

/// Expands error codes into prioritised message lookup keys.
///
/// The resolver holds only immutable configuration; identical inputs always
/// yield identical output, so callers may cache results freely.
///
/// # Examples
///
/// ```
/// use item_service::validation::codes::MessageCodesResolver;
///
/// let resolver = MessageCodesResolver::new();
/// assert_eq!(
///     resolver.resolve_field("required", "item", "itemName", Some("String")),
///     vec![
///         "required.item.itemName",
///         "required.itemName",
///         "required.String",
///         "required",
///     ],
/// );
/// assert_eq!(
///     resolver.resolve_object("required", "item"),
///     vec!["required.item", "required"],
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCodesResolver {
    prefix: String,
    format: CodeFormat,
}

impl MessageCodesResolver {
    /// Creates a resolver with no prefix and [`CodeFormat::PrefixErrorCode`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `prefix` verbatim to every resolved key.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Selects where the error code is placed within each key.
    #[must_use]
    pub const fn with_format(mut self, format: CodeFormat) -> Self {
        self.format = format;
        self
    }

    /// Resolves the keys for an object-level (global) error.
    ///
    /// Yields `{code}.{object_name}` followed by `{code}`.
    #[must_use]
    pub fn resolve_object(&self, code: &str, object_name: &str) -> Vec<String> {
        vec![
            self.key(code, &[object_name]),
            self.key(code, &[]),
        ]
    }

    /// Resolves the keys for a field-level error.
    ///
    /// Yields, in order, `{code}.{object_name}.{field}`, `{code}.{field}`,
    /// `{code}.{field_type}` and `{code}`. The type-keyed candidate is left
    /// out entirely when `field_type` is `None`.
    #[must_use]
    pub fn resolve_field(
        &self,
        code: &str,
        object_name: &str,
        field: &str,
        field_type: Option<&str>,
    ) -> Vec<String> {
        let mut codes = Vec::with_capacity(4);
        codes.push(self.key(code, &[object_name, field]));
        codes.push(self.key(code, &[field]));
        if let Some(type_name) = field_type {
            codes.push(self.key(code, &[type_name]));
        }
        codes.push(self.key(code, &[]));
        codes
    }

    fn key(&self, code: &str, parts: &[&str]) -> String {
        let body = self.format.join(code, parts);
        if self.prefix.is_empty() {
            body
        } else {
            format!("{}{body}", self.prefix)
        }
    }
}
