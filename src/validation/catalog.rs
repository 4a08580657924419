//! Message catalogue resolving candidate codes to display text.
//!
//! The catalogue is a key→template table in `.properties` syntax. Templates
//! carry positional placeholders (`{0}`, `{1}`, ...) that are substituted with
//! the error's message arguments.

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;
use std::sync::Arc;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use thiserror::Error;

use super::{
    result::{FieldError, GlobalError},
    value::Scalar,
};

/// Catalogue compiled into the binary.
pub const BUNDLED_MESSAGES: &str = include_str!("../../resources/errors.properties");

/// Text used when neither a code nor a default message resolves.
pub const FALLBACK_MESSAGE: &str = "Invalid value.";

/// Port for resolving validation messages.
///
/// Implementations try each candidate code in order and use the first one
/// they know; they never fail.
pub trait MessageCatalog: Send + Sync {
    /// Resolves the first known code in `codes`, substituting `arguments`.
    ///
    /// Falls back to `default_message`, then to a catalogue-wide default.
    fn lookup(&self, codes: &[String], arguments: &[Scalar], default_message: Option<&str>)
    -> String;

    /// Resolves the message for a field error.
    fn field_message(&self, error: &FieldError) -> String {
        self.lookup(error.codes(), error.arguments(), error.default_message())
    }

    /// Resolves the message for a global error.
    fn global_message(&self, error: &GlobalError) -> String {
        self.lookup(error.codes(), error.arguments(), error.default_message())
    }
}

/// Errors raised while loading a catalogue file.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The directory or file could not be read.
    #[error("failed to read message catalogue '{path}': {source}")]
    Read {
        /// Path that failed to load.
        path: String,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },
}

/// In-memory catalogue parsed from `.properties` text.
///
/// # Examples
///
/// ```
/// use item_service::validation::catalog::{MessageCatalog, PropertiesCatalog};
/// use item_service::validation::value::Scalar;
///
/// let catalog = PropertiesCatalog::parse("max={0} at most\nmax.item.quantity=Up to {0} units");
/// let codes = vec!["max.item.quantity".to_owned(), "max".to_owned()];
/// assert_eq!(
///     catalog.lookup(&codes, &[Scalar::Integer(9999)], None),
///     "Up to 9,999 units",
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesCatalog {
    entries: HashMap<String, String>,
}

impl PropertiesCatalog {
    /// Parses `.properties` text.
    ///
    /// Blank lines and lines starting with `#` or `!` are ignored. A key ends
    /// at the first unescaped `=`, `:` or whitespace. An odd run of trailing
    /// backslashes continues the line. Keys and values decode the `\t`,
    /// `\n`, `\r`, `\f` and `\uXXXX` escapes; any other escaped
    /// character stands for itself. Later keys replace earlier ones.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut entries = HashMap::new();
        let mut pending = String::new();
        for line in source.lines() {
            let trimmed = line.trim_start();
            if pending.is_empty() && (trimmed.is_empty() || is_comment(trimmed)) {
                continue;
            }
            if continues(trimmed) {
                pending.push_str(trimmed.strip_suffix('\\').unwrap_or(trimmed));
                continue;
            }
            pending.push_str(trimmed);
            insert_entry(&mut entries, &pending);
            pending.clear();
        }
        if !pending.is_empty() {
            insert_entry(&mut entries, &pending);
        }
        Self { entries }
    }

    /// Returns the catalogue compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_MESSAGES)
    }

    /// Reads `file_name` from the directory at `dir` and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] when the directory cannot be opened or
    /// the file cannot be read as UTF-8.
    pub fn load(dir: &Utf8Path, file_name: &str) -> Result<Self, CatalogError> {
        let read_error = |source: std::io::Error| CatalogError::Read {
            path: dir.join(file_name).into_string(),
            source: Arc::new(source),
        };
        let directory = Dir::open_ambient_dir(dir, ambient_authority()).map_err(read_error)?;
        let contents = directory.read_to_string(file_name).map_err(read_error)?;
        Ok(Self::parse(&contents))
    }

    /// Layers `overrides` on top of this catalogue.
    #[must_use]
    pub fn merged_with(mut self, overrides: Self) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    /// Returns the raw template stored under `key`.
    #[must_use]
    pub fn template(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the catalogue holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageCatalog for PropertiesCatalog {
    fn lookup(
        &self,
        codes: &[String],
        arguments: &[Scalar],
        default_message: Option<&str>,
    ) -> String {
        codes
            .iter()
            .find_map(|code| self.template(code))
            .or(default_message)
            .map_or_else(
                || FALLBACK_MESSAGE.to_owned(),
                |template| format_message(template, arguments),
            )
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with('!')
}

fn continues(line: &str) -> bool {
    line.chars()
        .rev()
        .take_while(|ch| *ch == '\\')
        .fold(false, |odd, _| !odd)
}

fn insert_entry(entries: &mut HashMap<String, String>, logical_line: &str) {
    let mut chars = logical_line.chars().peekable();
    let mut key = String::new();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => push_escaped(&mut key, &mut chars),
            '=' | ':' => break,
            _ if ch.is_whitespace() => {
                while chars.next_if(|next| next.is_whitespace()).is_some() {}
                chars.next_if(|next| matches!(next, '=' | ':'));
                break;
            }
            _ => key.push(ch),
        }
    }
    if key.is_empty() {
        return;
    }
    while chars.next_if(|next| next.is_whitespace()).is_some() {}
    let mut value = String::new();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            push_escaped(&mut value, &mut chars);
        } else {
            value.push(ch);
        }
    }
    entries.insert(key, value);
}

fn push_escaped(out: &mut String, chars: &mut Peekable<Chars<'_>>) {
    match chars.next() {
        Some('t') => out.push('\t'),
        Some('n') => out.push('\n'),
        Some('r') => out.push('\r'),
        Some('f') => out.push('\u{c}'),
        Some('u') => {
            let digits: String = chars.by_ref().take(4).collect();
            let decoded = u32::from_str_radix(&digits, 16)
                .ok()
                .and_then(char::from_u32)
                .map_or_else(|| format!("\\u{digits}"), String::from);
            out.push_str(&decoded);
        }
        Some(other) => out.push(other),
        None => {}
    }
}

/// Substitutes positional `{n}` placeholders with `arguments`.
///
/// Integers are rendered with thousands separators. Placeholders without a
/// matching argument are left untouched.
#[must_use]
pub fn format_message(template: &str, arguments: &[Scalar]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((before, after_open)) = rest.split_once('{') {
        output.push_str(before);
        let Some((inner, after_close)) = after_open.split_once('}') else {
            output.push('{');
            rest = after_open;
            continue;
        };
        let argument = inner
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| arguments.get(index));
        if let Some(value) = argument {
            output.push_str(&render_argument(value));
        } else {
            output.push('{');
            output.push_str(inner);
            output.push('}');
        }
        rest = after_close;
    }
    output.push_str(rest);
    output
}

fn render_argument(value: &Scalar) -> String {
    match value {
        Scalar::Integer(number) => group_thousands(*number),
        Scalar::Text(text) => text.clone(),
    }
}

fn group_thousands(number: i64) -> String {
    let mut reversed = Vec::new();
    let mut run = 0;
    for digit in number.unsigned_abs().to_string().chars().rev() {
        if run == 3 {
            reversed.push(',');
            run = 0;
        }
        reversed.push(digit);
        run += 1;
    }
    if number < 0 {
        reversed.push('-');
    }
    reversed.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> PropertiesCatalog {
        PropertiesCatalog::parse(
            "# comment\n\
             ! also a comment\n\
             \n\
             required.item.itemName=Item name is required.\n\
             required = This value is required.\n\
             range: Must be between {0} and {1}.\n\
             totalPriceMin=Total must be at least {0}, currently {1}.\n\
             long.message=first \\\n    second\n",
        )
    }

    fn codes(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|key| (*key).to_owned()).collect()
    }

    #[rstest]
    fn parse_skips_comments_and_blank_lines(catalog: PropertiesCatalog) {
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.template("required"), Some("This value is required."));
        assert_eq!(catalog.template("range"), Some("Must be between {0} and {1}."));
    }

    #[rstest]
    fn parse_joins_continuation_lines(catalog: PropertiesCatalog) {
        assert_eq!(catalog.template("long.message"), Some("first second"));
    }

    #[rstest]
    #[case("path\\=key=value", "path=key", "value")]
    #[case("a\\:b : c", "a:b", "c")]
    #[case("spaced\\ key = v", "spaced key", "v")]
    #[case("key value", "key", "value")]
    #[case("tab=a\\tb", "tab", "a\tb")]
    #[case("won=\\uC6D0", "won", "\u{c6d0}")]
    #[case("bad=\\uZZ", "bad", "\\uZZ")]
    #[case("escaped=x\\=y", "escaped", "x=y")]
    fn parse_decodes_escapes(#[case] source: &str, #[case] key: &str, #[case] value: &str) {
        let catalog = PropertiesCatalog::parse(source);

        assert_eq!(catalog.template(key), Some(value));
    }

    #[rstest]
    fn escaped_trailing_backslash_ends_the_line() {
        let catalog = PropertiesCatalog::parse("dir=C:\\\\\nnext=1");

        assert_eq!(catalog.template("dir"), Some("C:\\"));
        assert_eq!(catalog.template("next"), Some("1"));
    }

    #[rstest]
    fn lookup_prefers_most_specific_code(catalog: PropertiesCatalog) {
        let message = catalog.lookup(
            &codes(&["required.item.itemName", "required.itemName", "required"]),
            &[],
            None,
        );
        assert_eq!(message, "Item name is required.");
    }

    #[rstest]
    fn lookup_falls_back_to_generic_code(catalog: PropertiesCatalog) {
        let message = catalog.lookup(
            &codes(&["required.item.price", "required.price", "required"]),
            &[],
            None,
        );
        assert_eq!(message, "This value is required.");
    }

    #[rstest]
    fn lookup_substitutes_grouped_arguments(catalog: PropertiesCatalog) {
        let message = catalog.lookup(
            &codes(&["totalPriceMin.item", "totalPriceMin"]),
            &[Scalar::Integer(10_000), Scalar::Integer(500)],
            None,
        );
        assert_eq!(message, "Total must be at least 10,000, currently 500.");
    }

    #[rstest]
    fn lookup_uses_default_message_then_fallback(catalog: PropertiesCatalog) {
        let unknown = codes(&["nope"]);
        assert_eq!(
            catalog.lookup(&unknown, &[], Some("custom {0}")),
            "custom {0}"
        );
        assert_eq!(catalog.lookup(&unknown, &[], None), FALLBACK_MESSAGE);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(1_000_000, "1,000,000")]
    #[case(-12_345, "-12,345")]
    fn integers_are_grouped(#[case] number: i64, #[case] expected: &str) {
        assert_eq!(group_thousands(number), expected);
    }

    #[rstest]
    fn unmatched_braces_are_preserved() {
        assert_eq!(format_message("a {x} b {", &[]), "a {x} b {");
    }

    #[rstest]
    fn overrides_replace_bundled_entries() {
        let merged = PropertiesCatalog::bundled()
            .merged_with(PropertiesCatalog::parse("required=Fill this in."));
        assert_eq!(merged.template("required"), Some("Fill this in."));
        assert!(merged.template("totalPriceMin").is_some());
    }

    #[rstest]
    fn missing_directory_is_reported() {
        let result = PropertiesCatalog::load(
            Utf8Path::new("/nonexistent/item-service-messages"),
            "errors.properties",
        );
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
