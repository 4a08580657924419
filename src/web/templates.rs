//! Compiled-in page templates and the view models they render.

use std::collections::BTreeMap;

use minijinja::{Environment, Value, context};
use serde::Serialize;

use crate::item::domain::{Item, ItemId};
use crate::item::forms::{ID, ITEM_NAME, PRICE, QUANTITY};
use crate::validation::{MessageCatalog, RawFields, ValidationResult};

const LIST_PAGE: &str = "items.html";
const DETAIL_PAGE: &str = "item.html";
const ADD_PAGE: &str = "add_form.html";
const EDIT_PAGE: &str = "edit_form.html";

const PAGES: [(&str, &str); 5] = [
    (LIST_PAGE, include_str!("../../templates/items.html")),
    (DETAIL_PAGE, include_str!("../../templates/item.html")),
    ("form_fields.html", include_str!("../../templates/form_fields.html")),
    (ADD_PAGE, include_str!("../../templates/add_form.html")),
    (EDIT_PAGE, include_str!("../../templates/edit_form.html")),
];

/// Values and messages shown by the add and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormView {
    values: BTreeMap<String, String>,
    field_messages: BTreeMap<String, Vec<String>>,
    global_messages: Vec<String>,
}

impl FormView {
    /// An empty form.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// A form pre-filled with a stored item.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        let values = [
            (ID, item.id().to_string()),
            (ITEM_NAME, item.name().to_owned()),
            (PRICE, item.price().to_string()),
            (QUANTITY, item.quantity().to_string()),
        ]
        .into_iter()
        .map(|(field, value)| (field.to_owned(), value))
        .collect();
        Self {
            values,
            ..Self::default()
        }
    }

    /// A rejected submission: the raw input redisplayed with resolved
    /// messages.
    #[must_use]
    pub fn rejected(
        raw: &RawFields,
        result: &ValidationResult,
        catalog: &dyn MessageCatalog,
    ) -> Self {
        let mut field_messages: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in result.field_errors() {
            field_messages
                .entry(error.field().to_owned())
                .or_default()
                .push(catalog.field_message(error));
        }
        let global_messages = result
            .global_errors()
            .iter()
            .map(|error| catalog.global_message(error))
            .collect();
        Self {
            values: raw.clone(),
            field_messages,
            global_messages,
        }
    }

    /// Returns the redisplayed value of `field`.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Returns the messages attached to `field`.
    #[must_use]
    pub fn field_messages(&self, field: &str) -> &[String] {
        self.field_messages
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the object-level messages.
    #[must_use]
    pub fn global_messages(&self) -> &[String] {
        &self.global_messages
    }
}

/// Renders the item pages.
#[derive(Debug)]
pub struct PageRenderer {
    environment: Environment<'static>,
}

impl PageRenderer {
    /// Compiles every page template.
    ///
    /// # Errors
    ///
    /// Returns the template syntax error, if any.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        for (name, source) in PAGES {
            environment.add_template(name, source)?;
        }
        Ok(Self { environment })
    }

    /// Renders the item list.
    ///
    /// # Errors
    ///
    /// Returns the rendering error, if any.
    pub fn items(&self, base: &str, items: &[Item]) -> Result<String, minijinja::Error> {
        self.render(LIST_PAGE, context! { base => trusted(base), items })
    }

    /// Renders one item, with the saved banner when `saved` is set.
    ///
    /// # Errors
    ///
    /// Returns the rendering error, if any.
    pub fn item(&self, base: &str, item: &Item, saved: bool) -> Result<String, minijinja::Error> {
        self.render(DETAIL_PAGE, context! { base => trusted(base), item, saved })
    }

    /// Renders the add form.
    ///
    /// # Errors
    ///
    /// Returns the rendering error, if any.
    pub fn add_form(&self, base: &str, view: &FormView) -> Result<String, minijinja::Error> {
        self.render(ADD_PAGE, context! { base => trusted(base), view })
    }

    /// Renders the edit form for item `id`.
    ///
    /// # Errors
    ///
    /// Returns the rendering error, if any.
    pub fn edit_form(
        &self,
        base: &str,
        id: ItemId,
        view: &FormView,
    ) -> Result<String, minijinja::Error> {
        self.render(EDIT_PAGE, context! { base => trusted(base), id, view })
    }

    fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error> {
        self.environment.get_template(name)?.render(ctx)
    }
}

/// Route prefixes are built by the server, never from user input.
fn trusted(base: &str) -> Value {
    Value::from_safe_string(base.to_owned())
}
