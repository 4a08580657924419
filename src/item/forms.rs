//! Submitted item shapes.
//!
//! [`ItemForm`] binds a submission straight onto the item's own fields.
//! [`ItemSaveForm`] and [`ItemUpdateForm`] are dedicated request shapes, each
//! carrying only what its use case accepts.

use serde::{Deserialize, Serialize};

use crate::item::domain::{ItemDetails, ItemDomainError};
use crate::validation::{BindForm, FieldSpec, FieldValues, FormBinder, Scalar};

/// Object name under which HTML submissions are bound.
pub const ITEM_OBJECT: &str = "item";
/// Object name under which JSON save requests are bound.
pub const SAVE_FORM_OBJECT: &str = "itemSaveForm";

/// Identifier field.
pub const ID: &str = "id";
/// Item name field.
pub const ITEM_NAME: &str = "itemName";
/// Unit price field.
pub const PRICE: &str = "price";
/// Quantity field.
pub const QUANTITY: &str = "quantity";

const ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec::long(ID),
    FieldSpec::text(ITEM_NAME),
    FieldSpec::integer(PRICE),
    FieldSpec::integer(QUANTITY),
];

const SAVE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(ITEM_NAME),
    FieldSpec::integer(PRICE),
    FieldSpec::integer(QUANTITY),
];

fn item_value(
    field: &str,
    id: Option<i64>,
    item_name: Option<&str>,
    price: Option<i32>,
    quantity: Option<i32>,
) -> Option<Scalar> {
    match field {
        ID => id.map(Scalar::from),
        ITEM_NAME => item_name.map(Scalar::from),
        PRICE => price.map(Scalar::from),
        QUANTITY => quantity.map(Scalar::from),
        _ => None,
    }
}

/// Every item field, each optional, as bound from a raw submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    /// Identifier, present on edits.
    pub id: Option<i64>,
    /// Item name.
    pub item_name: Option<String>,
    /// Unit price.
    pub price: Option<i32>,
    /// Quantity.
    pub quantity: Option<i32>,
}

impl ItemForm {
    /// Assembles item details from the bound values.
    ///
    /// # Errors
    ///
    /// Returns the [`ItemDomainError`] naming the first absent value.
    pub fn to_details(&self) -> Result<ItemDetails, ItemDomainError> {
        ItemDetails::try_from_parts(self.item_name.clone(), self.price, self.quantity)
    }
}

impl BindForm for ItemForm {
    const FIELDS: &'static [FieldSpec] = ITEM_FIELDS;

    fn bind_from(binder: &mut FormBinder<'_>) -> Self {
        Self {
            id: binder.long(ID),
            item_name: binder.text(ITEM_NAME),
            price: binder.integer(PRICE),
            quantity: binder.integer(QUANTITY),
        }
    }
}

impl FieldValues for ItemForm {
    fn value(&self, field: &str) -> Option<Scalar> {
        item_value(
            field,
            self.id,
            self.item_name.as_deref(),
            self.price,
            self.quantity,
        )
    }
}

/// Request shape for registering a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSaveForm {
    /// Item name.
    pub item_name: Option<String>,
    /// Unit price.
    pub price: Option<i32>,
    /// Quantity.
    pub quantity: Option<i32>,
}

impl BindForm for ItemSaveForm {
    const FIELDS: &'static [FieldSpec] = SAVE_FIELDS;

    fn bind_from(binder: &mut FormBinder<'_>) -> Self {
        Self {
            item_name: binder.text(ITEM_NAME),
            price: binder.integer(PRICE),
            quantity: binder.integer(QUANTITY),
        }
    }
}

impl FieldValues for ItemSaveForm {
    fn value(&self, field: &str) -> Option<Scalar> {
        item_value(
            field,
            None,
            self.item_name.as_deref(),
            self.price,
            self.quantity,
        )
    }
}

impl From<ItemSaveForm> for ItemForm {
    fn from(form: ItemSaveForm) -> Self {
        Self {
            id: None,
            item_name: form.item_name,
            price: form.price,
            quantity: form.quantity,
        }
    }
}

/// Request shape for editing an existing item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdateForm {
    /// Identifier of the edited item.
    pub id: Option<i64>,
    /// Item name.
    pub item_name: Option<String>,
    /// Unit price.
    pub price: Option<i32>,
    /// Quantity.
    pub quantity: Option<i32>,
}

impl BindForm for ItemUpdateForm {
    const FIELDS: &'static [FieldSpec] = ITEM_FIELDS;

    fn bind_from(binder: &mut FormBinder<'_>) -> Self {
        Self {
            id: binder.long(ID),
            item_name: binder.text(ITEM_NAME),
            price: binder.integer(PRICE),
            quantity: binder.integer(QUANTITY),
        }
    }
}

impl FieldValues for ItemUpdateForm {
    fn value(&self, field: &str) -> Option<Scalar> {
        item_value(
            field,
            self.id,
            self.item_name.as_deref(),
            self.price,
            self.quantity,
        )
    }
}

impl From<ItemUpdateForm> for ItemForm {
    fn from(form: ItemUpdateForm) -> Self {
        Self {
            id: form.id,
            item_name: form.item_name,
            price: form.price,
            quantity: form.quantity,
        }
    }
}
