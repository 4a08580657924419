//! Item entity and its editable details.

use super::{ItemDomainError, ItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name, price, and quantity of an item as submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetails {
    #[serde(rename = "itemName")]
    name: String,
    price: i32,
    quantity: i32,
}

impl ItemDetails {
    /// Creates item details from concrete values.
    #[must_use]
    pub fn new(name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Assembles details from optional bound form values.
    ///
    /// # Errors
    ///
    /// Returns the [`ItemDomainError`] naming the first absent value.
    pub fn try_from_parts(
        name: Option<String>,
        price: Option<i32>,
        quantity: Option<i32>,
    ) -> Result<Self, ItemDomainError> {
        Ok(Self {
            name: name.ok_or(ItemDomainError::MissingName)?,
            price: price.ok_or(ItemDomainError::MissingPrice)?,
            quantity: quantity.ok_or(ItemDomainError::MissingQuantity)?,
        })
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> i32 {
        self.price
    }

    /// Returns the stocked quantity.
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Returns `price * quantity` without overflow.
    #[must_use]
    pub fn total_price(&self) -> i64 {
        i64::from(self.price) * i64::from(self.quantity)
    }
}

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    #[serde(flatten)]
    details: ItemDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates an item recorded at `recorded_at`.
    #[must_use]
    pub const fn new(id: ItemId, details: ItemDetails, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id,
            details,
            created_at: recorded_at,
            updated_at: recorded_at,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> i32 {
        self.details.price()
    }

    /// Returns the stocked quantity.
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.details.quantity()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the details and bumps the update timestamp.
    pub fn apply_update(&mut self, details: ItemDetails, updated_at: DateTime<Utc>) {
        self.details = details;
        self.updated_at = updated_at;
    }
}
