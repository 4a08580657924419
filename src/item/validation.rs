//! Item validation rules and the per-version submission strategies.
//!
//! Three strategies share the same binder and result type but differ in how
//! rules are declared:
//!
//! - [`ValidationStrategy::Imperative`] runs [`ItemValidator`] over the bound
//!   item.
//! - [`ValidationStrategy::Grouped`] applies [`ITEM_RULES`] with the group for
//!   the use case.
//! - [`ValidationStrategy::FormObjects`] binds a dedicated form per use case
//!   and applies its own table.
//!
//! Every strategy finishes with [`check_total_price`].

use crate::item::domain::{ItemDetails, ItemDomainError};
use crate::item::forms::{
    ID, ITEM_NAME, ITEM_OBJECT, ItemForm, ItemSaveForm, ItemUpdateForm, PRICE, QUANTITY,
    SAVE_FORM_OBJECT,
};
use crate::validation::{
    BindForm, Check, Constraint, FieldRule, Group, MessageCodesResolver, RawFields, RuleTable,
    Scalar, ValidationResult, bind,
};

/// Lowest accepted unit price.
pub const PRICE_MIN: i32 = 1000;
/// Highest accepted unit price.
pub const PRICE_MAX: i32 = 1_000_000;
/// Quantity bound. Declarative rules accept it; the imperative validator
/// rejects it.
pub const QUANTITY_MAX: i32 = 9999;
/// Lowest accepted `price * quantity`.
pub const TOTAL_PRICE_MIN: i64 = 10_000;

/// Global error code for an insufficient total price.
pub const TOTAL_PRICE_MIN_CODE: &str = "totalPriceMin";

const PRICE_RANGE: Constraint = Constraint::Range {
    min: 1000,
    max: 1_000_000,
};
const QUANTITY_BOUND: Constraint = Constraint::Max(9999);
const SAVE_AND_UPDATE: &[Group] = &[Group::Save, Group::Update];

/// Rules for the item bound directly, selected by validation group.
pub static ITEM_RULES: RuleTable = RuleTable::new(&[
    FieldRule {
        field: ID,
        checks: &[Check::in_groups(Constraint::NotNull, &[Group::Update])],
    },
    FieldRule {
        field: ITEM_NAME,
        checks: &[Check::in_groups(Constraint::NotBlank, SAVE_AND_UPDATE)],
    },
    FieldRule {
        field: PRICE,
        checks: &[
            Check::in_groups(Constraint::NotNull, SAVE_AND_UPDATE),
            Check::always(PRICE_RANGE),
        ],
    },
    FieldRule {
        field: QUANTITY,
        checks: &[
            Check::in_groups(Constraint::NotNull, SAVE_AND_UPDATE),
            Check::in_groups(QUANTITY_BOUND, &[Group::Save]),
        ],
    },
]);

/// Rules for [`ItemSaveForm`].
pub static SAVE_FORM_RULES: RuleTable = RuleTable::new(&[
    FieldRule {
        field: ITEM_NAME,
        checks: &[Check::always(Constraint::NotBlank)],
    },
    FieldRule {
        field: PRICE,
        checks: &[Check::always(Constraint::NotNull), Check::always(PRICE_RANGE)],
    },
    FieldRule {
        field: QUANTITY,
        checks: &[
            Check::always(Constraint::NotNull),
            Check::always(QUANTITY_BOUND),
        ],
    },
]);

/// Rules for [`ItemUpdateForm`]. Quantity is unbounded on edit.
pub static UPDATE_FORM_RULES: RuleTable = RuleTable::new(&[
    FieldRule {
        field: ID,
        checks: &[Check::always(Constraint::NotNull)],
    },
    FieldRule {
        field: ITEM_NAME,
        checks: &[Check::always(Constraint::NotBlank)],
    },
    FieldRule {
        field: PRICE,
        checks: &[Check::always(Constraint::NotNull), Check::always(PRICE_RANGE)],
    },
    FieldRule {
        field: QUANTITY,
        checks: &[Check::always(Constraint::NotNull)],
    },
]);

/// Records `totalPriceMin` when `price * quantity` falls below
/// [`TOTAL_PRICE_MIN`].
///
/// Nothing is checked unless both values are present.
///
/// # Examples
///
/// ```
/// use item_service::item::forms::ItemForm;
/// use item_service::item::validation::check_total_price;
/// use item_service::validation::{BindForm, ValidationResult};
///
/// let mut result = ValidationResult::new("item", ItemForm::FIELDS);
/// check_total_price(Some(100), Some(5), &mut result);
///
/// let error = result.global_errors().first().expect("global error");
/// assert_eq!(error.code(), "totalPriceMin");
/// assert_eq!(
///     error.arguments().iter().map(ToString::to_string).collect::<Vec<_>>(),
///     ["10000", "500"],
/// );
/// ```
pub fn check_total_price(
    price: Option<i32>,
    quantity: Option<i32>,
    result: &mut ValidationResult,
) {
    let (Some(unit), Some(count)) = (price, quantity) else {
        return;
    };
    let total = i64::from(unit) * i64::from(count);
    if total < TOTAL_PRICE_MIN {
        result.reject(
            TOTAL_PRICE_MIN_CODE,
            vec![Scalar::Integer(TOTAL_PRICE_MIN), Scalar::Integer(total)],
        );
    }
}

/// Hand-written field checks for a bound [`ItemForm`].
///
/// Uses the lower-case codes `required`, `range`, and `max`, each carrying a
/// default message for catalogues that lack the code. Quantity must stay
/// strictly below [`QUANTITY_MAX`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemValidator;

impl ItemValidator {
    /// Appends a field error for each invalid field of `form`.
    pub fn validate(self, form: &ItemForm, result: &mut ValidationResult) {
        if !result.has_binding_failure(ITEM_NAME)
            && form
                .item_name
                .as_deref()
                .is_none_or(|name| name.trim().is_empty())
        {
            let error = result
                .field_error(
                    ITEM_NAME,
                    "required",
                    form.item_name.clone().map(Scalar::from),
                    Vec::new(),
                    false,
                )
                .with_default_message("Item name is required.");
            result.add_field_error(error);
        }

        if !result.has_binding_failure(PRICE)
            && form
                .price
                .is_none_or(|price| !(PRICE_MIN..=PRICE_MAX).contains(&price))
        {
            let error = result
                .field_error(
                    PRICE,
                    "range",
                    form.price.map(Scalar::from),
                    vec![Scalar::from(PRICE_MIN), Scalar::from(PRICE_MAX)],
                    false,
                )
                .with_default_message("Price must be between 1,000 and 1,000,000.");
            result.add_field_error(error);
        }

        if !result.has_binding_failure(QUANTITY)
            && form.quantity.is_none_or(|quantity| quantity >= QUANTITY_MAX)
        {
            let error = result
                .field_error(
                    QUANTITY,
                    "max",
                    form.quantity.map(Scalar::from),
                    vec![Scalar::from(QUANTITY_MAX)],
                    false,
                )
                .with_default_message("Quantity may be at most 9,999.");
            result.add_field_error(error);
        }
    }
}

/// How a family of routes declares and applies its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStrategy {
    /// Hand-written checks over the bound item.
    Imperative,
    /// One grouped rule table over the bound item.
    Grouped,
    /// A dedicated form and rule table per use case.
    FormObjects,
}

impl ValidationStrategy {
    /// Every strategy, in route order.
    pub const ALL: [Self; 3] = [Self::Imperative, Self::Grouped, Self::FormObjects];

    /// Returns the route segment naming the strategy.
    #[must_use]
    pub const fn version(self) -> &'static str {
        match self {
            Self::Imperative => "v2",
            Self::Grouped => "v3",
            Self::FormObjects => "v4",
        }
    }

    /// Looks up the strategy serving route segment `version`.
    #[must_use]
    pub fn from_version(version: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.version() == version)
    }

    /// Binds and validates a submission registering a new item.
    #[must_use]
    pub fn check_save(self, raw: &RawFields, codes: &MessageCodesResolver) -> Submission {
        match self {
            Self::Imperative => {
                let (form, mut result) = bind::<ItemForm>(codes, ITEM_OBJECT, raw);
                ItemValidator.validate(&form, &mut result);
                Submission::checked(form, result)
            }
            Self::Grouped => {
                let (form, mut result) = bind::<ItemForm>(codes, ITEM_OBJECT, raw);
                ITEM_RULES.apply(&form, Some(Group::Save), &mut result);
                Submission::checked(form, result)
            }
            Self::FormObjects => {
                let (form, mut result) = bind::<ItemSaveForm>(codes, ITEM_OBJECT, raw);
                SAVE_FORM_RULES.apply(&form, None, &mut result);
                Submission::checked(form.into(), result)
            }
        }
    }

    /// Binds and validates a submission editing an existing item.
    #[must_use]
    pub fn check_update(self, raw: &RawFields, codes: &MessageCodesResolver) -> Submission {
        match self {
            Self::Imperative => {
                let (form, mut result) = bind::<ItemForm>(codes, ITEM_OBJECT, raw);
                ItemValidator.validate(&form, &mut result);
                Submission::checked(form, result)
            }
            Self::Grouped => {
                let (form, mut result) = bind::<ItemForm>(codes, ITEM_OBJECT, raw);
                ITEM_RULES.apply(&form, Some(Group::Update), &mut result);
                Submission::checked(form, result)
            }
            Self::FormObjects => {
                let (form, mut result) = bind::<ItemUpdateForm>(codes, ITEM_OBJECT, raw);
                UPDATE_FORM_RULES.apply(&form, None, &mut result);
                Submission::checked(form.into(), result)
            }
        }
    }
}

/// Validates a JSON save request under the `itemSaveForm` object name.
#[must_use]
pub fn check_save_form(form: &ItemSaveForm, codes: &MessageCodesResolver) -> ValidationResult {
    let mut result =
        ValidationResult::new(SAVE_FORM_OBJECT, ItemSaveForm::FIELDS).with_resolver(codes.clone());
    SAVE_FORM_RULES.apply(form, None, &mut result);
    check_total_price(form.price, form.quantity, &mut result);
    result
}

/// A bound and validated submission.
#[derive(Debug, Clone)]
pub struct Submission {
    form: ItemForm,
    result: ValidationResult,
}

impl Submission {
    fn checked(form: ItemForm, mut result: ValidationResult) -> Self {
        check_total_price(form.price, form.quantity, &mut result);
        Self { form, result }
    }

    /// Returns the bound values.
    #[must_use]
    pub const fn form(&self) -> &ItemForm {
        &self.form
    }

    /// Returns the recorded errors.
    #[must_use]
    pub const fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Converts the submission into item details, or the errors that
    /// prevent it.
    ///
    /// # Errors
    ///
    /// Returns the validation result when any error was recorded, or when a
    /// value the item needs was left unchecked and is absent.
    pub fn into_details(self) -> Result<ItemDetails, ValidationResult> {
        let Self { form, mut result } = self;
        if result.has_errors() {
            return Err(result);
        }
        form.to_details().map_err(|err| {
            let field = match err {
                ItemDomainError::MissingName => ITEM_NAME,
                ItemDomainError::MissingPrice => PRICE,
                ItemDomainError::MissingQuantity => QUANTITY,
            };
            result.reject_value(field, Constraint::NotNull.code(), None, Vec::new());
            result
        })
    }
}
