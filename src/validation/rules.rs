//! Declarative per-field constraint tables.
//!
//! A rule table is a static list of fields, each with an ordered list of
//! constraints. Applying a table records at most one error per field: the
//! first constraint that fails.

use super::{result::ValidationResult, value::Scalar};

/// Validation group selecting a subset of a table's constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Constraints enforced when a new object is submitted.
    Save,
    /// Constraints enforced when an existing object is edited.
    Update,
}

/// A single-field predicate with its message code and arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Text must contain at least one non-whitespace character.
    NotBlank,
    /// A value must be present.
    NotNull,
    /// A present number must lie within `min..=max`.
    Range {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// A present number must not exceed the bound.
    Max(i64),
}

impl Constraint {
    /// Returns the message code recorded when the constraint fails.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotBlank => "NotBlank",
            Self::NotNull => "NotNull",
            Self::Range { .. } => "Range",
            Self::Max(_) => "Max",
        }
    }

    /// Returns the positional message arguments for a failure.
    #[must_use]
    pub fn arguments(self) -> Vec<Scalar> {
        match self {
            Self::NotBlank | Self::NotNull => Vec::new(),
            Self::Range { min, max } => vec![Scalar::Integer(min), Scalar::Integer(max)],
            Self::Max(max) => vec![Scalar::Integer(max)],
        }
    }

    /// Returns `true` when `value` satisfies the constraint.
    ///
    /// Numeric bounds accept an absent value; presence is the concern of
    /// [`Constraint::NotNull`].
    #[must_use]
    pub fn is_satisfied_by(self, value: Option<&Scalar>) -> bool {
        match (self, value) {
            (Self::NotBlank, Some(Scalar::Text(text))) => !text.trim().is_empty(),
            (Self::NotBlank | Self::NotNull, None) => false,
            (Self::Range { min, max }, Some(Scalar::Integer(number))) => {
                (min..=max).contains(number)
            }
            (Self::Max(max), Some(Scalar::Integer(number))) => *number <= max,
            _ => true,
        }
    }
}

/// A constraint restricted to a set of validation groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    /// The predicate to apply.
    pub constraint: Constraint,
    /// Groups the check belongs to; empty means every group.
    pub groups: &'static [Group],
}

impl Check {
    /// A check applied regardless of group.
    ///
    /// It stays active when a specific group is requested. Checks are never
    /// placed in an implicit default group that a named group would exclude.
    #[must_use]
    pub const fn always(constraint: Constraint) -> Self {
        Self {
            constraint,
            groups: &[],
        }
    }

    /// A check applied only when validating one of `groups`.
    #[must_use]
    pub const fn in_groups(constraint: Constraint, groups: &'static [Group]) -> Self {
        Self { constraint, groups }
    }

    /// Returns `true` when the check is active for `group`.
    ///
    /// Validating without a group activates every check.
    #[must_use]
    pub fn applies_to(&self, group: Option<Group>) -> bool {
        match group {
            None => true,
            Some(active) => self.groups.is_empty() || self.groups.contains(&active),
        }
    }
}

/// Ordered checks for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// The field the checks apply to.
    pub field: &'static str,
    /// Checks in evaluation order.
    pub checks: &'static [Check],
}

/// Read access to the current values of a validated shape.
pub trait FieldValues {
    /// Returns the bound value of `field`, or `None` when absent.
    fn value(&self, field: &str) -> Option<Scalar>;
}

/// A static rule table tied to one form shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    rules: &'static [FieldRule],
}

impl RuleTable {
    /// Wraps a static list of field rules.
    #[must_use]
    pub const fn new(rules: &'static [FieldRule]) -> Self {
        Self { rules }
    }

    /// Applies every active check to `target`, recording failures into
    /// `result`.
    ///
    /// Fields that already failed to bind are skipped so that a single field
    /// never carries both a binding and a semantic error.
    pub fn apply(
        &self,
        target: &impl FieldValues,
        group: Option<Group>,
        result: &mut ValidationResult,
    ) {
        for rule in self.rules {
            if result.has_binding_failure(rule.field) {
                continue;
            }
            let value = target.value(rule.field);
            let failed = rule
                .checks
                .iter()
                .filter(|check| check.applies_to(group))
                .map(|check| check.constraint)
                .find(|constraint| !constraint.is_satisfied_by(value.as_ref()));
            if let Some(constraint) = failed {
                result.reject_value(
                    rule.field,
                    constraint.code(),
                    value,
                    constraint.arguments(),
                );
            }
        }
    }
}
