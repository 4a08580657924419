//! Shared world state for item submission BDD scenarios.

use std::sync::Arc;

use item_service::item::{
    adapters::memory::InMemoryItemRepository,
    domain::Item,
    services::{ItemService, ItemServiceError},
    validation::ValidationStrategy,
};
use item_service::validation::{
    MessageCodesResolver, PropertiesCatalog, RawFields, ValidationResult,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestItemService = ItemService<InMemoryItemRepository, DefaultClock>;

/// Outcome of saving or editing one submission.
pub type SubmissionOutcome = Result<Item, ValidationResult>;

/// Scenario world for item submission behaviour tests.
pub struct ItemSubmissionWorld {
    pub service: TestItemService,
    pub catalog: PropertiesCatalog,
    pub codes: MessageCodesResolver,
    pub strategy: Option<ValidationStrategy>,
    pub raw: RawFields,
    pub outcome: Option<SubmissionOutcome>,
}

impl ItemSubmissionWorld {
    /// Creates a world with an empty store and the bundled messages.
    #[must_use]
    pub fn new() -> Self {
        let service = ItemService::new(
            Arc::new(InMemoryItemRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            catalog: PropertiesCatalog::bundled(),
            codes: MessageCodesResolver::new(),
            strategy: None,
            raw: RawFields::new(),
            outcome: None,
        }
    }

    /// Returns the pending strategy or a scenario error.
    pub fn strategy(&self) -> Result<ValidationStrategy, eyre::Report> {
        self.strategy
            .ok_or_else(|| eyre::eyre!("missing submission strategy in scenario world"))
    }

    /// Returns the rejected result or a scenario error.
    pub fn rejection(&self) -> Result<&ValidationResult, eyre::Report> {
        match self.outcome.as_ref() {
            Some(Err(result)) => Ok(result),
            Some(Ok(item)) => Err(eyre::eyre!("expected a rejection, item {} was stored", item.id())),
            None => Err(eyre::eyre!("missing submission outcome in scenario world")),
        }
    }
}

impl Default for ItemSubmissionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ItemSubmissionWorld {
    ItemSubmissionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Converts a service failure into a scenario error.
pub fn service_failure(err: ItemServiceError) -> eyre::Report {
    eyre::eyre!("item service failed: {err}")
}
