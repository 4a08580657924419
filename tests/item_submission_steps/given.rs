//! Given steps for item submission BDD scenarios.

use super::world::{ItemSubmissionWorld, run_async};
use eyre::WrapErr;
use item_service::item::{services::sample_items, validation::ValidationStrategy};
use item_service::validation::RawFields;
use rstest_bdd_macros::given;

#[given("an empty item store")]
fn empty_item_store(world: &mut ItemSubmissionWorld) {
    world.outcome = None;
}

#[given("the sample items are installed")]
fn sample_items_installed(world: &mut ItemSubmissionWorld) -> Result<(), eyre::Report> {
    run_async(world.service.seed(sample_items())).wrap_err("seed sample items")?;
    Ok(())
}

#[given(r#"a "{version}" submission with name "{name}", price "{price}" and quantity "{quantity}""#)]
fn submission(
    world: &mut ItemSubmissionWorld,
    version: String,
    name: String,
    price: String,
    quantity: String,
) -> Result<(), eyre::Report> {
    let strategy = ValidationStrategy::from_version(&version)
        .ok_or_else(|| eyre::eyre!("unknown validation version {version}"))?;
    world.strategy = Some(strategy);
    world.raw = RawFields::from([
        ("itemName".to_owned(), name),
        ("price".to_owned(), price),
        ("quantity".to_owned(), quantity),
    ]);
    Ok(())
}
