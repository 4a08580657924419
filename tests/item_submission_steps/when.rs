//! When steps for item submission BDD scenarios.

use super::world::{ItemSubmissionWorld, run_async, service_failure};
use item_service::item::domain::ItemId;
use rstest_bdd_macros::when;

#[when("the submission is saved")]
fn save_submission(world: &mut ItemSubmissionWorld) -> Result<(), eyre::Report> {
    let submission = world.strategy()?.check_save(&world.raw, &world.codes);
    let outcome = match submission.into_details() {
        Ok(details) => Ok(run_async(world.service.register(details)).map_err(service_failure)?),
        Err(result) => Err(result),
    };
    world.outcome = Some(outcome);
    Ok(())
}

#[when("the submission is applied as an edit of item {id:i64}")]
fn edit_submission(world: &mut ItemSubmissionWorld, id: i64) -> Result<(), eyre::Report> {
    world.raw.insert("id".to_owned(), id.to_string());
    let submission = world.strategy()?.check_update(&world.raw, &world.codes);
    let outcome = match submission.into_details() {
        Ok(details) => Ok(run_async(world.service.update(ItemId::new(id), details))
            .map_err(service_failure)?),
        Err(result) => Err(result),
    };
    world.outcome = Some(outcome);
    Ok(())
}
