//! Then steps for item submission BDD scenarios.

use super::world::{ItemSubmissionWorld, run_async, service_failure};
use item_service::item::domain::ItemId;
use item_service::validation::MessageCatalog;
use rstest_bdd_macros::then;

#[then("the item is stored with id {id:i64}")]
fn item_stored_with_id(world: &ItemSubmissionWorld, id: i64) -> Result<(), eyre::Report> {
    let item = match world.outcome.as_ref() {
        Some(Ok(item)) => item,
        Some(Err(result)) => return Err(eyre::eyre!("submission was rejected: {result}")),
        None => return Err(eyre::eyre!("missing submission outcome")),
    };
    if item.id() != ItemId::new(id) {
        return Err(eyre::eyre!("expected id {id}, found {}", item.id()));
    }
    let stored = run_async(world.service.find(item.id())).map_err(service_failure)?;
    if &stored != item {
        return Err(eyre::eyre!("stored item differs from the returned one"));
    }
    Ok(())
}

#[then("no item is stored")]
fn no_item_stored(world: &ItemSubmissionWorld) -> Result<(), eyre::Report> {
    world.rejection()?;
    let items = run_async(world.service.list()).map_err(service_failure)?;
    if !items.is_empty() {
        return Err(eyre::eyre!("expected an empty store, found {} items", items.len()));
    }
    Ok(())
}

#[then(r#"the object error "{code}" has arguments "{arguments}""#)]
fn object_error_arguments(
    world: &ItemSubmissionWorld,
    code: String,
    arguments: String,
) -> Result<(), eyre::Report> {
    let result = world.rejection()?;
    let error = result
        .global_errors()
        .iter()
        .find(|error| error.code() == code)
        .ok_or_else(|| eyre::eyre!("no object error {code} in {result}"))?;
    let rendered = error
        .arguments()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if rendered != arguments {
        return Err(eyre::eyre!("expected arguments {arguments}, found {rendered}"));
    }
    Ok(())
}

#[then(r#"the message for "{code}" reads "{text}""#)]
fn object_message(
    world: &ItemSubmissionWorld,
    code: String,
    text: String,
) -> Result<(), eyre::Report> {
    let result = world.rejection()?;
    let error = result
        .global_errors()
        .iter()
        .find(|error| error.code() == code)
        .ok_or_else(|| eyre::eyre!("no object error {code} in {result}"))?;
    let message = world.catalog.global_message(error);
    if message != text {
        return Err(eyre::eyre!("expected message {text:?}, found {message:?}"));
    }
    Ok(())
}

#[then(r#"field "{field}" carries a single binding failure rejecting "{value}""#)]
fn single_binding_failure(
    world: &ItemSubmissionWorld,
    field: String,
    value: String,
) -> Result<(), eyre::Report> {
    let result = world.rejection()?;
    let errors: Vec<_> = result.field_errors_for(&field).collect();
    let [error] = errors.as_slice() else {
        return Err(eyre::eyre!("expected one error on {field}, found {}", errors.len()));
    };
    if !error.is_binding_failure() {
        return Err(eyre::eyre!("error on {field} is not a binding failure"));
    }
    let rejected = error.rejected_value().map(ToString::to_string);
    if rejected.as_deref() != Some(value.as_str()) {
        return Err(eyre::eyre!("expected rejected value {value}, found {rejected:?}"));
    }
    Ok(())
}

#[then(r#"the message for field "{field}" reads "{text}""#)]
fn field_message(
    world: &ItemSubmissionWorld,
    field: String,
    text: String,
) -> Result<(), eyre::Report> {
    let result = world.rejection()?;
    let error = result
        .field_errors_for(&field)
        .next()
        .ok_or_else(|| eyre::eyre!("no error on {field}"))?;
    let message = world.catalog.field_message(error);
    if message != text {
        return Err(eyre::eyre!("expected message {text:?}, found {message:?}"));
    }
    Ok(())
}

#[then(r#"field "{field}" is rejected with code "{code}""#)]
fn field_rejected_with_code(
    world: &ItemSubmissionWorld,
    field: String,
    code: String,
) -> Result<(), eyre::Report> {
    let result = world.rejection()?;
    if !result.field_errors_for(&field).any(|error| error.code() == code) {
        return Err(eyre::eyre!("no {code} error on {field} in {result}"));
    }
    Ok(())
}

#[then("item {id:i64} has quantity {quantity:i32}")]
fn item_has_quantity(
    world: &ItemSubmissionWorld,
    id: i64,
    quantity: i32,
) -> Result<(), eyre::Report> {
    let item = run_async(world.service.find(ItemId::new(id))).map_err(service_failure)?;
    if item.quantity() != quantity {
        return Err(eyre::eyre!("expected quantity {quantity}, found {}", item.quantity()));
    }
    Ok(())
}
