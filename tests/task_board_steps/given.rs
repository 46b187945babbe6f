//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::ports::TaskDocument;

#[given("an empty store")]
fn empty_store(world: &mut TaskBoardWorld) {
    world.seed.clear();
}

#[given(r#"the store holds task "{id}" with text "{text}" in "{stage}""#)]
fn store_holds_task(world: &mut TaskBoardWorld, id: String, text: String, stage: String) {
    world.seed.push((id, TaskDocument::new(text, stage)));
}

#[given("the board has started up")]
fn board_started(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let (_, service) = world.connect();
    run_async(service.startup()).wrap_err("start up board for scenario")?;
    Ok(())
}

#[given("the store is unavailable")]
fn store_unavailable(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let (store, _) = world.connect();
    store.set_available(false)?;
    Ok(())
}
