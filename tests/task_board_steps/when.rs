//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::board::domain::{Stage, TaskId};

#[when(r#"task "{id}" is dropped on "{stage}""#)]
fn task_dropped(world: &mut TaskBoardWorld, id: String, stage: String) -> Result<(), eyre::Report> {
    let target = Stage::try_from(stage.as_str())?;
    let (_, service) = world.connect();
    let result = run_async(service.drop_task(&TaskId::new(id), target));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"task "{id}" is deleted"#)]
fn task_deleted(world: &mut TaskBoardWorld, id: String) {
    let (_, service) = world.connect();
    let result = run_async(service.delete_task(&TaskId::new(id)));
    world.last_result = Some(result);
}

#[when(r#"a task with text "{text}" is added"#)]
fn task_added(world: &mut TaskBoardWorld, text: String) {
    let (_, service) = world.connect();
    let result = run_async(service.add_task(&text)).map(|_| ());
    world.last_result = Some(result);
}

#[when("a task with only whitespace is added")]
fn blank_task_added(world: &mut TaskBoardWorld) {
    let (_, service) = world.connect();
    let result = run_async(service.add_task("   ")).map(|_| ());
    world.last_result = Some(result);
}
