//! When steps for project board BDD scenarios.

use super::world::{BoardWorld, parse_status};
use rstest_bdd_macros::when;

#[when(
    r#"the form is submitted with title "{title}", description "{description}" and people "{people}""#
)]
fn submit_form(world: &mut BoardWorld, title: String, description: String, people: String) {
    let result = world.board.submit(title, description, people);
    if let Ok(id) = result {
        world.last_project = Some(id);
    }
    world.last_submission = Some(result);
}

#[when(r#"the project is dragged onto the "{status}" column"#)]
fn drag_project(world: &mut BoardWorld, status: String) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let id = world
        .last_project
        .ok_or_else(|| eyre::eyre!("missing submitted project in scenario world"))?;
    world.last_drop = Some(world.board.drag_project(id, target));
    Ok(())
}
