//! Given steps for project board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty project board")]
fn empty_board(world: &mut BoardWorld) {
    *world = BoardWorld::new();
}

#[given(r#"a submitted project "{title}" described as "{description}" for "{people}" people"#)]
fn submitted_project(
    world: &mut BoardWorld,
    title: String,
    description: String,
    people: String,
) -> Result<(), eyre::Report> {
    let id = world
        .board
        .submit(title, description, people)
        .wrap_err("submit project in scenario setup")?;
    world.last_project = Some(id);
    Ok(())
}
