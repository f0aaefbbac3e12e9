//! Then steps for project board BDD scenarios.

use super::world::{BoardWorld, parse_status};
use rstest_bdd_macros::then;
use taskboard::project::{
    services::{ProjectFormError, TransitionOutcome},
    transfer::DropOutcome,
};

#[then("the project count is {count:usize}")]
fn project_count_is(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.store().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} projects, found {actual}"));
    }
    Ok(())
}

#[then(r#"the "{status}" column lists "{title}""#)]
fn column_lists(world: &BoardWorld, status: String, title: String) -> Result<(), eyre::Report> {
    let column = world.board.column(parse_status(&status)?);
    let titles: Vec<String> = column
        .projects()
        .iter()
        .map(|project| project.title().to_owned())
        .collect();
    if titles != [title.clone()] {
        return Err(eyre::eyre!(
            "expected {status} column to list only {title:?}, found {titles:?}"
        ));
    }
    Ok(())
}

#[then(r#"the "{status}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let column = world.board.column(parse_status(&status)?);
    if !column.is_empty() {
        return Err(eyre::eyre!(
            "expected {status} column to be empty, found {} projects",
            column.len()
        ));
    }
    Ok(())
}

#[then(r#"the project headcount reads "{label}""#)]
fn headcount_reads(world: &BoardWorld, label: String) -> Result<(), eyre::Report> {
    let id = world
        .last_project
        .ok_or_else(|| eyre::eyre!("missing submitted project"))?;
    let status = world
        .board
        .store()
        .find(id)
        .map(|project| project.status())
        .ok_or_else(|| eyre::eyre!("submitted project is not in the store"))?;
    let item = world
        .board
        .column(status)
        .item(id)
        .ok_or_else(|| eyre::eyre!("project card is not listed in its column"))?;

    if item.persons() != label {
        return Err(eyre::eyre!(
            "expected headcount {label:?}, found {:?}",
            item.persons()
        ));
    }
    Ok(())
}

#[then("the drop left the project unchanged")]
fn drop_left_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_drop
        .ok_or_else(|| eyre::eyre!("missing drop outcome"))?;
    if outcome != DropOutcome::Applied(TransitionOutcome::Unchanged) {
        return Err(eyre::eyre!("expected an unchanged drop, got {outcome:?}"));
    }
    Ok(())
}

#[then("the submission is rejected")]
fn submission_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;
    if !matches!(result, Err(ProjectFormError::InvalidInput { .. })) {
        return Err(eyre::eyre!("expected InvalidInput error, got {result:?}"));
    }
    Ok(())
}
