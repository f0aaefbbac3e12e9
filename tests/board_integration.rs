//! Integration tests for the composed project board.
//!
//! Exercises the public API end to end: form submission through the store
//! into both columns, and the drag protocol back into the store.

use std::{cell::RefCell, rc::Rc};

use eyre::{OptionExt, ensure};
use rstest::{fixture, rstest};
use taskboard::{
    board::ProjectBoard,
    project::{
        domain::{Project, ProjectId, ProjectStatus},
        services::{ProjectFormError, ProjectStore, TransitionOutcome},
        transfer::{DataTransfer, DropOutcome, DropRejection, PLAIN_TEXT},
        validation::ProjectFormRules,
    },
};

#[fixture]
fn board() -> ProjectBoard {
    ProjectBoard::new()
}

#[rstest]
fn build_api_lifecycle(mut board: ProjectBoard) -> eyre::Result<()> {
    let id = board.submit("Build API", "Design and ship v1", "3")?;

    ensure!(board.store().len() == 1);
    ensure!(board.column(ProjectStatus::Active).project_ids() == vec![id]);
    ensure!(board.column(ProjectStatus::Finished).is_empty());

    let outcome = board.drag_project(id, ProjectStatus::Finished);

    ensure!(outcome.is_moved());
    ensure!(board.column(ProjectStatus::Active).is_empty());
    let item = board
        .column(ProjectStatus::Finished)
        .item(id)
        .ok_or_eyre("finished column should list the project")?;
    ensure!(item.persons() == "3 persons");
    Ok(())
}

#[rstest]
fn invalid_submission_leaves_board_empty(mut board: ProjectBoard) {
    let result = board.submit("Hi", "ok", "3");

    assert!(matches!(result, Err(ProjectFormError::InvalidInput { .. })));
    assert!(board.store().is_empty());
    assert!(board.column(ProjectStatus::Active).is_empty());
    assert_eq!(board.form().title(), "Hi");
}

#[rstest]
fn successful_submission_clears_the_form(mut board: ProjectBoard) -> eyre::Result<()> {
    board.form_mut().set_title("Write docs");
    board.form_mut().set_description("Cover the public API");
    board.form_mut().set_people("2");

    board.submit_form()?;

    ensure!(board.form().title().is_empty());
    ensure!(board.form().people().is_empty());
    Ok(())
}

#[rstest]
fn project_can_move_back_and_forth(mut board: ProjectBoard) -> eyre::Result<()> {
    let id = board.submit("Build API", "Design and ship v1", "3")?;

    ensure!(board.drag_project(id, ProjectStatus::Finished).is_moved());
    ensure!(board.drag_project(id, ProjectStatus::Active).is_moved());
    ensure!(board.store().find(id).map(Project::status) == Some(ProjectStatus::Active));
    Ok(())
}

#[rstest]
fn dragging_an_unlisted_project_is_rejected(mut board: ProjectBoard) {
    let outcome = board.drag_project(ProjectId::new(), ProjectStatus::Finished);

    assert_eq!(outcome, DropOutcome::Rejected(DropRejection::EmptyPayload));
    assert!(!board.column(ProjectStatus::Finished).is_droppable());
}

#[rstest]
fn foreign_payload_is_rejected_while_hovering(mut board: ProjectBoard) -> eyre::Result<()> {
    let id = board.submit("Build API", "Design and ship v1", "3")?;
    let mut transfer = DataTransfer::new();
    transfer.set_data("text/html", "<li>card</li>");
    transfer.set_data(PLAIN_TEXT, id.to_string());

    let outcome = board.drop_onto(&transfer, ProjectStatus::Finished);

    ensure!(outcome == DropOutcome::Rejected(DropRejection::WrongContentType));
    ensure!(!board.column(ProjectStatus::Finished).is_droppable());
    ensure!(board.store().find(id).map(Project::status) == Some(ProjectStatus::Active));
    Ok(())
}

#[rstest]
fn hand_written_payload_moves_known_project(mut board: ProjectBoard) -> eyre::Result<()> {
    let id = board.submit("Build API", "Design and ship v1", "3")?;
    let mut transfer = DataTransfer::new();
    transfer.set_data(PLAIN_TEXT, id.to_string());

    let outcome = board.drop_onto(&transfer, ProjectStatus::Finished);

    ensure!(
        outcome
            == DropOutcome::Applied(TransitionOutcome::Moved {
                from: ProjectStatus::Active,
                to: ProjectStatus::Finished,
            })
    );
    Ok(())
}

#[rstest]
fn extra_listeners_on_a_supplied_store_see_board_changes() -> eyre::Result<()> {
    let mut store = ProjectStore::new();
    let seen = Rc::new(RefCell::new(0_usize));
    let sink = Rc::clone(&seen);
    store.add_listener(move |projects: Vec<Project>| *sink.borrow_mut() = projects.len());
    let mut board = ProjectBoard::with_parts(store, ProjectFormRules::default());

    board.submit("Build API", "Design and ship v1", "3")?;
    board.submit("Write docs", "Cover the public API", "1")?;

    ensure!(*seen.borrow() == 2);
    ensure!(board.store().listener_count() == 3);
    Ok(())
}

#[rstest]
fn render_places_form_before_columns(mut board: ProjectBoard) -> eyre::Result<()> {
    let id = board.submit("Build API", "Design and ship v1", "1")?;
    board.drag_project(id, ProjectStatus::Finished);

    let rendered = board.render()?;

    let expected = "ADD PROJECT\nTitle: \nDescription: \nPeople: \n\n\
                    ACTIVE PROJECTS\n\n\
                    FINISHED PROJECTS\n\nBuild API\n1 person assigned!\nDesign and ship v1";
    ensure!(rendered == expected, "unexpected render: {rendered:?}");
    Ok(())
}
