// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{TEST_YEAR, create_test_draw, create_test_juror};
use crate::{Persistence, PersistenceError};
use jurado::{DrawSelection, select_draw};
use jurado_domain::{AssignmentRole, DrawStatus};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn setup_draw_with_jurors(persistence: &mut Persistence, count: u32) -> (i64, Vec<i64>) {
    let draw_id = persistence.create_draw(&create_test_draw(2024)).unwrap();
    let juror_ids: Vec<i64> = (0..count)
        .map(|i| {
            let juror = create_test_juror(500 + i, &format!("Juror {i:02}"));
            persistence.register_juror(&juror, TEST_YEAR).unwrap()
        })
        .collect();
    (draw_id, juror_ids)
}

#[test]
fn test_create_and_get_draw() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let draw_id = persistence.create_draw(&create_test_draw(2024)).unwrap();
    let stored = persistence.get_draw(draw_id).unwrap();

    assert_eq!(stored.draw_id, Some(draw_id));
    assert_eq!(stored.reference_year, 2024);
    assert_eq!(stored.sitting_date, "2024-11-05");
    assert_eq!(stored.status, DrawStatus::Scheduled);
}

#[test]
fn test_update_draw_reschedules_sitting() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let draw_id = persistence.create_draw(&create_test_draw(2024)).unwrap();
    let mut draw = persistence.get_draw(draw_id).unwrap();
    draw.sitting_date = String::from("2024-11-19");
    draw.sitting_time = None;
    persistence.update_draw(&draw).unwrap();

    let stored = persistence.get_draw(draw_id).unwrap();
    assert_eq!(stored.sitting_date, "2024-11-19");
    assert_eq!(stored.sitting_time, None);
}

#[test]
fn test_list_draws_for_year() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence.create_draw(&create_test_draw(2024)).unwrap();
    persistence.create_draw(&create_test_draw(2024)).unwrap();
    persistence.create_draw(&create_test_draw(2025)).unwrap();

    assert_eq!(persistence.list_draws().unwrap().len(), 3);
    assert_eq!(persistence.list_draws_for_year(2024).unwrap().len(), 2);
    assert_eq!(persistence.list_draws_for_year(2025).unwrap().len(), 1);
    assert!(persistence.list_draws_for_year(2023).unwrap().is_empty());
}

#[test]
fn test_assign_and_list_assignments() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (draw_id, juror_ids) = setup_draw_with_jurors(&mut persistence, 2);

    persistence
        .assign_juror(draw_id, juror_ids[0], AssignmentRole::Titular)
        .unwrap();
    persistence
        .assign_juror(draw_id, juror_ids[1], AssignmentRole::Suplente)
        .unwrap();

    let assignments = persistence.list_assignments(draw_id).unwrap();
    assert_eq!(assignments.len(), 2);
    assert!(
        assignments
            .iter()
            .any(|a| a.juror_id == juror_ids[0] && a.role == AssignmentRole::Titular)
    );
    assert!(
        assignments
            .iter()
            .any(|a| a.juror_id == juror_ids[1] && a.role == AssignmentRole::Suplente)
    );
}

#[test]
fn test_duplicate_assignment_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (draw_id, juror_ids) = setup_draw_with_jurors(&mut persistence, 1);

    persistence
        .assign_juror(draw_id, juror_ids[0], AssignmentRole::Titular)
        .unwrap();
    let result = persistence.assign_juror(draw_id, juror_ids[0], AssignmentRole::Suplente);

    assert!(matches!(
        result,
        Err(PersistenceError::DuplicateAssignment { .. })
    ));
    assert_eq!(persistence.list_assignments(draw_id).unwrap().len(), 1);
}

#[test]
fn test_assign_missing_juror_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let draw_id = persistence.create_draw(&create_test_draw(2024)).unwrap();

    let result = persistence.assign_juror(draw_id, 9999, AssignmentRole::Titular);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_toggle_assignment_role() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (draw_id, juror_ids) = setup_draw_with_jurors(&mut persistence, 1);

    persistence
        .assign_juror(draw_id, juror_ids[0], AssignmentRole::Titular)
        .unwrap();

    let role = persistence
        .toggle_assignment_role(draw_id, juror_ids[0])
        .unwrap();
    assert_eq!(role, AssignmentRole::Suplente);

    let role = persistence
        .toggle_assignment_role(draw_id, juror_ids[0])
        .unwrap();
    assert_eq!(role, AssignmentRole::Titular);
}

#[test]
fn test_remove_assignment() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (draw_id, juror_ids) = setup_draw_with_jurors(&mut persistence, 2);

    persistence
        .assign_juror(draw_id, juror_ids[0], AssignmentRole::Titular)
        .unwrap();
    persistence
        .assign_juror(draw_id, juror_ids[1], AssignmentRole::Suplente)
        .unwrap();

    persistence.remove_assignment(draw_id, juror_ids[0]).unwrap();

    let assignments = persistence.list_assignments(draw_id).unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].juror_id, juror_ids[1]);
}

#[test]
fn test_apply_selection_assigns_roles() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (draw_id, juror_ids) = setup_draw_with_jurors(&mut persistence, 4);

    let selection = DrawSelection {
        titulars: vec![juror_ids[0], juror_ids[1]],
        suplentes: vec![juror_ids[2], juror_ids[3]],
    };
    persistence.apply_selection(draw_id, &selection).unwrap();

    let assignments = persistence.list_assignments(draw_id).unwrap();
    assert_eq!(assignments.len(), 4);
    let titulars = assignments
        .iter()
        .filter(|a| a.role == AssignmentRole::Titular)
        .count();
    assert_eq!(titulars, 2);
}

#[test]
fn test_apply_selection_fails_whole_batch_on_duplicate() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (draw_id, juror_ids) = setup_draw_with_jurors(&mut persistence, 3);

    persistence
        .assign_juror(draw_id, juror_ids[1], AssignmentRole::Suplente)
        .unwrap();

    let selection = DrawSelection {
        titulars: vec![juror_ids[0], juror_ids[1]],
        suplentes: vec![juror_ids[2]],
    };
    let result = persistence.apply_selection(draw_id, &selection);

    assert!(matches!(
        result,
        Err(PersistenceError::DuplicateAssignment { .. })
    ));
    // The pre-existing assignment is the only one left.
    assert_eq!(persistence.list_assignments(draw_id).unwrap().len(), 1);
}

#[test]
fn test_random_selection_from_eligible_pool() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (draw_id, juror_ids) = setup_draw_with_jurors(&mut persistence, 10);

    let pool: Vec<i64> = persistence
        .eligible_pool(2024)
        .unwrap()
        .iter()
        .filter_map(|j| j.juror_id)
        .collect();
    assert_eq!(pool.len(), juror_ids.len());

    let mut rng = StdRng::seed_from_u64(11);
    let selection = select_draw(&pool, 7, 2, &mut rng).unwrap();
    persistence.apply_selection(draw_id, &selection).unwrap();

    let assignments = persistence.list_assignments(draw_id).unwrap();
    assert_eq!(assignments.len(), 9);
    let titulars = assignments
        .iter()
        .filter(|a| a.role == AssignmentRole::Titular)
        .count();
    assert_eq!(titulars, 7);
}

#[test]
fn test_cancelled_draw_freezes_mutations() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (draw_id, juror_ids) = setup_draw_with_jurors(&mut persistence, 2);

    persistence
        .assign_juror(draw_id, juror_ids[0], AssignmentRole::Titular)
        .unwrap();
    persistence.cancel_draw(draw_id).unwrap();

    assert!(matches!(
        persistence.assign_juror(draw_id, juror_ids[1], AssignmentRole::Suplente),
        Err(PersistenceError::DrawNotEditable { .. })
    ));
    assert!(matches!(
        persistence.toggle_assignment_role(draw_id, juror_ids[0]),
        Err(PersistenceError::DrawNotEditable { .. })
    ));
    assert!(matches!(
        persistence.remove_assignment(draw_id, juror_ids[0]),
        Err(PersistenceError::DrawNotEditable { .. })
    ));
    assert!(matches!(
        persistence.generate_ballots(draw_id),
        Err(PersistenceError::DrawNotEditable { .. })
    ));

    // The existing assignment survives untouched.
    assert_eq!(persistence.list_assignments(draw_id).unwrap().len(), 1);
}

#[test]
fn test_mark_draw_held() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let draw_id = persistence.create_draw(&create_test_draw(2024)).unwrap();

    persistence.mark_draw_held(draw_id).unwrap();

    let stored = persistence.get_draw(draw_id).unwrap();
    assert_eq!(stored.status, DrawStatus::Held);
}

#[test]
fn test_delete_draw_cascades_assignments() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (draw_id, juror_ids) = setup_draw_with_jurors(&mut persistence, 1);

    persistence
        .assign_juror(draw_id, juror_ids[0], AssignmentRole::Titular)
        .unwrap();
    persistence.delete_draw(draw_id).unwrap();

    assert!(matches!(
        persistence.get_draw(draw_id),
        Err(PersistenceError::NotFound(_))
    ));
    // The cascade freed the juror for deletion again.
    persistence.delete_juror(juror_ids[0]).unwrap();
}
