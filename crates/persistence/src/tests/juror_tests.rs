// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for juror registration, normalization, the reactivation sweep,
//! and the deletion guard.

use crate::tests::{TEST_YEAR, create_test_draw, create_test_juror};
use crate::{Persistence, PersistenceError};
use jurado_domain::{AssignmentRole, InactivityReason, JurorStatus};

#[test]
fn test_register_and_get_round_trips() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let juror = create_test_juror(1, "Ana Prado");

    let juror_id = persistence.register_juror(&juror, TEST_YEAR).unwrap();
    let stored = persistence.get_juror(juror_id).unwrap();

    assert_eq!(stored.juror_id, Some(juror_id));
    assert_eq!(stored.cpf, juror.cpf);
    assert_eq!(stored.name, "Ana Prado");
    assert_eq!(stored.status, JurorStatus::Active);
}

#[test]
fn test_duplicate_cpf_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let juror = create_test_juror(2, "Bruno Lima");
    persistence.register_juror(&juror, TEST_YEAR).unwrap();

    let mut clone = create_test_juror(2, "Other Name");
    clone.cpf = juror.cpf.clone();
    let result = persistence.register_juror(&clone, TEST_YEAR);
    assert!(matches!(result, Err(PersistenceError::DuplicateCpf(_))));
}

#[test]
fn test_register_normalizes_last_year_service_into_rest() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mut juror = create_test_juror(3, "Carla Nunes");
    juror.last_service_date = Some(String::from("2023-06-10"));

    let juror_id = persistence.register_juror(&juror, TEST_YEAR).unwrap();
    let stored = persistence.get_juror(juror_id).unwrap();

    assert_eq!(stored.status, JurorStatus::Inactive);
    assert_eq!(stored.reason, Some(InactivityReason::TwelveMonthRest));
}

#[test]
fn test_update_to_active_clears_suspension() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let mut juror = create_test_juror(4, "Diego Rocha");
    juror.status = JurorStatus::Inactive;
    juror.reason = Some(InactivityReason::TemporarySuspension);
    juror.suspended_until = Some(String::from("2025-01-01"));

    let juror_id = persistence.register_juror(&juror, TEST_YEAR).unwrap();

    let mut updated = persistence.get_juror(juror_id).unwrap();
    updated.status = JurorStatus::Active;
    persistence.update_juror(&updated, TEST_YEAR).unwrap();

    let stored = persistence.get_juror(juror_id).unwrap();
    assert_eq!(stored.status, JurorStatus::Active);
    assert_eq!(stored.reason, None);
    assert_eq!(stored.suspended_until, None);
}

#[test]
fn test_reactivation_sweep_reactivates_expired_suspensions() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let mut expired = create_test_juror(5, "Elisa Gomes");
    expired.status = JurorStatus::Inactive;
    expired.reason = Some(InactivityReason::TemporarySuspension);
    expired.suspended_until = Some(String::from("2024-06-01"));
    let expired_id = persistence.register_juror(&expired, TEST_YEAR).unwrap();

    let mut ongoing = create_test_juror(6, "Fabio Dias");
    ongoing.status = JurorStatus::Inactive;
    ongoing.reason = Some(InactivityReason::TemporarySuspension);
    ongoing.suspended_until = Some(String::from("2024-12-31"));
    let ongoing_id = persistence.register_juror(&ongoing, TEST_YEAR).unwrap();

    let mut deceased = create_test_juror(7, "Gilda Matos");
    deceased.status = JurorStatus::Inactive;
    deceased.reason = Some(InactivityReason::Deceased);
    let deceased_id = persistence.register_juror(&deceased, TEST_YEAR).unwrap();

    let count = persistence.reactivation_sweep("2024-06-15").unwrap();
    assert_eq!(count, 1);

    let reactivated = persistence.get_juror(expired_id).unwrap();
    assert_eq!(reactivated.status, JurorStatus::Active);
    assert_eq!(reactivated.reason, None);
    assert_eq!(reactivated.suspended_until, None);

    assert_eq!(
        persistence.get_juror(ongoing_id).unwrap().status,
        JurorStatus::Inactive
    );
    assert_eq!(
        persistence.get_juror(deceased_id).unwrap().reason,
        Some(InactivityReason::Deceased)
    );
}

#[test]
fn test_reactivation_sweep_is_idempotent() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let mut juror = create_test_juror(8, "Hugo Reis");
    juror.status = JurorStatus::Inactive;
    juror.reason = Some(InactivityReason::TemporarySuspension);
    juror.suspended_until = Some(String::from("2024-06-15"));
    persistence.register_juror(&juror, TEST_YEAR).unwrap();

    // The boundary is inclusive: a suspension ending today is over.
    assert_eq!(persistence.reactivation_sweep("2024-06-15").unwrap(), 1);
    assert_eq!(persistence.reactivation_sweep("2024-06-15").unwrap(), 0);
}

#[test]
fn test_delete_juror_without_references() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let juror_id = persistence
        .register_juror(&create_test_juror(9, "Iris Melo"), TEST_YEAR)
        .unwrap();

    persistence.delete_juror(juror_id).unwrap();
    assert!(matches!(
        persistence.get_juror(juror_id),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_delete_assigned_juror_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let juror_id = persistence
        .register_juror(&create_test_juror(10, "Joana Cruz"), TEST_YEAR)
        .unwrap();
    let draw_id = persistence.create_draw(&create_test_draw(2024)).unwrap();
    persistence
        .assign_juror(draw_id, juror_id, AssignmentRole::Titular)
        .unwrap();

    let result = persistence.delete_juror(juror_id);
    assert_eq!(result, Err(PersistenceError::JurorReferenced { juror_id }));

    // Unassigning lifts the guard.
    persistence.remove_assignment(draw_id, juror_id).unwrap();
    persistence.delete_juror(juror_id).unwrap();
}

#[test]
fn test_register_jurors_is_all_or_nothing() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let first = create_test_juror(11, "Kaio Luz");
    let mut second = create_test_juror(12, "Lia Paes");
    second.cpf = first.cpf.clone();

    let result = persistence.register_jurors(&[first, second], TEST_YEAR);
    assert!(matches!(result, Err(PersistenceError::DuplicateCpf(_))));
    assert!(persistence.list_jurors().unwrap().is_empty());
}

#[test]
fn test_deleting_an_institution_nulls_juror_references() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let institution_id = persistence
        .create_institution("Escola Municipal", Some("Itaborai"))
        .unwrap();

    let mut juror = create_test_juror(13, "Marta Luna");
    juror.institution_id = Some(institution_id);
    let juror_id = persistence.register_juror(&juror, TEST_YEAR).unwrap();

    persistence.delete_institution(institution_id).unwrap();

    let stored = persistence.get_juror(juror_id).unwrap();
    assert_eq!(stored.institution_id, None);
    assert!(persistence.list_institutions().unwrap().is_empty());
}

#[test]
fn test_eligible_pool_applies_all_three_rules() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let eligible = create_test_juror(14, "Nina Prado");
    let eligible_id = persistence.register_juror(&eligible, TEST_YEAR).unwrap();

    let mut under_age = create_test_juror(15, "Otto Neves");
    under_age.birth_date = Some(String::from("2007-01-01"));
    persistence.register_juror(&under_age, TEST_YEAR).unwrap();

    let mut rested = create_test_juror(16, "Paula Sales");
    rested.last_service_date = Some(String::from("2023-06-10"));
    let rested_id = persistence.register_juror(&rested, TEST_YEAR).unwrap();

    // Registration forced the twelve-month rest; an administrative edit
    // the following year puts the juror back in circulation.
    let mut back = persistence.get_juror(rested_id).unwrap();
    back.status = JurorStatus::Active;
    back.reason = None;
    persistence.update_juror(&back, 2025).unwrap();

    let mut inactive = create_test_juror(17, "Quim Barros");
    inactive.status = JurorStatus::Inactive;
    inactive.reason = Some(InactivityReason::Impediment);
    persistence.register_juror(&inactive, TEST_YEAR).unwrap();

    // For 2024 the rest rule still excludes the 2023 service.
    let pool = persistence.eligible_pool(2024).unwrap();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].juror_id, Some(eligible_id));

    // For 2025 the full rest year has passed.
    let next_year = persistence.eligible_pool(2025).unwrap();
    let names: Vec<&str> = next_year.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, vec!["Nina Prado", "Paula Sales"]);
}
