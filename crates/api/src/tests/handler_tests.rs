// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{
    AssignJurorRequest, CreateJudgeRequest, MarkServiceRequest, PerformDrawRequest,
    UpdateJudgeRequest, UpdateJurorRequest,
};
use crate::tests::helpers::{draw_request, juror_request, test_clock, test_cpf, test_persistence};

#[test]
fn test_register_juror_returns_normalized_view() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    let info = handlers::register_juror(
        &mut persistence,
        &clock,
        juror_request(1, "Marina Duarte"),
    )
    .unwrap();

    assert_eq!(info.name, "Marina Duarte");
    assert_eq!(info.cpf, test_cpf(1));
    assert_eq!(info.status, "Active");
    assert!(info.juror_id > 0);
}

#[test]
fn test_register_juror_rejects_bad_cpf() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    let mut request = juror_request(1, "Marina Duarte");
    request.cpf = String::from("123.456.789-00");

    let result = handlers::register_juror(&mut persistence, &clock, request);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "cpf"
    ));
}

#[test]
fn test_duplicate_cpf_surfaces_as_conflict() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    handlers::register_juror(&mut persistence, &clock, juror_request(1, "Marina Duarte"))
        .unwrap();
    let result =
        handlers::register_juror(&mut persistence, &clock, juror_request(1, "Outro Nome"));

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_update_juror_rejects_unknown_status() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    let info = handlers::register_juror(
        &mut persistence,
        &clock,
        juror_request(1, "Marina Duarte"),
    )
    .unwrap();

    let request = UpdateJurorRequest {
        juror_id: info.juror_id,
        cpf: info.cpf,
        name: info.name,
        birth_date: info.birth_date,
        status: String::from("Dormant"),
        reason: None,
        suspended_until: None,
        institution_id: None,
    };
    let result = handlers::update_juror(&mut persistence, &clock, request);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "status"
    ));
}

#[test]
fn test_update_juror_preserves_service_history() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    let info = handlers::register_juror(
        &mut persistence,
        &clock,
        juror_request(1, "Marina Duarte"),
    )
    .unwrap();
    let draw = handlers::create_draw(&mut persistence, draw_request()).unwrap();
    handlers::mark_last_service(
        &mut persistence,
        &clock,
        MarkServiceRequest {
            draw_id: draw.draw_id,
            juror_ids: vec![info.juror_id],
        },
    )
    .unwrap();

    // A rename must not clear the recorded service date.
    let request = UpdateJurorRequest {
        juror_id: info.juror_id,
        cpf: info.cpf,
        name: String::from("Marina D. Duarte"),
        birth_date: info.birth_date,
        status: String::from("Active"),
        reason: None,
        suspended_until: None,
        institution_id: None,
    };
    let updated = handlers::update_juror(&mut persistence, &clock, request).unwrap();
    assert_eq!(updated.last_service_date.as_deref(), Some("2024-11-05"));
}

#[test]
fn test_sweep_reports_date_and_count() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    let info = handlers::register_juror(
        &mut persistence,
        &clock,
        juror_request(1, "Marina Duarte"),
    )
    .unwrap();
    let request = UpdateJurorRequest {
        juror_id: info.juror_id,
        cpf: info.cpf,
        name: info.name,
        birth_date: info.birth_date,
        status: String::from("Inactive"),
        reason: Some(String::from("TemporarySuspension")),
        suspended_until: Some(String::from("2024-06-01")),
        institution_id: None,
    };
    handlers::update_juror(&mut persistence, &clock, request).unwrap();

    let response = handlers::run_reactivation_sweep(&mut persistence, &clock).unwrap();
    assert_eq!(response.today, "2024-06-15");
    assert_eq!(response.reactivated, 1);

    let juror = handlers::get_juror(&mut persistence, info.juror_id).unwrap();
    assert_eq!(juror.status, "Active");
}

#[test]
fn test_judge_lifecycle_via_handlers() {
    let mut persistence = test_persistence();

    let first = handlers::create_judge(
        &mut persistence,
        CreateJudgeRequest {
            name: String::from("Dra. Helena Costa"),
            is_titular: false,
            status: String::from("Active"),
        },
    )
    .unwrap();
    // The only judge is promoted regardless of the request.
    assert!(first.is_titular);

    let result = handlers::update_judge(
        &mut persistence,
        UpdateJudgeRequest {
            judge_id: first.judge_id,
            name: first.name.clone(),
            is_titular: false,
            status: String::from("Active"),
        },
    );
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "titular_judge"));
}

#[test]
fn test_perform_draw_and_generate_ballots() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    for i in 0..10 {
        handlers::register_juror(
            &mut persistence,
            &clock,
            juror_request(i, &format!("Juror {i:02}")),
        )
        .unwrap();
    }
    let draw = handlers::create_draw(&mut persistence, draw_request()).unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let response = handlers::perform_draw(
        &mut persistence,
        PerformDrawRequest {
            draw_id: draw.draw_id,
            num_titular: 7,
            num_suplente: 2,
        },
        &mut rng,
    )
    .unwrap();

    assert_eq!(response.pool_size, 10);
    assert_eq!(response.titulars.len(), 7);
    assert_eq!(response.suplentes.len(), 2);

    let ballots = handlers::generate_ballots(&mut persistence, draw.draw_id).unwrap();
    assert_eq!(ballots.ballot_count, 9);

    let listed = handlers::list_ballots(&mut persistence, draw.draw_id).unwrap();
    let sequences: Vec<u32> = listed.iter().map(|b| b.sequence).collect();
    assert_eq!(sequences, (1..=9).collect::<Vec<u32>>());
}

#[test]
fn test_perform_draw_rejects_undersized_pool() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    for i in 0..3 {
        handlers::register_juror(
            &mut persistence,
            &clock,
            juror_request(i, &format!("Juror {i:02}")),
        )
        .unwrap();
    }
    let draw = handlers::create_draw(&mut persistence, draw_request()).unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let result = handlers::perform_draw(
        &mut persistence,
        PerformDrawRequest {
            draw_id: draw.draw_id,
            num_titular: 7,
            num_suplente: 2,
        },
        &mut rng,
    );
    assert!(
        matches!(result, Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "draw_pool")
    );
}

#[test]
fn test_assign_juror_rejects_unknown_role() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    let info = handlers::register_juror(
        &mut persistence,
        &clock,
        juror_request(1, "Marina Duarte"),
    )
    .unwrap();
    let draw = handlers::create_draw(&mut persistence, draw_request()).unwrap();

    let result = handlers::assign_juror(
        &mut persistence,
        AssignJurorRequest {
            draw_id: draw.draw_id,
            juror_id: info.juror_id,
            role: String::from("Observer"),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "role"
    ));
}

#[test]
fn test_cancelled_draw_conflict_via_handlers() {
    let mut persistence = test_persistence();
    let clock = test_clock();

    let info = handlers::register_juror(
        &mut persistence,
        &clock,
        juror_request(1, "Marina Duarte"),
    )
    .unwrap();
    let draw = handlers::create_draw(&mut persistence, draw_request()).unwrap();
    handlers::cancel_draw(&mut persistence, draw.draw_id).unwrap();

    let result = handlers::assign_juror(
        &mut persistence,
        AssignJurorRequest {
            draw_id: draw.draw_id,
            juror_id: info.juror_id,
            role: String::from("Titular"),
        },
    );
    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}
