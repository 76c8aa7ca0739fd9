// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BallotCandidate, BallotSlot, number_ballots};
use jurado_domain::AssignmentRole;

fn candidate(juror_id: i64, name: &str, role: AssignmentRole) -> BallotCandidate {
    BallotCandidate {
        juror_id,
        juror_name: name.to_string(),
        role,
    }
}

#[test]
fn test_empty_assignments_yield_empty_numbering() {
    assert!(number_ballots(&[]).is_empty());
}

#[test]
fn test_titulars_come_before_suplentes() {
    let candidates = vec![
        candidate(10, "Alice Prado", AssignmentRole::Suplente),
        candidate(11, "Zeca Moreira", AssignmentRole::Titular),
    ];
    let slots = number_ballots(&candidates);
    assert_eq!(
        slots,
        vec![
            BallotSlot {
                juror_id: 11,
                sequence: 1
            },
            BallotSlot {
                juror_id: 10,
                sequence: 2
            },
        ]
    );
}

#[test]
fn test_three_assignments_numbered_one_two_three() {
    let candidates = vec![
        candidate(3, "Carla Nunes", AssignmentRole::Suplente),
        candidate(1, "Bruno Lima", AssignmentRole::Titular),
        candidate(2, "Alice Prado", AssignmentRole::Titular),
    ];
    let slots = number_ballots(&candidates);
    // Titulars in name order first, then the suplente.
    assert_eq!(
        slots.iter().map(|s| s.juror_id).collect::<Vec<_>>(),
        vec![2, 1, 3]
    );
    assert_eq!(
        slots.iter().map(|s| s.sequence).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_regeneration_after_removal_closes_the_gap() {
    let mut candidates = vec![
        candidate(1, "Bruno Lima", AssignmentRole::Titular),
        candidate(2, "Alice Prado", AssignmentRole::Titular),
        candidate(3, "Carla Nunes", AssignmentRole::Suplente),
    ];
    // Juror 1 is unassigned between numbering passes.
    candidates.retain(|c| c.juror_id != 1);

    let slots = number_ballots(&candidates);
    assert_eq!(
        slots,
        vec![
            BallotSlot {
                juror_id: 2,
                sequence: 1
            },
            BallotSlot {
                juror_id: 3,
                sequence: 2
            },
        ]
    );
}

#[test]
fn test_exact_name_ties_order_by_juror_id() {
    let candidates = vec![
        candidate(9, "Maria Souza", AssignmentRole::Titular),
        candidate(4, "Maria Souza", AssignmentRole::Titular),
    ];
    let slots = number_ballots(&candidates);
    assert_eq!(
        slots.iter().map(|s| s.juror_id).collect::<Vec<_>>(),
        vec![4, 9]
    );
}

#[test]
fn test_numbering_ignores_input_order() {
    let forward = vec![
        candidate(1, "Bruno Lima", AssignmentRole::Titular),
        candidate(2, "Alice Prado", AssignmentRole::Suplente),
        candidate(3, "Carla Nunes", AssignmentRole::Titular),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(number_ballots(&forward), number_ballots(&reversed));
}
