//! Integration tests for knockout generation, round order and advancement.

use padel_bracket_engine::{
    advance_round, generate_knockout_round, plan_for_qualified, record_score,
    third_place_pairing, BracketError, GameMatch, KnockoutEntry, KnockoutPlan, KnockoutStart,
    MatchFormat, MatchStatus, RoundOrder, RoundType, TeamRef,
};
use uuid::Uuid;

fn team(name: &str) -> TeamRef {
    TeamRef::new(Uuid::new_v4(), name)
}

/// A completed match won by `winner` (team 1 when `team_1_wins`).
fn decided(round: RoundType, order: u32, winner: &TeamRef, team_1_wins: bool) -> GameMatch {
    let loser = team(&format!("{}-opponent", winner.name));
    let (t1, t2, score) = if team_1_wins {
        (winner.clone(), loser, "6/1 6/1")
    } else {
        (loser, winner.clone(), "1/6 1/6")
    };
    let mut m = GameMatch::new(t1, t2, round, order);
    record_score(&mut m, score, MatchFormat::A1).unwrap();
    m
}

fn start_round(start: KnockoutStart) -> Option<(RoundType, usize, usize)> {
    match start {
        KnockoutStart::Start(plan) => Some((plan.round, plan.slots, plan.surplus)),
        _ => None,
    }
}

#[test]
fn round_order_table() {
    let order = RoundOrder::default();
    assert_eq!(order.next(RoundType::Pool), Some(RoundType::RoundOf16));
    assert_eq!(order.next(RoundType::Quarters), Some(RoundType::Semis));
    assert_eq!(order.next(RoundType::Semis), Some(RoundType::Final));
    assert_eq!(order.next(RoundType::Final), None);
    assert_eq!(order.next(RoundType::ThirdPlace), None);
}

#[test]
fn qualified_count_picks_start_round() {
    let order = RoundOrder::default();
    let cases = [
        (20, Some((RoundType::RoundOf16, 8, 4))),
        (16, Some((RoundType::RoundOf16, 8, 0))),
        (8, Some((RoundType::Quarters, 4, 0))),
        (7, Some((RoundType::Semis, 2, 3))),
        (6, Some((RoundType::Semis, 2, 2))),
        (4, Some((RoundType::Semis, 2, 0))),
        (3, Some((RoundType::Final, 1, 1))),
        (2, Some((RoundType::Final, 1, 0))),
        (1, None),
        (0, None),
    ];
    for (qualified, expected) in cases {
        assert_eq!(
            start_round(plan_for_qualified(&order, qualified)),
            expected,
            "{qualified} qualified"
        );
    }
    assert_eq!(plan_for_qualified(&order, 1), KnockoutStart::NoKnockoutStage);
}

#[test]
fn pools_send_top_two() {
    let start = generate_knockout_round(
        &RoundOrder::default(),
        KnockoutEntry::FromPools { pool_count: 4 },
    );
    assert_eq!(
        start,
        KnockoutStart::Start(KnockoutPlan {
            round: RoundType::Quarters,
            qualified: 8,
            slots: 4,
            surplus: 0,
        })
    );
}

#[test]
fn three_pools_open_a_bracket_that_advances() {
    let order = RoundOrder::default();
    let plan = match generate_knockout_round(&order, KnockoutEntry::FromPools { pool_count: 3 }) {
        KnockoutStart::Start(plan) => plan,
        other => panic!("expected a knockout stage, got {other:?}"),
    };
    assert_eq!((plan.round, plan.slots, plan.surplus), (RoundType::Semis, 2, 2));

    let mut semis = plan.skeleton_matches();
    for (i, m) in semis.iter_mut().enumerate() {
        m.team_1 = Some(team(&format!("Seed{}", 2 * i + 1)));
        m.team_2 = Some(team(&format!("Seed{}", 2 * i + 2)));
        record_score(m, "6/4 6/4", MatchFormat::A1).unwrap();
    }

    let finals = advance_round(&order, RoundType::Semis, &semis).unwrap();
    assert_eq!(finals.len(), 1);
    assert_eq!(finals[0].round, RoundType::Final);
    assert_eq!(finals[0].team_1.as_ref().map(|t| t.name.as_str()), Some("Seed1"));
    assert_eq!(finals[0].team_2.as_ref().map(|t| t.name.as_str()), Some("Seed3"));
}

#[test]
fn custom_round_order_is_respected() {
    let order = RoundOrder::new(vec![
        RoundType::Pool,
        RoundType::Quarters,
        RoundType::Semis,
        RoundType::Final,
    ]);
    assert_eq!(
        start_round(generate_knockout_round(&order, KnockoutEntry::Qualified(20))),
        Some((RoundType::Quarters, 4, 12))
    );
    assert_eq!(order.next(RoundType::Pool), Some(RoundType::Quarters));
}

#[test]
fn existing_rounds_are_only_observed() {
    let order = RoundOrder::default();
    let pool_only = vec![GameMatch::in_pool(Uuid::new_v4(), team("A"), team("B"), 1)];
    assert_eq!(
        generate_knockout_round(&order, KnockoutEntry::ExistingRounds(&pool_only)),
        KnockoutStart::NoKnockoutStage
    );

    let mut with_bracket = pool_only.clone();
    with_bracket.push(GameMatch::slot(RoundType::Semis, 1));
    assert_eq!(
        generate_knockout_round(&order, KnockoutEntry::ExistingRounds(&with_bracket)),
        KnockoutStart::AlreadyMaterialized
    );
}

#[test]
fn skeleton_matches_are_empty_scheduled_slots() {
    let plan = KnockoutPlan {
        round: RoundType::Quarters,
        qualified: 8,
        slots: 4,
        surplus: 0,
    };
    let slots = plan.skeleton_matches();
    assert_eq!(
        slots.iter().map(|m| m.match_order).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    for m in &slots {
        assert_eq!(m.round, RoundType::Quarters);
        assert_eq!(m.status, MatchStatus::Scheduled);
        assert!(m.team_1.is_none() && m.team_2.is_none());
    }
}

#[test]
fn quarters_advance_to_semis_in_match_order() {
    let w: Vec<TeamRef> = (1..=4).map(|i| team(&format!("W{i}"))).collect();
    // Supplied out of order; pairing follows match_order.
    let quarters = vec![
        decided(RoundType::Quarters, 3, &w[2], true),
        decided(RoundType::Quarters, 1, &w[0], false),
        decided(RoundType::Quarters, 4, &w[3], false),
        decided(RoundType::Quarters, 2, &w[1], true),
    ];

    let semis = advance_round(&RoundOrder::default(), RoundType::Quarters, &quarters).unwrap();
    assert_eq!(semis.len(), 2);
    let pairs: Vec<_> = semis
        .iter()
        .map(|m| {
            (
                m.match_order,
                m.team_1.as_ref().map(|t| t.id),
                m.team_2.as_ref().map(|t| t.id),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            (1, Some(w[0].id), Some(w[1].id)),
            (2, Some(w[2].id), Some(w[3].id))
        ]
    );
    for m in &semis {
        assert_eq!(m.round, RoundType::Semis);
        assert_eq!(m.status, MatchStatus::Scheduled);
        assert_eq!(m.winner, None);
    }
}

#[test]
fn byes_advance_their_team() {
    let (a, b) = (team("A"), team("B"));
    let semis = vec![
        GameMatch::bye(a.clone(), RoundType::Semis, 1),
        decided(RoundType::Semis, 2, &b, true),
    ];
    let finals = advance_round(&RoundOrder::default(), RoundType::Semis, &semis).unwrap();
    assert_eq!(finals.len(), 1);
    assert_eq!(finals[0].round, RoundType::Final);
    assert_eq!(finals[0].team_1.as_ref().map(|t| t.id), Some(a.id));
    assert_eq!(finals[0].team_2.as_ref().map(|t| t.id), Some(b.id));
}

#[test]
fn byes_without_stored_winner_still_advance() {
    let (a, b, c) = (team("A"), team("B"), team("C"));
    let from_json: GameMatch = serde_json::from_value(serde_json::json!({
        "id": Uuid::new_v4(),
        "round": "quarters",
        "match_order": 1,
        "team_1": &a,
        "team_2": null,
        "is_bye": true,
        "status": "completed",
    }))
    .unwrap();
    assert_eq!(from_json.winner, None);

    let mut second_side = GameMatch::bye(b.clone(), RoundType::Quarters, 2);
    second_side.team_2 = second_side.team_1.take();
    second_side.winner = None;

    let quarters = vec![
        from_json,
        second_side,
        decided(RoundType::Quarters, 3, &c, false),
        decided(RoundType::Quarters, 4, &team("D"), true),
    ];
    let semis = advance_round(&RoundOrder::default(), RoundType::Quarters, &quarters).unwrap();
    assert_eq!(semis[0].team_1.as_ref().map(|t| t.id), Some(a.id));
    assert_eq!(semis[0].team_2.as_ref().map(|t| t.id), Some(b.id));
    assert_eq!(semis[1].team_1.as_ref().map(|t| t.id), Some(c.id));
}

#[test]
fn round_number_carries_forward() {
    let mut semis = vec![
        decided(RoundType::Semis, 1, &team("A"), true),
        decided(RoundType::Semis, 2, &team("B"), true),
    ];
    for m in &mut semis {
        m.round_number = Some(3);
    }
    let finals = advance_round(&RoundOrder::default(), RoundType::Semis, &semis).unwrap();
    assert_eq!(finals[0].round_number, Some(4));
}

#[test]
fn final_has_no_next_round() {
    let finals = vec![decided(RoundType::Final, 1, &team("A"), true)];
    assert_eq!(
        advance_round(&RoundOrder::default(), RoundType::Final, &finals),
        Err(BracketError::NoNextRound {
            round: RoundType::Final
        })
    );
}

#[test]
fn pool_and_third_place_are_not_advanced() {
    let order = RoundOrder::default();
    for round in [RoundType::Pool, RoundType::ThirdPlace] {
        assert_eq!(
            advance_round(&order, round, &[]),
            Err(BracketError::NotAKnockoutRound { round })
        );
    }
}

#[test]
fn empty_round_is_rejected() {
    assert_eq!(
        advance_round(&RoundOrder::default(), RoundType::Quarters, &[]),
        Err(BracketError::EmptyRound {
            round: RoundType::Quarters
        })
    );
}

#[test]
fn incomplete_round_is_rejected() {
    let quarters = vec![
        decided(RoundType::Quarters, 1, &team("A"), true),
        GameMatch::new(team("B"), team("C"), RoundType::Quarters, 2),
    ];
    assert_eq!(
        advance_round(&RoundOrder::default(), RoundType::Quarters, &quarters),
        Err(BracketError::RoundIncomplete {
            round: RoundType::Quarters,
            match_order: 2
        })
    );
}

#[test]
fn odd_winner_count_is_rejected() {
    let quarters: Vec<GameMatch> = (1..=3)
        .map(|i| decided(RoundType::Quarters, i, &team(&format!("W{i}")), true))
        .collect();
    assert_eq!(
        advance_round(&RoundOrder::default(), RoundType::Quarters, &quarters),
        Err(BracketError::AdvancementParity {
            round: RoundType::Quarters,
            winners: 3
        })
    );
}

#[test]
fn advancing_twice_is_rejected() {
    let order = RoundOrder::default();
    let mut bracket = vec![
        decided(RoundType::Semis, 1, &team("A"), true),
        decided(RoundType::Semis, 2, &team("B"), false),
    ];
    let finals = advance_round(&order, RoundType::Semis, &bracket).unwrap();
    bracket.extend(finals);
    assert_eq!(
        advance_round(&order, RoundType::Semis, &bracket),
        Err(BracketError::NextRoundAlreadyExists {
            round: RoundType::Semis
        })
    );
}

#[test]
fn third_place_pairs_semi_losers() {
    let semis = vec![
        decided(RoundType::Semis, 2, &team("B"), false),
        decided(RoundType::Semis, 1, &team("A"), true),
    ];
    let (first, second) = third_place_pairing(&semis).unwrap();
    assert_eq!(first.name, "A-opponent");
    assert_eq!(second.name, "B-opponent");

    assert!(third_place_pairing(&semis[..1]).is_none());
}
