//! Property tests over auto-played matches.
//!
//! Every step of a match driven by either policy must:
//! - conserve the tile count
//! - lay tiles with the matching pip against the target end
//! - leave inspection results unchanged when nothing mutates
//! - reach a terminal state within a bounded number of steps

use proptest::prelude::*;

use domino_duel::{
    FirstPlayable, GreedyDoubles, Line, MatchConfig, MovePolicy, Placement, Seat, Tile,
    TurnController, TurnEvent,
};

fn config_strategy() -> impl Strategy<Value = MatchConfig> {
    (4u8..=12).prop_map(|max_pip| MatchConfig::default().with_max_pip(max_pip))
}

fn human_policy(greedy: bool) -> &'static dyn MovePolicy {
    if greedy {
        &GreedyDoubles
    } else {
        &FirstPlayable
    }
}

/// Check the laid tile against the ends before and after the step.
fn assert_oriented(before: Option<(u8, u8)>, after: Option<(u8, u8)>, laid: Tile, placement: Placement) {
    let after = after.expect("a laid tile leaves the line non-empty");
    match placement {
        Placement::Opener => {
            assert_eq!(before, None);
            assert_eq!(after, (laid.left(), laid.right()));
        }
        Placement::Left => {
            let (left, right) = before.expect("left placement needs a line");
            assert_eq!(laid.right(), left);
            assert_eq!(after, (laid.left(), right));
        }
        Placement::Right => {
            let (left, right) = before.expect("right placement needs a line");
            assert_eq!(laid.left(), right);
            assert_eq!(after, (left, laid.right()));
        }
    }
}

proptest! {
    /// Conservation, orientation and termination across a whole match.
    #[test]
    fn prop_match_invariants(seed in any::<u64>(), config in config_strategy(), greedy in any::<bool>()) {
        let mut controller = TurnController::new(config, seed, GreedyDoubles).unwrap();
        let total = controller.engine().total_tiles();
        let bound = 4 * total;
        prop_assert_eq!(total, config.set_size());

        let mut steps = 0;
        while controller.outcome().is_none() {
            prop_assert!(steps < bound, "no terminal state after {} steps", steps);

            let before = controller.engine().line().ends();
            let event = controller.step_with(human_policy(greedy)).unwrap();
            let after = controller.engine().line().ends();

            prop_assert_eq!(controller.engine().tile_count(), total);
            match event {
                TurnEvent::Played { laid, placement, .. }
                | TurnEvent::DrewAndPlayed { laid, placement, .. } => {
                    assert_oriented(before, after, laid, placement);
                }
                TurnEvent::DrewAndPassed { .. } | TurnEvent::Passed { .. } => {
                    prop_assert_eq!(before, after);
                }
            }
            steps += 1;
        }

        let outcome = controller.outcome().unwrap();
        for seat in Seat::ALL {
            prop_assert_eq!(outcome.pip_totals[seat], controller.engine().pip_total(seat));
        }
    }

    /// Any tile on an empty line may only open it.
    #[test]
    fn prop_empty_line_only_opens(a in 0u8..=12, b in 0u8..=12) {
        let placements = Line::new().legal_placements(Tile::new(a, b));
        prop_assert_eq!(placements.as_slice(), &[Placement::Opener]);
    }

    /// Inspection is stable between mutations.
    #[test]
    fn prop_inspection_is_idempotent(seed in any::<u64>(), steps in 0usize..20) {
        let mut controller = TurnController::new(MatchConfig::default(), seed, GreedyDoubles).unwrap();
        for _ in 0..steps {
            if controller.outcome().is_some() {
                break;
            }
            controller.step_with(&FirstPlayable).unwrap();
        }

        let engine = controller.engine();
        for seat in Seat::ALL {
            prop_assert_eq!(engine.playable(seat), engine.playable(seat));
            for &tile in engine.hand(seat) {
                prop_assert_eq!(engine.legal_placements(tile), engine.legal_placements(tile));
            }
        }
        prop_assert_eq!(controller.opponent_decision(), controller.opponent_decision());
    }
}
