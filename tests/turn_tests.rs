//! Turn order properties.
//!
//! The cursor must always name an active player, rounds must advance once
//! per full cycle, and removals must never skip or repeat a player.

use proptest::prelude::*;
use rust_boardgame::core::{GameError, PlayerId, TurnManager};

/// Round number increases by exactly 1 per N advances with no removals.
#[test]
fn test_round_per_full_cycle() {
    for n in 1..=8 {
        let mut turns = TurnManager::new(PlayerId::all(n)).unwrap();
        for round in 1..=5u32 {
            assert_eq!(turns.round(), round);
            for _ in 0..n {
                turns.advance().unwrap();
            }
        }
        assert_eq!(turns.current().unwrap(), PlayerId(0));
    }
}

/// A single player takes every turn.
#[test]
fn test_single_player_cycles_alone() {
    let mut turns = TurnManager::new([PlayerId(4)]).unwrap();
    assert_eq!(turns.advance().unwrap(), PlayerId(4));
    assert_eq!(turns.round(), 2);
}

/// Removing the last remaining player leaves an empty, terminal manager.
#[test]
fn test_empty_is_terminal() {
    let mut turns = TurnManager::new([PlayerId(0)]).unwrap();
    turns.remove(PlayerId(0)).unwrap();

    assert!(turns.is_empty());
    assert!(matches!(turns.advance(), Err(GameError::NoSuchElement(_))));
    assert!(matches!(
        turns.remove(PlayerId(0)),
        Err(GameError::NoSuchElement(_))
    ));
}

#[derive(Clone, Debug)]
enum Op {
    Advance,
    /// Remove the active player at this index (modulo the active count).
    Remove(usize),
    RemoveCurrent,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Advance),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => Just(Op::RemoveCurrent),
    ]
}

proptest! {
    /// The cursor only ever names an active player.
    #[test]
    fn prop_cursor_always_active(n in 1usize..8, ops in prop::collection::vec(op(), 0..40)) {
        let mut turns = TurnManager::new(PlayerId::all(n)).unwrap();

        for op in ops {
            if turns.is_empty() {
                break;
            }
            match op {
                Op::Advance => {
                    turns.advance().unwrap();
                }
                Op::Remove(i) => {
                    let victim = turns.active()[i % turns.len()];
                    turns.remove(victim).unwrap();
                }
                Op::RemoveCurrent => {
                    let victim = turns.current().unwrap();
                    turns.remove(victim).unwrap();
                }
            }

            if let Ok(current) = turns.current() {
                prop_assert!(turns.contains(current));
            } else {
                prop_assert!(turns.is_empty());
            }
        }
    }

    /// Removing the current player, then ending their turn, hands the turn
    /// to the player who sat after them.
    #[test]
    fn prop_remove_current_hands_to_successor(n in 2usize..8, start in 0usize..8) {
        let mut turns = TurnManager::new(PlayerId::all(n)).unwrap();
        for _ in 0..(start % n) {
            turns.advance().unwrap();
        }

        let seat = start % n;
        let victim = turns.current().unwrap();
        let expected = PlayerId(((seat + 1) % n) as u8);

        turns.remove(victim).unwrap();
        prop_assert_eq!(turns.advance().unwrap(), expected);
        prop_assert!(!turns.contains(victim));
    }

    /// Within one round every surviving player acts exactly once, even when
    /// players drop out mid-round.
    #[test]
    fn prop_no_skips_or_repeats(n in 2usize..8, drop_after in 0usize..8) {
        let mut turns = TurnManager::new(PlayerId::all(n)).unwrap();
        let mut acted = vec![turns.current().unwrap()];
        let drop_after = drop_after % n;

        while turns.round() == 1 {
            if acted.len() == drop_after + 1 {
                // The acting player goes bankrupt at the end of their turn.
                let victim = turns.current().unwrap();
                turns.remove(victim).unwrap();
            }
            let next = turns.advance().unwrap();
            if turns.round() == 1 {
                acted.push(next);
            }
        }

        let mut sorted = acted.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), acted.len());
        prop_assert_eq!(acted.len(), n);
    }
}
