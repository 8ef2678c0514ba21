//! Property tests for scrambling and tile conservation

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordstack::core::{Slot, TileId, Word};
use wordstack::dictionary::Dictionary;
use wordstack::game::{GameSession, Phase, WinRule, interleave};

fn action() -> impl Strategy<Value = u8> {
    0u8..6
}

fn tile_ids(session: &GameSession) -> Vec<u32> {
    let mut ids: Vec<u32> = session
        .remaining()
        .chain(session.slot(Slot::First).letters())
        .chain(session.slot(Slot::Second).letters())
        .map(|l| l.id().raw())
        .collect();
    ids.sort_unstable();
    ids
}

proptest! {
    #[test]
    fn interleave_keeps_both_words_in_order(
        first in "[a-z]{0,8}",
        second in "[a-z]{0,8}",
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sequence = interleave(first.as_bytes(), second.as_bytes(), &mut rng);
        prop_assert_eq!(sequence.len(), first.len() + second.len());

        let from = |slot: Slot| -> String {
            sequence
                .iter()
                .filter(|l| l.source() == slot)
                .map(|l| l.as_char())
                .collect()
        };
        prop_assert_eq!(from(Slot::First), first);
        prop_assert_eq!(from(Slot::Second), second);

        for (i, letter) in sequence.iter().enumerate() {
            prop_assert_eq!(letter.id(), TileId::new(i as u32));
        }
    }

    #[test]
    fn every_tile_is_in_exactly_one_place(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..40),
    ) {
        let dict = Dictionary::from_strs(&["apple", "beach", "cheap", "peach"], 5).unwrap();
        let mut session = GameSession::new(dict, StdRng::seed_from_u64(seed), WinRule::default());
        session.start_with(Word::new("cheap").unwrap(), Word::new("peach").unwrap());
        let expected: Vec<u32> = (0..10).collect();

        for code in actions {
            let _ = match code {
                0 => session.place_from_stack(Slot::First),
                1 => session.place_from_stack(Slot::Second),
                2 => session.move_between_slots(Slot::First, Slot::Second),
                3 => session.move_between_slots(Slot::Second, Slot::First),
                _ => session.undo(),
            };

            prop_assert_eq!(tile_ids(&session), expected.clone());
            prop_assert!(session.slot(Slot::First).count() <= 5);
            prop_assert!(session.slot(Slot::Second).count() <= 5);
            prop_assert_eq!(
                session.phase() == Phase::Completed,
                session.remaining_count() == 0
            );
        }
    }
}
