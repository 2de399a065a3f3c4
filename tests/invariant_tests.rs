//! Structural invariant tests.
//!
//! The move engine's contract is that after *every* public operation:
//!
//! - `stacked_on` and child-list membership agree (round trip),
//! - a card's `pile` field and pile item lists agree (round trip),
//! - an empty child list is absent, never present-but-empty,
//! - at rest, a stacked card shares its stack root's pile (or is
//!   pile-less when the root is),
//! - the stacking relation is acyclic.
//!
//! A proptest drives random operation sequences and checks all of it
//! after each step.

use proptest::prelude::*;

use cardtable::{CardId, CardLibrary, CardTemplate, PileId, Table, TypeId};

fn library() -> CardLibrary {
    let mut lib = CardLibrary::new();
    lib.register(CardTemplate::new(TypeId::new("t"), "face"))
        .unwrap();
    lib
}

fn pile_names() -> [PileId; 3] {
    ["p0".into(), "p1".into(), "p2".into()]
}

fn setup(card_count: u32) -> (Table, Vec<CardId>) {
    let mut table = Table::with_seed(library(), 7);
    for pile in pile_names() {
        table.create_pile(pile).unwrap();
    }
    let ids = (0..card_count)
        .map(|_| table.create_card(&TypeId::new("t"), false).unwrap())
        .collect();
    (table, ids)
}

fn check_invariants(table: &Table, cards: &[CardId]) {
    let piles = pile_names();

    for &id in cards {
        let card = table.card(id);

        // Child list is absent rather than empty.
        if let Some(stack) = &card.stack {
            assert!(!stack.is_empty(), "{id}: empty stack list should be absent");
        }

        // stacked_on <-> child list round trip.
        if let Some(parent) = card.stacked_on {
            let siblings = table.stack_children(parent);
            assert_eq!(
                siblings.iter().filter(|&&c| c == id).count(),
                1,
                "{id}: not exactly once in parent {parent}'s children"
            );
        }
        for &child in card.children() {
            assert_eq!(
                table.card(child).stacked_on,
                Some(id),
                "{child}: back-reference does not match parent {id}"
            );
        }

        // pile field <-> item list round trip.
        match &card.pile {
            Some(pile) => {
                let items = table.cards_in_pile(pile);
                assert_eq!(
                    items.iter().filter(|&&c| c == id).count(),
                    1,
                    "{id}: not exactly once in pile '{pile}'"
                );
            }
            None => {
                for pile in &piles {
                    assert!(
                        !table.cards_in_pile(pile).contains(&id),
                        "{id}: pile-less but present in '{pile}'"
                    );
                }
            }
        }

        // Acyclic: walking up from any card reaches an unstacked root
        // without revisiting the start.
        let root = table.stack_root(id);
        assert!(
            table.card(root).stacked_on.is_none(),
            "{id}: stack root {root} is itself stacked"
        );

        // At rest a stack lives in one pile (or none at all).
        if card.stacked_on.is_some() {
            assert_eq!(
                card.pile, table.card(root).pile,
                "{id}: does not share its root {root}'s pile"
            );
        }
    }

    for pile in &piles {
        for &id in table.cards_in_pile(pile) {
            assert_eq!(
                table.card(id).pile.as_ref(),
                Some(pile),
                "{id}: listed in '{pile}' without matching pile field"
            );
        }
    }
}

// =============================================================================
// Directed sequences
// =============================================================================

#[test]
fn test_invariants_through_a_scripted_game() {
    let (mut table, ids) = setup(6);
    let [p0, p1, _] = pile_names();

    table.put_card_on_pile(ids[0], &p0);
    check_invariants(&table, &ids);

    table.stack_onto(ids[1], ids[0]).unwrap();
    table.stack_onto(ids[2], ids[1]).unwrap();
    check_invariants(&table, &ids);

    table.put_stack_on_pile(ids[0], &p1);
    check_invariants(&table, &ids);

    table.insert_stack_after(ids[1], ids[0]);
    check_invariants(&table, &ids);

    table.put_card_on_pile(ids[3], &p1);
    table.insert_card_after(ids[4], ids[3]);
    check_invariants(&table, &ids);

    table.unstack_all_from(ids[0]);
    check_invariants(&table, &ids);

    table.remove_from_pile(ids[0]);
    check_invariants(&table, &ids);

    table.shuffle_pile(&p1);
    check_invariants(&table, &ids);
}

#[test]
fn test_refused_moves_leave_state_untouched() {
    let (mut table, ids) = setup(3);
    let [p0, _, _] = pile_names();

    table.put_card_on_pile(ids[0], &p0);
    table.stack_onto(ids[1], ids[0]).unwrap();
    table.stack_onto(ids[2], ids[1]).unwrap();
    let before: Vec<CardId> = table.cards_in_pile(&p0).to_vec();

    // Self-stack: hard error, no mutation.
    assert!(table.stack_onto(ids[1], ids[1]).is_err());
    // Descendant anchors: reported no-ops.
    table.stack_onto(ids[0], ids[2]).unwrap();
    table.insert_stack_after(ids[0], ids[2]);
    table.insert_card_after(ids[0], ids[0]);

    assert_eq!(table.cards_in_pile(&p0), before.as_slice());
    check_invariants(&table, &ids);
}

// =============================================================================
// Randomized sequences
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn random_op_sequences_preserve_invariants(
        ops in proptest::collection::vec((0u8..10, 0usize..8, 0usize..8), 1..50)
    ) {
        let (mut table, ids) = setup(8);
        let piles = pile_names();

        for (op, a, b) in ops {
            let ca = ids[a];
            let cb = ids[b];
            match op {
                0 => table.put_card_on_pile(ca, &piles[b % 3]),
                1 => table.put_stack_on_pile(ca, &piles[b % 3]),
                2 => {
                    let result = table.stack_onto(ca, cb);
                    prop_assert_eq!(result.is_err(), ca == cb);
                }
                3 => table.insert_stack_after(ca, cb),
                4 => table.insert_card_after(ca, cb),
                5 => table.unstack_card(ca),
                6 => table.unstack_all_from(ca),
                7 => table.remove_from_pile(ca),
                8 => table.remove_stack_from_pile(ca),
                9 => table.shuffle_pile(&piles[a % 3]),
                _ => unreachable!(),
            }
            check_invariants(&table, &ids);
        }
    }

    #[test]
    fn shuffle_is_always_a_permutation(
        deal in proptest::collection::vec(0usize..3, 4..20),
        seed in 0u64..1000,
    ) {
        let mut table = Table::with_seed(library(), seed);
        for pile in pile_names() {
            table.create_pile(pile).unwrap();
        }
        let piles = pile_names();

        let mut ids = Vec::new();
        for pile_idx in deal {
            let c = table.create_card(&TypeId::new("t"), false).unwrap();
            table.put_card_on_pile(c, &piles[pile_idx]);
            ids.push(c);
        }

        let mut before: Vec<CardId> = table.cards_in_pile(&piles[0]).to_vec();
        table.shuffle_pile(&piles[0]);
        let mut after: Vec<CardId> = table.cards_in_pile(&piles[0]).to_vec();

        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
        check_invariants(&table, &ids);
    }
}
