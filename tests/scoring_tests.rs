//! Scoring properties and standings.

use proptest::prelude::*;

use jade_banquet::cards::{AttrSet, Attribute, Attributes, Card, CardCatalog, Color, Shape, Temperature};
use jade_banquet::core::{create_initial_state, GameRng, PlayerId, PlayerState};
use jade_banquet::scoring::{final_score, pairing_score, slot_score, standings};
use jade_banquet::zones::{Slot, WaitingSlot};

fn set_from_bits<A: Attribute>(bits: u8) -> AttrSet<A> {
    A::ALL
        .iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << *i) != 0)
        .map(|(_, v)| *v)
        .collect()
}

/// Strategy: any combination of attribute values.
fn attributes_strategy() -> impl Strategy<Value = Attributes> {
    (0u8..8, 0u8..8, 0u8..4).prop_map(|(c, s, t)| Attributes {
        colors: set_from_bits::<Color>(c),
        shapes: set_from_bits::<Shape>(s),
        temperatures: set_from_bits::<Temperature>(t),
    })
}

proptest! {
    // Pairing score never exceeds the tableware's own value counts.
    #[test]
    fn pairing_within_bounds(ware in attributes_strategy(), food in attributes_strategy()) {
        let t = Card::tableware("t", "Plate", 1).with_attributes(ware);
        let s = Card::snack("s", "Snack").with_attributes(food);
        let score = pairing_score(&t, &s);
        let bound = ware.colors.len() + ware.shapes.len() + ware.temperatures.len();
        prop_assert!(score as usize <= bound, "score={score} bound={bound}");
    }

    // Overlap does not depend on which side is the plate.
    #[test]
    fn pairing_symmetric(a in attributes_strategy(), b in attributes_strategy()) {
        let t = Card::tableware("t", "Plate", 1).with_attributes(a);
        let s = Card::snack("s", "Snack").with_attributes(b);
        let t2 = Card::tableware("t2", "Plate", 1).with_attributes(b);
        let s2 = Card::snack("s2", "Snack").with_attributes(a);
        prop_assert_eq!(pairing_score(&t, &s), pairing_score(&t2, &s2));
    }

    // The total always equals its parts.
    #[test]
    fn total_matches_components(
        personal in prop::collection::vec((attributes_strategy(), attributes_strategy()), 0..6),
        offerings in 0usize..6,
        waiting_snacks in prop::collection::vec(0usize..3, 0..5),
        chalice in any::<bool>(),
    ) {
        let player = PlayerState {
            personal_area: personal
                .iter()
                .enumerate()
                .map(|(i, (w, f))| {
                    Slot::paired(
                        format!("p{i}"),
                        Card::tableware(format!("t{i}"), "Plate", 1).with_attributes(*w),
                        Card::snack(format!("s{i}"), "Snack").with_attributes(*f),
                    )
                })
                .collect(),
            offering_area: (0..offerings).map(|i| Slot::new(format!("o{i}"))).collect(),
            waiting_area: waiting_snacks
                .iter()
                .enumerate()
                .map(|(i, &n)| {
                    let mut slot = WaitingSlot::new(format!("w{i}"));
                    for k in 0..n {
                        slot.snacks.push(Card::snack(format!("w{i}-{k}"), "Snack"));
                    }
                    slot
                })
                .collect(),
            has_jade_chalice: chalice,
            ..PlayerState::default()
        };

        let score = final_score(&player);
        let expected_personal: u32 = player.personal_area.iter().map(slot_score).sum();
        let expected_offering = offerings as u32 * if chalice { 2 } else { 1 };
        let expected_penalty = waiting_snacks.iter().filter(|&&n| n > 0).count() as u32;

        prop_assert_eq!(score.personal_sum, expected_personal);
        prop_assert_eq!(score.offering_component, expected_offering);
        prop_assert_eq!(score.waiting_penalty_count, expected_penalty);
        prop_assert_eq!(
            score.total_score,
            i64::from(expected_personal) + i64::from(expected_offering) - 2 * i64::from(expected_penalty)
        );
    }
}

#[test]
fn test_standard_catalog_pairings_are_bounded() {
    let catalog = CardCatalog::standard();
    let snacks: Vec<_> = catalog.iter().filter(|c| c.is_snack()).collect();
    for ware in catalog.iter().filter(|c| c.is_tableware()) {
        for snack in &snacks {
            assert!(pairing_score(ware, snack) as usize <= ware.attributes.value_count());
        }
    }
}

#[test]
fn test_fresh_game_scores() {
    let state = create_initial_state(3, &mut GameRng::new(2));
    for (_, player) in state.players.iter() {
        // Only a dealt plate in the waiting area: nothing scores.
        assert_eq!(final_score(player).total_score, 0);
    }
}

#[test]
fn test_standings_order() {
    let mut state = create_initial_state(3, &mut GameRng::new(2));
    state.players[PlayerId::new(2)]
        .offering_area
        .extend([Slot::new("o0"), Slot::new("o1")]);
    state.players[PlayerId::new(0)]
        .waiting_area
        .push(WaitingSlot {
            id: "w-extra".into(),
            tableware: None,
            snacks: std::iter::once(Card::snack("loose", "Bun")).collect(),
        });

    let table = standings(&state);
    let order: Vec<_> = table.iter().map(|(id, _)| id.0).collect();
    assert_eq!(order, vec![2, 1, 0]);
    assert_eq!(table[0].1.total_score, 2);
    assert_eq!(table[2].1.total_score, -2);
}

#[test]
fn test_chalice_holder_scores_double() {
    let mut state = create_initial_state(2, &mut GameRng::new(4));
    for id in [PlayerId::new(0), PlayerId::new(1)] {
        state.players[id].offering_area.push(Slot::new("o0"));
    }
    state.jade_chalice_granted = true;
    state.players[PlayerId::new(1)].has_jade_chalice = true;

    let table = standings(&state);
    assert_eq!(table[0].0, PlayerId::new(1));
    assert_eq!(table[0].1.offering_component, 2);
    assert_eq!(table[1].1.offering_component, 1);
}

#[test]
fn test_single_value_example_from_rules() {
    let t = Card::tableware("t", "Cup", 1)
        .with_attributes(Attributes::single(Color::Red, Shape::Circle, Temperature::Warm));
    let s = Card::snack("s", "Bun").with_attributes(Attributes {
        colors: [Color::Red, Color::Green].into_iter().collect(),
        shapes: AttrSet::single(Shape::Circle),
        temperatures: AttrSet::single(Temperature::Cold),
    });
    assert_eq!(pairing_score(&t, &s), 2);
}
