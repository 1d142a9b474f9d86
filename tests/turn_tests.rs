//! Turn cycling, the end-condition latch and end-of-game timing.

use jade_banquet::core::{create_initial_state, GameRng, GameState, PlayerId};
use jade_banquet::rules::{EndCondition, GameResult};
use jade_banquet::zones::Slot;

fn drain_level_two(state: &mut GameState) {
    while state.reward_deck.take_first_of_level(2).is_some() {}
}

#[test]
fn test_four_player_cycle() {
    let mut state = create_initial_state(4, &mut GameRng::new(42));
    let mut visited = vec![state.current_player];
    let mut rounds = vec![state.round];

    for _ in 0..8 {
        state.advance_turn();
        visited.push(state.current_player);
        rounds.push(state.round);
    }

    let ids: Vec<_> = visited.iter().map(ToString::to_string).collect();
    assert_eq!(ids, ["0", "1", "2", "3", "0", "1", "2", "3", "0"]);
    assert_eq!(rounds, [1, 1, 1, 1, 2, 2, 2, 2, 3]);
}

#[test]
fn test_latch_never_moves() {
    let mut state = create_initial_state(3, &mut GameRng::new(7));
    state.advance_turn();
    drain_level_two(&mut state);

    state.advance_turn();
    let latched = state.end_condition;
    assert_eq!(latched, EndCondition::TriggeredAt(1));

    for _ in 0..12 {
        state.advance_turn();
        assert_eq!(state.end_condition, latched);
    }
}

#[test]
fn test_latch_waits_for_next_advance() {
    let mut state = create_initial_state(2, &mut GameRng::new(7));
    drain_level_two(&mut state);

    // The check runs inside advance_turn, not when the pile empties.
    assert_eq!(state.end_condition, EndCondition::Pending);
    state.advance_turn();
    assert!(state.end_condition.is_triggered());
}

/// Three players, latch mid-round, then play out to the end.
#[test]
fn test_three_player_endgame_timing() {
    let mut state = create_initial_state(3, &mut GameRng::new(11));
    for _ in 0..4 {
        state.advance_turn();
    }
    // Round 2, player "1" to act.
    assert_eq!(state.round, 2);
    drain_level_two(&mut state);
    state.advance_turn();

    let latch = state.end_condition.triggered_at().unwrap();
    assert_eq!(latch, 2);
    assert_eq!(state.current_player, PlayerId::new(2));

    let mut turns = 0;
    while !state.is_game_over() {
        assert!(state.round < latch + 3 || state.current_player != PlayerId::FIRST);
        state.advance_turn();
        turns += 1;
        assert!(turns < 100, "game never ended");
    }

    assert_eq!(state.current_player, PlayerId::FIRST);
    assert_eq!(state.round - latch, 3);
    // From seat "2" of round 2 to the start of round 5.
    assert_eq!(turns, 7);
}

#[test]
fn test_latch_at_round_boundary() {
    let mut state = create_initial_state(2, &mut GameRng::new(5));
    state.advance_turn();
    drain_level_two(&mut state);
    state.advance_turn();

    assert_eq!(state.end_condition, EndCondition::TriggeredAt(2));
    assert_eq!(state.current_player, PlayerId::FIRST);
    assert!(!state.is_game_over());

    for _ in 0..3 {
        state.advance_turn();
        assert!(!state.is_game_over());
    }
    state.advance_turn();
    assert_eq!(state.round, 4);
    assert!(state.is_game_over());
}

#[test]
fn test_game_over_only_at_seat_zero() {
    let mut state = create_initial_state(2, &mut GameRng::new(5));
    state.end_condition = EndCondition::TriggeredAt(1);
    state.round = 10;

    state.current_player = PlayerId::new(1);
    assert!(!state.is_game_over());
    state.current_player = PlayerId::FIRST;
    assert!(state.is_game_over());
}

#[test]
fn test_full_game_to_result() {
    let mut state = create_initial_state(3, &mut GameRng::new(77));
    state.players[PlayerId::new(1)].offering_area.push(Slot::new("offer-0"));
    drain_level_two(&mut state);

    while !state.is_game_over() {
        assert_eq!(state.game_result(), None);
        state.advance_turn();
    }

    assert_eq!(state.game_result(), Some(GameResult::Winner(PlayerId::new(1))));
}

#[test]
fn test_twelve_players_use_string_order() {
    let mut state = create_initial_state(12, &mut GameRng::new(1));
    let mut seen = Vec::new();
    for _ in 0..12 {
        state.advance_turn();
        seen.push(state.current_player.to_string());
    }
    assert_eq!(seen, ["1", "10", "11", "2", "3", "4", "5", "6", "7", "8", "9", "0"]);
    assert_eq!(state.round, 2);
}
