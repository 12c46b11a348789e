mod common;

use common::{all_in, check, config};
use pokersim_engine::config::GameConfig;
use pokersim_engine::engine::{Engine, HandPhase};
use pokersim_engine::errors::GameError;

#[test]
fn new_engine_seats_players_with_starting_stack() {
    let eng = Engine::new(config(4), Some(1234), check()).unwrap();
    let stacks: Vec<u32> = eng.players().iter().map(|p| p.stack()).collect();
    assert_eq!(stacks, vec![1_000; 4]);
    let names: Vec<&str> = eng.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Player_0", "Player_1", "Player_2", "Player_3"]);
    assert_eq!(eng.phase(), HandPhase::PreDeal);
    assert_eq!(eng.deck_remaining(), 52);
    assert_eq!(eng.pot(), 0);
}

#[test]
fn invalid_configs_are_rejected_at_construction() {
    let bad = [
        GameConfig { num_players: 1, ..GameConfig::default() },
        GameConfig { num_players: 24, ..GameConfig::default() },
        GameConfig { big_blind: 0, ..GameConfig::default() },
        GameConfig { max_rounds: 0, ..GameConfig::default() },
        GameConfig { starting_stack: 0, ..GameConfig::default() },
        GameConfig { max_decision_attempts: 0, ..GameConfig::default() },
    ];
    for cfg in bad {
        let err = Engine::new(cfg.clone(), None, check()).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)), "{:?} -> {:?}", cfg, err);
    }
    assert!(Engine::new(config(23), None, check()).is_ok());
}

#[test]
fn per_seat_agents_must_match_player_count() {
    let err = Engine::with_agents(config(3), None, vec![check(), check()]).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
    assert!(Engine::with_agents(config(2), None, vec![check(), check()]).is_ok());
}

#[test]
fn deal_gives_two_distinct_cards_per_seat() {
    let mut eng = Engine::new(config(6), Some(5), check()).unwrap();
    eng.deal_cards().unwrap();
    assert_eq!(eng.phase(), HandPhase::Betting { round: 0 });
    assert_eq!(eng.deck_remaining(), 52 - 12);
    let mut seen = std::collections::HashSet::new();
    for p in eng.players() {
        assert_eq!(p.hole_cards().len(), 2);
        for c in p.hole_cards() {
            assert!(seen.insert(*c));
        }
    }
    // dealing twice is a phase error
    assert_eq!(eng.deal_cards(), Err(GameError::HandNotReady));
}

#[test]
fn rounds_must_be_played_in_order() {
    let mut eng = Engine::new(config(2), Some(5), check()).unwrap();
    assert_eq!(eng.play_round(0), Err(GameError::HandNotReady));
    eng.deal_cards().unwrap();
    assert_eq!(eng.play_round(1), Err(GameError::HandNotReady));
    eng.play_round(0).unwrap();
    assert_eq!(eng.phase(), HandPhase::Betting { round: 1 });
}

#[test]
fn same_seed_replays_the_same_hand() {
    let mut e1 = Engine::new(config(4), Some(42), check()).unwrap();
    let mut e2 = Engine::new(config(4), Some(42), check()).unwrap();
    let s1 = e1.play().unwrap();
    let s2 = e2.play().unwrap();
    assert_eq!(s1, s2);
    assert_eq!(e1.community_cards(), e2.community_cards());
    assert_eq!(e1.history(), e2.history());
}

#[test]
fn reset_twice_yields_identical_empty_state() {
    let mut eng = Engine::new(config(3), Some(8), check()).unwrap();
    eng.play().unwrap();
    eng.reset();
    let a = eng.state();
    eng.reset();
    let b = eng.state();
    assert_eq!(a, b);
    assert_eq!(b.pot, 0);
    assert!(b.community_cards.is_empty());
    assert!(b.players_state.iter().all(|p| p.cards.is_empty()));
    assert!(eng.history().is_empty());
    assert_eq!(eng.deck_remaining(), 52);
    assert_eq!(eng.phase(), HandPhase::PreDeal);
}

#[test]
fn play_requires_a_reset_between_hands() {
    let mut eng = Engine::new(config(2), Some(3), check()).unwrap();
    eng.play().unwrap();
    assert_eq!(eng.phase(), HandPhase::Settled);
    assert_eq!(eng.play(), Err(GameError::HandNotReady));
    eng.reset();
    assert!(eng.play().is_ok());
}

#[test]
fn table_chips_beyond_one_pot_are_rejected() {
    let cfg = GameConfig {
        num_players: 2,
        starting_stack: 3_000_000_000,
        ..GameConfig::default()
    };
    let err = Engine::new(cfg, Some(1), all_in()).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)), "{:?}", err);
}

#[test]
fn all_in_at_the_chip_limit_conserves_chips() {
    // 3 x 1_431_655_765 == u32::MAX
    let cfg = GameConfig {
        num_players: 3,
        starting_stack: 1_431_655_765,
        ..GameConfig::default()
    };
    let mut eng = Engine::new(cfg, Some(11), all_in()).unwrap();
    let showdown = eng.play().unwrap();
    assert_eq!(showdown.pot, u32::MAX);
    assert_eq!(eng.total_chips(), u64::from(u32::MAX));
    assert_eq!(eng.pot(), 0);
}
