mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{check, config, fold, Failing, Fixed};
use pokersim_engine::config::GameConfig;
use pokersim_engine::engine::{Engine, HandPhase};
use pokersim_engine::history::Event;
use pokersim_engine::player::{Decision, PlayerAction, PlayerStatus};

fn ids(state: &pokersim_engine::game::GameState) -> Vec<usize> {
    state.players_state.iter().map(|p| p.player).collect()
}

#[test]
fn checking_table_plays_four_rounds_and_conserves_chips() {
    let mut eng = Engine::new(config(3), Some(11), check()).unwrap();
    let showdown = eng.play().unwrap();

    assert_eq!(eng.phase(), HandPhase::Settled);
    assert_eq!(eng.community_cards().len(), 5);
    assert_eq!(eng.total_chips(), 3_000);
    assert_eq!(eng.pot(), 0);
    assert_eq!(showdown.pot, 30);
    let paid: u32 = showdown.payouts.iter().map(|p| p.amount).sum();
    assert_eq!(paid, 30);

    let log = eng.history();
    assert!(log.is_closed());
    assert_eq!(log.len(), 4);
    let rounds: Vec<usize> = log.get().iter().map(|e| e.round()).collect();
    assert_eq!(rounds, vec![0, 1, 2, 3]);

    // snapshot is taken before blinds
    assert_eq!(log.get()[0].state.pot, 0);
    assert_eq!(log.get()[1].state.pot, 30);
    assert_eq!(log.get()[1].state.community_cards.len(), 3);
    assert_eq!(log.get()[3].state.community_cards.len(), 5);

    // seating rotates left by one after every round
    assert_eq!(ids(&log.get()[0].state), vec![0, 1, 2]);
    assert_eq!(ids(&log.get()[1].state), vec![1, 2, 0]);
    assert_eq!(ids(&log.get()[2].state), vec![2, 0, 1]);
    assert_eq!(ids(&log.get()[3].state), vec![0, 1, 2]);

    for entry in log.get() {
        assert_eq!(entry.events.len(), 3);
        assert!(entry.events.iter().all(|e| e.action == PlayerAction::Check && e.amount == 0));
    }
}

#[test]
fn folds_leave_the_last_player_with_the_blinds() {
    let agents = vec![check(), fold(), fold()];
    let mut eng = Engine::with_agents(config(3), Some(21), agents).unwrap();
    let showdown = eng.play().unwrap();

    assert_eq!(showdown.winners, vec![0]);
    assert_eq!(eng.stacks_by_id(), vec![1_020, 980, 1_000]);
    assert_eq!(eng.player(1).unwrap().status(), PlayerStatus::Folded);

    let log = eng.history().get();
    assert_eq!(
        log[0].events,
        vec![
            Event { player: 0, action: PlayerAction::Check, amount: 0 },
            Event { player: 1, action: PlayerAction::Fold, amount: 0 },
            Event { player: 2, action: PlayerAction::Fold, amount: 0 },
        ]
    );
    // no one is asked once a single contender remains, but the board is dealt
    assert!(log[1..].iter().all(|e| e.events.is_empty()));
    assert_eq!(eng.community_cards().len(), 5);
}

#[test]
fn short_stack_is_forced_all_in() {
    let cfg = GameConfig {
        num_players: 2,
        starting_stack: 15,
        ..GameConfig::default()
    };
    let mut eng = Engine::new(cfg, Some(2), check()).unwrap();
    let showdown = eng.play().unwrap();

    let log = eng.history().get();
    // player 1 covers only 15 of the big blind and is all-in before acting
    assert_eq!(log[0].events, vec![Event { player: 0, action: PlayerAction::AllIn, amount: 5 }]);
    assert!(log[1..].iter().all(|e| e.events.is_empty()));
    assert_eq!(showdown.pot, 30);
    assert_eq!(eng.total_chips(), 30);
}

#[test]
fn oversized_bets_are_clamped_to_the_stack() {
    let agent = Box::new(Fixed(Decision::new(PlayerAction::Bet, 10_000)));
    let mut eng = Engine::new(config(2), Some(4), agent).unwrap();
    let showdown = eng.play().unwrap();

    let events = &eng.history().get()[0].events;
    assert_eq!(events[0], Event { player: 0, action: PlayerAction::Bet, amount: 990 });
    assert_eq!(events[1], Event { player: 1, action: PlayerAction::Bet, amount: 980 });
    assert_eq!(showdown.pot, 2_000);
    assert_eq!(eng.total_chips(), 2_000);
}

#[test]
fn fold_and_check_amounts_are_dropped() {
    let agent = Box::new(Fixed(Decision::new(PlayerAction::Check, 50)));
    let mut eng = Engine::new(config(2), Some(4), agent).unwrap();
    eng.play().unwrap();
    let events = &eng.history().get()[0].events;
    assert!(events.iter().all(|e| e.amount == 0));
    assert_eq!(eng.total_chips(), 2_000);
}

#[test]
fn unresponsive_agent_is_retried_then_folded() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut eng = Engine::new(config(2), Some(9), Box::new(Failing(calls.clone()))).unwrap();
    let showdown = eng.play().unwrap();

    // three attempts for player 0, then nobody else is asked
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(
        eng.history().get()[0].events,
        vec![Event { player: 0, action: PlayerAction::Fold, amount: 0 }]
    );
    assert_eq!(showdown.winners, vec![1]);
    assert_eq!(eng.stacks_by_id(), vec![990, 1_010]);
}

#[test]
fn folding_table_still_pays_out_the_pot() {
    let mut eng = Engine::new(config(2), Some(13), fold()).unwrap();
    let showdown = eng.play().unwrap();
    assert!(!showdown.winners.is_empty());
    assert_eq!(eng.total_chips(), 2_000);
    assert_eq!(eng.pot(), 0);
}

#[test]
fn rounds_beyond_the_river_reveal_nothing() {
    let cfg = GameConfig {
        num_players: 2,
        max_rounds: 7,
        ..GameConfig::default()
    };
    let mut eng = Engine::new(cfg, Some(6), check()).unwrap();
    eng.play().unwrap();
    assert_eq!(eng.community_cards().len(), 5);
    assert_eq!(eng.history().len(), 7);
    assert_eq!(eng.deck_remaining(), 52 - 4 - 5);
}

#[test]
fn agents_see_a_snapshot_with_their_own_cards() {
    use pokersim_engine::agent::{Agent, AgentError};
    use pokersim_engine::game::GameState;
    use pokersim_engine::player::PlayerId;

    struct Inspector(Arc<AtomicUsize>);
    impl Agent for Inspector {
        fn decide(&mut self, player: PlayerId, state: &GameState, _: u32) -> Result<Decision, AgentError> {
            let me = state
                .player(player)
                .ok_or_else(|| AgentError::NoDecision("not seated".into()))?;
            if me.cards.len() == 2 {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
            Ok(Decision::check())
        }
        fn name(&self) -> &str {
            "Inspector"
        }
    }

    let seen = Arc::new(AtomicUsize::new(0));
    let mut eng = Engine::new(config(3), Some(1), Box::new(Inspector(seen.clone()))).unwrap();
    eng.play().unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 3 * 4);
}
