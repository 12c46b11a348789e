use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentBinding};
use crate::cards::Card;
use crate::config::{GameConfig, FLOP_SIZE, MAX_COMMUNITY_CARDS};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{GameState, PlayerSnapshot};
use crate::hand::{evaluate_strength, HandStrength};
use crate::history::{Event, HistoryLog};
use crate::player::{Player, PlayerAction, PlayerId};
use crate::pot::{split_pot, Payout};

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Where the current hand stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandPhase {
    /// Reset done, no cards dealt.
    PreDeal,
    /// Hole cards dealt; `round` is the next betting round to play.
    Betting { round: usize },
    /// All betting rounds played.
    Showdown,
    /// Pot paid out and history closed.
    Settled,
}

/// Outcome of a completed hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    /// Winners in seating order.
    pub winners: Vec<PlayerId>,
    pub strength: HandStrength,
    pub pot: u32,
    pub payouts: Vec<Payout>,
}

/// Round engine: owns the deck, the seats and the history of one table,
/// and drives a hand from blinds to showdown.
///
/// # Examples
///
/// ```
/// use pokersim_engine::agent::{Agent, AgentError};
/// use pokersim_engine::config::GameConfig;
/// use pokersim_engine::engine::Engine;
/// use pokersim_engine::game::GameState;
/// use pokersim_engine::player::{Decision, PlayerId};
///
/// struct Checker;
/// impl Agent for Checker {
///     fn decide(&mut self, _: PlayerId, _: &GameState, _: u32) -> Result<Decision, AgentError> {
///         Ok(Decision::check())
///     }
///     fn name(&self) -> &str { "Checker" }
/// }
///
/// let cfg = GameConfig { num_players: 3, ..GameConfig::default() };
/// let mut engine = Engine::new(cfg, Some(7), Box::new(Checker)).unwrap();
/// let showdown = engine.play().unwrap();
/// assert!(!showdown.winners.is_empty());
/// assert_eq!(engine.community_cards().len(), 5);
/// assert_eq!(engine.total_chips(), 3 * 1_000);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: GameConfig,
    seed: u64,
    deck: Deck,
    /// Current seating order; rotates by one after every round.
    players: Vec<Player>,
    agents: AgentBinding,
    pot: u32,
    community: Vec<Card>,
    history: HistoryLog,
    phase: HandPhase,
    last_showdown: Option<Showdown>,
}

impl Engine {
    /// Binds a single agent to every seat.
    pub fn new(
        config: GameConfig,
        seed: Option<u64>,
        agent: Box<dyn Agent>,
    ) -> Result<Self, GameError> {
        Self::build(config, seed, AgentBinding::Shared(agent))
    }

    /// Binds `agents[i]` to player `i`.
    pub fn with_agents(
        config: GameConfig,
        seed: Option<u64>,
        agents: Vec<Box<dyn Agent>>,
    ) -> Result<Self, GameError> {
        Self::build(config, seed, AgentBinding::PerSeat(agents))
    }

    fn build(config: GameConfig, seed: Option<u64>, agents: AgentBinding) -> Result<Self, GameError> {
        config.validate()?;
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let mut engine = Self {
            deck: Deck::new_with_seed(seed),
            seed,
            players: Vec::new(),
            agents: AgentBinding::PerSeat(Vec::new()),
            pot: 0,
            community: Vec::with_capacity(MAX_COMMUNITY_CARDS),
            history: HistoryLog::new(),
            phase: HandPhase::PreDeal,
            last_showdown: None,
            config,
        };
        engine.init(agents)?;
        Ok(engine)
    }

    /// Seats fresh players with the starting stack, binds them to `agents`
    /// and resets the table.
    pub fn init(&mut self, agents: AgentBinding) -> Result<(), GameError> {
        if let Some(n) = agents.seats() {
            if n != self.config.num_players {
                return Err(GameError::InvalidConfig(format!(
                    "{} agents bound for {} players",
                    n, self.config.num_players
                )));
            }
        }
        self.agents = agents;
        self.players = (0..self.config.num_players)
            .map(|id| Player::new(id, self.config.starting_stack))
            .collect();
        self.reset();
        Ok(())
    }

    /// Clears the pot, board, hands and history and restores a full,
    /// shuffled deck. Stacks and seating order carry over.
    pub fn reset(&mut self) {
        self.pot = 0;
        self.community.clear();
        self.deck.reset();
        self.deck.shuffle();
        for p in &mut self.players {
            p.reset_for_hand();
        }
        self.history.reset();
        self.phase = HandPhase::PreDeal;
        self.last_showdown = None;
    }

    /// Shuffles and deals two hole cards to every seat in seating order.
    pub fn deal_cards(&mut self) -> Result<(), GameError> {
        if self.phase != HandPhase::PreDeal {
            return Err(GameError::HandNotReady);
        }
        self.deck.shuffle();
        for p in &mut self.players {
            let a = self.deck.draw()?;
            let b = self.deck.draw()?;
            p.deal([a, b]);
        }
        self.phase = HandPhase::Betting { round: 0 };
        tracing::debug!(players = self.players.len(), "hole cards dealt");
        Ok(())
    }

    /// Plays betting round `round`: blinds on round 0, one decision per seat
    /// that can still act, the history entry, the board cards, then the
    /// seat rotation.
    pub fn play_round(&mut self, round: usize) -> Result<(), GameError> {
        if self.phase != (HandPhase::Betting { round }) {
            return Err(GameError::HandNotReady);
        }
        let snapshot = self.state();
        if round == 0 {
            self.post_blinds()?;
        }

        let attempts = self.config.max_decision_attempts;
        let mut round_min_bet = 0u32;
        let mut events = Vec::with_capacity(self.players.len());
        for seat in 0..self.players.len() {
            if self.contenders() <= 1 {
                tracing::debug!(round, "single contender left; skipping decisions");
                break;
            }
            if !self.players[seat].can_act() {
                continue;
            }
            let min_bet = match (round, seat) {
                (0, 0) => self.config.small_blind,
                (0, 1) => self.config.big_blind,
                _ => round_min_bet,
            };
            let state = self.state();
            let id = self.players[seat].id();
            let agent = self
                .agents
                .agent_mut(id)
                .ok_or_else(|| GameError::InvalidConfig(format!("no agent bound to player {}", id)))?;
            let validated = self.players[seat].make_decision(agent, &state, min_bet, attempts);
            if let Some(adj) = validated.adjustment {
                tracing::warn!(player = id, adjustment = ?adj, "decision adjusted");
            }
            let decision = validated.decision;
            let player = &mut self.players[seat];
            if decision.action.moves_chips() {
                player.bet(decision.amount)?;
                self.pot += decision.amount;
            } else if decision.action == PlayerAction::Fold {
                player.fold();
            }
            round_min_bet = round_min_bet.max(decision.amount);
            tracing::debug!(
                round,
                player = id,
                action = ?decision.action,
                amount = decision.amount,
                pot = self.pot,
                "decision applied"
            );
            events.push(Event {
                player: id,
                action: decision.action,
                amount: decision.amount,
            });
        }
        self.history.add(round, snapshot, events);

        let reveal = if round == 0 { FLOP_SIZE } else { 1 };
        let reveal = reveal.min(MAX_COMMUNITY_CARDS - self.community.len());
        let revealed = self.deck.draw_n(reveal)?;
        self.community.extend(revealed);
        if reveal > 0 {
            tracing::debug!(round, board = ?self.community, "community cards revealed");
        }

        self.players.rotate_left(1);
        self.phase = if round + 1 >= self.config.max_rounds {
            HandPhase::Showdown
        } else {
            HandPhase::Betting { round: round + 1 }
        };
        Ok(())
    }

    fn post_blinds(&mut self) -> Result<(), GameError> {
        let blinds = [self.config.small_blind, self.config.big_blind];
        for (seat, blind) in blinds.into_iter().enumerate() {
            let Some(p) = self.players.get_mut(seat) else {
                continue;
            };
            let amount = blind.min(p.stack());
            p.bet(amount)?;
            self.pot += amount;
            tracing::debug!(player = p.id(), amount, "blind posted");
        }
        Ok(())
    }

    fn contenders(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded()).count()
    }

    fn showdown_strengths(&self) -> Result<(Vec<PlayerId>, HandStrength), GameError> {
        let mut eligible: Vec<&Player> = self.players.iter().filter(|p| !p.is_folded()).collect();
        if eligible.is_empty() {
            eligible = self.players.iter().collect();
        }
        let mut best: Option<HandStrength> = None;
        let mut winners = Vec::new();
        for p in eligible {
            let s = evaluate_strength(p.hole_cards(), &self.community, self.config.evaluation)?;
            match best.map(|b| s.cmp(&b)) {
                None | Some(Ordering::Greater) => {
                    best = Some(s);
                    winners = vec![p.id()];
                }
                Some(Ordering::Equal) => winners.push(p.id()),
                Some(Ordering::Less) => {}
            }
        }
        let best = best.ok_or(GameError::HandNotReady)?;
        Ok((winners, best))
    }

    /// Players sharing the single best hand among those who did not fold,
    /// in seating order.
    pub fn determine_winner(&self) -> Result<Vec<PlayerId>, GameError> {
        self.showdown_strengths().map(|(w, _)| w)
    }

    /// Plays a complete hand from the deal to the payout.
    ///
    /// On any error the stacks are restored to their pre-hand values and the
    /// table is reset, so no chips are left in an undefined pot.
    pub fn play(&mut self) -> Result<Showdown, GameError> {
        if self.phase != HandPhase::PreDeal {
            return Err(GameError::HandNotReady);
        }
        let before: Vec<(PlayerId, u32)> = self.players.iter().map(|p| (p.id(), p.stack())).collect();
        match self.run_hand() {
            Ok(showdown) => Ok(showdown),
            Err(e) => {
                tracing::warn!(error = %e, "hand aborted; restoring stacks");
                for (id, stack) in before {
                    if let Some(p) = self.players.iter_mut().find(|p| p.id() == id) {
                        p.set_stack(stack);
                    }
                }
                self.reset();
                Err(e)
            }
        }
    }

    fn run_hand(&mut self) -> Result<Showdown, GameError> {
        self.deal_cards()?;
        for round in 0..self.config.max_rounds {
            self.play_round(round)?;
        }
        let (winners, strength) = self.showdown_strengths()?;
        let pot = self.pot;
        let payouts = split_pot(pot, &winners);
        for payout in &payouts {
            if let Some(p) = self.players.iter_mut().find(|p| p.id() == payout.player) {
                p.add_chips(payout.amount);
            }
        }
        self.pot = 0;
        self.history.close();
        self.phase = HandPhase::Settled;
        tracing::info!(
            winners = ?winners,
            category = %strength.category,
            pot,
            "hand settled"
        );
        let showdown = Showdown {
            winners,
            strength,
            pot,
            payouts,
        };
        self.last_showdown = Some(showdown.clone());
        Ok(showdown)
    }

    /// Snapshot of the table as it stands.
    pub fn state(&self) -> GameState {
        let round = match self.phase {
            HandPhase::Betting { round } => round,
            HandPhase::PreDeal => 0,
            HandPhase::Showdown | HandPhase::Settled => self.config.max_rounds,
        };
        GameState {
            round,
            big_blind: self.config.big_blind,
            small_blind: self.config.small_blind,
            pot: self.pot,
            community_cards: self.community.clone(),
            players_state: self.players.iter().map(PlayerSnapshot::from).collect(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn phase(&self) -> HandPhase {
        self.phase
    }
    /// Seats in current seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
    pub fn last_showdown(&self) -> Option<&Showdown> {
        self.last_showdown.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Stacks plus pot; constant across a hand.
    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.stack())).sum::<u64>() + u64::from(self.pot)
    }

    /// Stacks indexed by player id.
    pub fn stacks_by_id(&self) -> Vec<u32> {
        let mut stacks = vec![0; self.players.len()];
        for p in &self.players {
            if let Some(s) = stacks.get_mut(p.id()) {
                *s = p.stack();
            }
        }
        stacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentError;
    use crate::cards::parse_cards;
    use crate::player::Decision;

    struct Checker;
    impl Agent for Checker {
        fn decide(&mut self, _: PlayerId, _: &GameState, _: u32) -> Result<Decision, AgentError> {
            Ok(Decision::check())
        }
        fn name(&self) -> &str {
            "Checker"
        }
    }

    fn engine(players: usize) -> Engine {
        let cfg = GameConfig {
            num_players: players,
            ..GameConfig::default()
        };
        Engine::new(cfg, Some(1), Box::new(Checker)).unwrap()
    }

    #[test]
    fn failed_hand_restores_stacks() {
        let mut eng = engine(2);
        // leave just enough for hole cards so the flop cannot be dealt
        eng.deck.draw_n(48).unwrap();
        let err = eng.play().unwrap_err();
        assert_eq!(err, GameError::DeckExhausted);
        assert_eq!(eng.stacks_by_id(), vec![1_000, 1_000]);
        assert_eq!(eng.pot(), 0);
        assert_eq!(eng.phase(), HandPhase::PreDeal);
        assert_eq!(eng.deck_remaining(), 52);
    }

    #[test]
    fn board_playing_for_everyone_is_a_tie() {
        let mut eng = engine(3);
        let holes = ["2c 3d", "2d 3c", "2s 3s"];
        for (p, h) in eng.players.iter_mut().zip(holes) {
            let cards = parse_cards(h).unwrap();
            p.deal([cards[0], cards[1]]);
        }
        eng.community = parse_cards("Th Jh Qh Kh Ah").unwrap();
        // off-suit hole cards break the flush; same ranks give equal straights
        let winners = eng.determine_winner().unwrap();
        assert_eq!(winners, vec![0, 1, 2]);
        let payouts = split_pot(100, &winners);
        let amounts: Vec<u32> = payouts.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![34, 33, 33]);
    }

    #[test]
    fn folded_players_cannot_win() {
        let mut eng = engine(2);
        let strong = parse_cards("Ac Ad").unwrap();
        let weak = parse_cards("2c 7d").unwrap();
        eng.players[0].deal([strong[0], strong[1]]);
        eng.players[1].deal([weak[0], weak[1]]);
        eng.community = parse_cards("9h 4s Jd").unwrap();
        assert_eq!(eng.determine_winner().unwrap(), vec![0]);
        eng.players[0].fold();
        assert_eq!(eng.determine_winner().unwrap(), vec![1]);
    }
}
