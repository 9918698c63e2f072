use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{format_cards, Card};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_hand, HandStrength};
use crate::player::{Action, BetContext, Controller, Player};
use crate::rules::{resolve_action, Resolution};

/// Phases of one round, in play order. `RoundOver` doubles as the idle
/// state between rounds; `GameOver` is terminal for the whole session.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// First betting round, opened by the blinds
    PreDraw,
    /// Card exchange: each active seat discards and redraws once
    Draw,
    /// Second betting round, opened at zero
    PostDraw,
    /// Hands revealed, pot resolved
    Showdown,
    RoundOver,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::PreDraw => "pre-draw betting",
            Phase::Draw => "draw",
            Phase::PostDraw => "post-draw betting",
            Phase::Showdown => "showdown",
            Phase::RoundOver => "round over",
            Phase::GameOver => "game over",
        };
        f.write_str(s)
    }
}

/// One opposing seat as the presentation layer may show it.
#[derive(Debug, Clone)]
pub struct OpponentView {
    pub name: String,
    pub stack: u32,
    pub active: bool,
}

/// Read-only snapshot for the presentation layer, centered on the first
/// human seat. Bot-only tables get an empty hand and a zero stack.
#[derive(Debug, Clone)]
pub struct TableView {
    pub phase: Phase,
    pub pot: u32,
    pub awaiting_human: bool,
    pub to_call: u32,
    pub min_raise_total: u32,
    pub hand: Vec<Card>,
    pub stack: u32,
    pub opponents: Vec<OpponentView>,
}

/// Outcome of the most recently completed round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub winners: Vec<String>,
    /// Label of the winning hand; `None` when everyone else folded.
    pub winning_hand: Option<&'static str>,
    /// Pot size that was distributed.
    pub pot: u32,
}

/// The round state machine for five-card draw.
///
/// Owns the seats, the deck, and the pot for the lifetime of a session.
/// `start_round` seats everyone still funded, collects blinds, deals, and
/// drives turn advancement until either the round resolves or a human seat
/// must act; `apply_action` / `apply_exchange` feed the human decision back
/// in and resume. Automated seats are consulted synchronously through their
/// [`crate::player::BotStrategy`].
///
/// # Examples
///
/// ```
/// use fivedraw_engine::engine::{Phase, RoundEngine};
/// use fivedraw_engine::player::Player;
///
/// let seats = vec![Player::human("Alice", 1000), Player::human("Bob", 1000)];
/// let mut round = RoundEngine::new(seats, 25, 50, 7);
/// round.start_round().unwrap();
///
/// // Blinds are posted and the first seat is on turn.
/// assert_eq!(round.phase(), Phase::PreDraw);
/// assert_eq!(round.pot(), 75);
/// assert!(round.awaiting_human());
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    players: Vec<Player>,
    small_blind: u32,
    big_blind: u32,
    rng: ChaCha20Rng,
    deck: Deck,
    phase: Phase,
    // seat numbers still in the hand, in seat order; shrinks on folds
    active: Vec<usize>,
    pot: u32,
    // committed-this-phase and acted-this-phase, indexed by seat number
    bets: Vec<u32>,
    acted: Vec<bool>,
    current_bet: u32,
    min_raise: u32,
    last_raiser: Option<usize>,
    // index into `active`, re-validated against its length before use
    turn: usize,
    rounds_played: u32,
    log: Vec<String>,
    last_result: Option<RoundResult>,
}

impl RoundEngine {
    pub fn new(players: Vec<Player>, small_blind: u32, big_blind: u32, seed: u64) -> Self {
        let n = players.len();
        Self {
            players,
            small_blind,
            big_blind,
            rng: ChaCha20Rng::seed_from_u64(seed),
            deck: Deck::new(),
            phase: Phase::RoundOver,
            active: Vec::with_capacity(n),
            pot: 0,
            bets: vec![0; n],
            acted: vec![false; n],
            current_bet: 0,
            min_raise: big_blind,
            last_raiser: None,
            turn: 0,
            rounds_played: 0,
            log: Vec::new(),
            last_result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Stacks plus pot; constant across every action inside a round.
    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| p.stack() as u64).sum::<u64>() + self.pot as u64
    }

    /// True exactly when turn advancement is suspended on a human seat.
    pub fn awaiting_human(&self) -> bool {
        self.human_turn_in_betting() || self.human_turn_in_draw()
    }

    /// Begins a new round: seats everyone still funded, collects blinds,
    /// deals five cards each, and runs turn advancement until a human must
    /// act or the round resolves. With fewer than two funded seats the
    /// session transitions to [`Phase::GameOver`] instead.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::RoundOver => {}
            Phase::GameOver => return Err(GameError::GameOver),
            _ => return Err(GameError::RoundInProgress),
        }
        self.last_result = None;
        self.active = (0..self.players.len())
            .filter(|&i| self.players[i].stack() > 0)
            .collect();
        if self.active.len() < 2 {
            self.enter_game_over();
            return Ok(());
        }
        self.log
            .push(format!("=== Round {} ===", self.rounds_played + 1));
        self.pot = 0;
        for i in 0..self.players.len() {
            self.bets[i] = 0;
            self.acted[i] = false;
        }
        // every seat, so a broke player does not keep last round's hand
        for player in &mut self.players {
            player.reset_for_round();
        }
        self.deck = Deck::new();
        self.deck.shuffle(&mut self.rng);

        let sb_seat = self.active[0];
        let bb_seat = self.active[1 % self.active.len()];
        let sb_paid = self.commit(sb_seat, self.small_blind);
        self.log.push(format!(
            "{} posts small blind {}",
            self.players[sb_seat].name(),
            sb_paid
        ));
        let bb_paid = self.commit(bb_seat, self.big_blind);
        self.log.push(format!(
            "{} posts big blind {}",
            self.players[bb_seat].name(),
            bb_paid
        ));

        for &seat in &self.active {
            for _ in 0..5 {
                let card = self.deck.draw().ok_or(GameError::DeckExhausted)?;
                self.players[seat].take_card(card);
            }
        }

        self.current_bet = self.big_blind;
        self.min_raise = self.big_blind;
        self.last_raiser = Some(bb_seat);
        self.turn = 2 % self.active.len();
        self.phase = Phase::PreDraw;
        self.advance()
    }

    /// Applies the pending human betting action and resumes turn
    /// advancement.
    ///
    /// # Errors
    ///
    /// [`GameError::NoPendingAction`] unless the engine is suspended on a
    /// human seat in a betting phase.
    pub fn apply_action(&mut self, action: Action) -> Result<(), GameError> {
        if !self.human_turn_in_betting() {
            return Err(GameError::NoPendingAction);
        }
        self.apply_bet(action);
        self.advance()
    }

    /// Applies the pending human exchange selection and resumes turn
    /// advancement. Out-of-range or duplicate slots are dropped with a log
    /// entry rather than rejected.
    ///
    /// # Errors
    ///
    /// [`GameError::NoPendingExchange`] unless the engine is suspended on a
    /// human seat in the draw phase.
    pub fn apply_exchange(&mut self, indices: &[usize]) -> Result<(), GameError> {
        if !self.human_turn_in_draw() {
            return Err(GameError::NoPendingExchange);
        }
        self.exchange_at_turn(indices)?;
        self.advance()
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> TableView {
        let human = self.players.iter().position(|p| p.is_human());
        let (hand, stack) = match human {
            Some(i) => (self.players[i].hand().to_vec(), self.players[i].stack()),
            None => (Vec::new(), 0),
        };
        let to_call = match human {
            Some(i) => self.current_bet.saturating_sub(self.bets[i]),
            None => self.current_bet,
        };
        let opponents = self
            .players
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != human)
            .map(|(i, p)| OpponentView {
                name: p.name().to_string(),
                stack: p.stack(),
                active: self.active.contains(&i),
            })
            .collect();
        TableView {
            phase: self.phase,
            pot: self.pot,
            awaiting_human: self.awaiting_human(),
            to_call,
            min_raise_total: self.current_bet + self.min_raise,
            hand,
            stack,
            opponents,
        }
    }

    // The driver loop: runs bot turns and phase transitions until the round
    // resolves or a human seat has to act.
    fn advance(&mut self) -> Result<(), GameError> {
        loop {
            match self.phase {
                Phase::PreDraw | Phase::PostDraw => {
                    if self.betting_over() {
                        self.next_phase_after_betting();
                        continue;
                    }
                    let seat = self.active[self.turn];
                    if self.players[seat].stack() == 0 {
                        // already all-in; nothing left to decide
                        self.turn = (self.turn + 1) % self.active.len();
                        continue;
                    }
                    let ctx = self.bet_context(seat)?;
                    let action = match self.players[seat].controller_mut() {
                        Controller::Human => return Ok(()),
                        Controller::Bot(strategy) => strategy.bet_action(&ctx),
                    };
                    self.apply_bet(action);
                }
                Phase::Draw => {
                    if self.exchange_over() {
                        self.enter_post_draw();
                        continue;
                    }
                    let seat = self.active[self.turn];
                    if self.players[seat].has_exchanged() {
                        self.turn = (self.turn + 1) % self.active.len();
                        continue;
                    }
                    let strength = evaluate_hand(self.players[seat].hand())?;
                    let hand: Vec<Card> = self.players[seat].hand().to_vec();
                    let picks = match self.players[seat].controller_mut() {
                        Controller::Human => return Ok(()),
                        Controller::Bot(strategy) => strategy.exchange_indices(&hand, &strength),
                    };
                    self.exchange_at_turn(&picks)?;
                }
                Phase::Showdown => self.resolve_showdown()?,
                Phase::RoundOver | Phase::GameOver => return Ok(()),
            }
        }
    }

    fn betting_over(&self) -> bool {
        if self.active.len() <= 1 {
            return true;
        }
        if let Some(raiser) = self.last_raiser {
            if self.active[self.turn] == raiser {
                return true;
            }
        }
        self.active.iter().all(|&seat| {
            self.players[seat].stack() == 0
                || (self.acted[seat] && self.bets[seat] == self.current_bet)
        })
    }

    fn exchange_over(&self) -> bool {
        self.active
            .iter()
            .all(|&seat| self.players[seat].has_exchanged())
    }

    fn next_phase_after_betting(&mut self) {
        if self.active.len() <= 1 {
            self.award_uncontested();
            return;
        }
        match self.phase {
            Phase::PreDraw => {
                self.turn = 0;
                self.phase = Phase::Draw;
                self.log.push("Draw phase".to_string());
            }
            Phase::PostDraw => {
                self.phase = Phase::Showdown;
            }
            _ => {}
        }
    }

    fn enter_post_draw(&mut self) {
        for i in 0..self.players.len() {
            self.bets[i] = 0;
            self.acted[i] = false;
        }
        self.current_bet = 0;
        self.min_raise = self.big_blind;
        self.last_raiser = None;
        self.turn = 0;
        self.phase = Phase::PostDraw;
        self.log.push("Post-draw betting".to_string());
    }

    fn bet_context(&self, seat: usize) -> Result<BetContext, GameError> {
        let strength = evaluate_hand(self.players[seat].hand())?;
        Ok(BetContext {
            strength,
            to_call: self.current_bet.saturating_sub(self.bets[seat]),
            pot: self.pot,
            min_raise_total: self.current_bet + self.min_raise,
            stack: self.players[seat].stack(),
            small_blind: self.small_blind,
        })
    }

    fn apply_bet(&mut self, action: Action) {
        let seat = self.active[self.turn];
        let resolution = resolve_action(
            action,
            self.bets[seat],
            self.players[seat].stack(),
            self.current_bet,
            self.min_raise,
        );
        match resolution {
            Resolution::Fold => {
                self.log.push(format!("{} folds", self.players[seat].name()));
                self.remove_at_turn();
            }
            Resolution::FoldInvalidCheck => {
                self.log.push(format!(
                    "{} checks facing a bet, treated as a fold",
                    self.players[seat].name()
                ));
                self.remove_at_turn();
            }
            Resolution::Check => {
                self.log
                    .push(format!("{} checks", self.players[seat].name()));
                self.acted[seat] = true;
                self.advance_turn();
            }
            Resolution::Call { pay } => {
                let paid = self.commit(seat, pay);
                if paid == 0 {
                    self.log
                        .push(format!("{} checks", self.players[seat].name()));
                } else if self.players[seat].stack() == 0 {
                    self.log.push(format!(
                        "{} calls all-in for {}",
                        self.players[seat].name(),
                        paid
                    ));
                } else {
                    self.log
                        .push(format!("{} calls {}", self.players[seat].name(), paid));
                }
                self.acted[seat] = true;
                self.advance_turn();
            }
            Resolution::CallReduced { pay } => {
                let paid = self.commit(seat, pay);
                self.log.push(format!(
                    "{} raises below the minimum, treated as a call of {}",
                    self.players[seat].name(),
                    paid
                ));
                self.acted[seat] = true;
                self.advance_turn();
            }
            Resolution::Raise { total, pay } => {
                self.commit(seat, pay);
                self.min_raise = self.min_raise.max(total - self.current_bet);
                self.current_bet = total;
                self.last_raiser = Some(seat);
                if self.players[seat].stack() == 0 {
                    self.log.push(format!(
                        "{} raises all-in to {}",
                        self.players[seat].name(),
                        total
                    ));
                } else {
                    self.log
                        .push(format!("{} raises to {}", self.players[seat].name(), total));
                }
                self.acted[seat] = true;
                self.advance_turn();
            }
        }
    }

    fn exchange_at_turn(&mut self, indices: &[usize]) -> Result<(), GameError> {
        let seat = self.active[self.turn];
        let hand_len = self.players[seat].hand().len();
        let mut picks: Vec<usize> = Vec::new();
        for &slot in indices {
            if slot >= hand_len {
                self.log.push(format!(
                    "{} discard slot {} ignored (out of range)",
                    self.players[seat].name(),
                    slot
                ));
            } else if picks.contains(&slot) {
                self.log.push(format!(
                    "{} discard slot {} ignored (duplicate)",
                    self.players[seat].name(),
                    slot
                ));
            } else {
                picks.push(slot);
            }
        }
        picks.sort_unstable();
        for &slot in &picks {
            // old card to the bottom first, replacement from the top, so
            // the deck never shrinks during exchange
            let old = self.players[seat].hand()[slot];
            self.deck.return_to_bottom(old);
            let fresh = self.deck.draw().ok_or(GameError::DeckExhausted)?;
            self.players[seat].set_card(slot, fresh);
        }
        self.players[seat].mark_exchanged();
        if picks.is_empty() {
            self.log
                .push(format!("{} keeps their hand", self.players[seat].name()));
        } else {
            self.log.push(format!(
                "{} exchanges {} card{}",
                self.players[seat].name(),
                picks.len(),
                if picks.len() == 1 { "" } else { "s" }
            ));
        }
        self.turn = (self.turn + 1) % self.active.len();
        Ok(())
    }

    fn resolve_showdown(&mut self) -> Result<(), GameError> {
        self.log.push("Showdown".to_string());
        let mut ranked: Vec<(usize, HandStrength)> = Vec::with_capacity(self.active.len());
        for &seat in &self.active {
            let strength = evaluate_hand(self.players[seat].hand())?;
            self.log.push(format!(
                "{} shows {} ({})",
                self.players[seat].name(),
                format_cards(self.players[seat].hand()),
                strength.label()
            ));
            ranked.push((seat, strength));
        }
        let Some(best) = ranked.iter().map(|&(_, s)| s).max() else {
            self.finish_round();
            return Ok(());
        };
        let winners: Vec<usize> = ranked
            .iter()
            .filter(|&&(_, s)| s == best)
            .map(|&(seat, _)| seat)
            .collect();
        let share = self.pot / winners.len() as u32;
        let remainder = self.pot % winners.len() as u32;
        let awarded = self.pot;
        for (i, &seat) in winners.iter().enumerate() {
            // any odd chips go to the first winner in seat order
            let amount = if i == 0 { share + remainder } else { share };
            self.players[seat].add_chips(amount);
            self.log.push(format!(
                "{} wins {} with {}",
                self.players[seat].name(),
                amount,
                best.label()
            ));
        }
        self.last_result = Some(RoundResult {
            winners: winners
                .iter()
                .map(|&s| self.players[s].name().to_string())
                .collect(),
            winning_hand: Some(best.label()),
            pot: awarded,
        });
        self.pot = 0;
        self.finish_round();
        Ok(())
    }

    fn award_uncontested(&mut self) {
        let seat = self.active[0];
        let amount = self.pot;
        self.players[seat].add_chips(amount);
        let name = self.players[seat].name().to_string();
        self.log.push(format!("{} wins {} uncontested", name, amount));
        self.last_result = Some(RoundResult {
            winners: vec![name],
            winning_hand: None,
            pot: amount,
        });
        self.pot = 0;
        self.finish_round();
    }

    fn finish_round(&mut self) {
        self.rounds_played += 1;
        self.phase = Phase::RoundOver;
    }

    fn enter_game_over(&mut self) {
        if let Some(champ) = self.players.iter().find(|p| p.stack() > 0) {
            self.log.push(format!(
                "Game over: {} wins with {} chips",
                champ.name(),
                champ.stack()
            ));
        } else {
            self.log.push("Game over".to_string());
        }
        self.phase = Phase::GameOver;
    }

    fn commit(&mut self, seat: usize, amount: u32) -> u32 {
        let paid = self.players[seat].pay(amount);
        self.bets[seat] += paid;
        self.pot += paid;
        paid
    }

    fn remove_at_turn(&mut self) {
        self.active.remove(self.turn);
        if self.turn >= self.active.len() {
            self.turn = 0;
        }
    }

    fn advance_turn(&mut self) {
        self.turn = (self.turn + 1) % self.active.len();
    }

    fn human_turn_in_betting(&self) -> bool {
        matches!(self.phase, Phase::PreDraw | Phase::PostDraw)
            && self.turn < self.active.len()
            && self.players[self.active[self.turn]].is_human()
    }

    fn human_turn_in_draw(&self) -> bool {
        self.phase == Phase::Draw
            && self.turn < self.active.len()
            && self.players[self.active[self.turn]].is_human()
            && !self.players[self.active[self.turn]].has_exchanged()
    }
}
