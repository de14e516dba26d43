//! Game engine and session state.

use alloc::vec::Vec;

use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{HandOutcome, RoundResult};

mod actions;
mod bet;
mod dealer;
pub mod event;
pub mod state;

pub use event::{DealerTurnStarted, HandUpdated, RoundStarted, TableEvent};
pub use state::{GameState, Participant};

/// Chips the player sits down with, never less than one.
const fn starting_stake(options: &GameOptions) -> usize {
    if options.starting_balance == 0 {
        1
    } else {
        options.starting_balance
    }
}

/// A single-player blackjack session against the dealer.
///
/// The game owns the deck, both hands and the player's balance, and moves
/// through [`GameState`] one player action at a time:
///
/// ```text
/// AwaitingBet -> Dealing -> PlayerTurn -> DealerTurn -> Resolved
///                               |                          ^
///                               +---------- bust ----------+
/// ```
///
/// Every card dealt is also queued as a [`TableEvent`] so a front end can
/// animate the table in order.
#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    /// Cards left to draw.
    deck: Deck<R>,
    /// Game options.
    options: GameOptions,
    /// Current round state.
    state: GameState,
    /// Chips the player holds outside the current bet.
    balance: usize,
    /// Bet for the current round (0 between rounds).
    bet: usize,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Result of the last settled round.
    last_result: Option<RoundResult>,
    /// Events not yet drained by the front end.
    events: Vec<TableEvent>,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new game drawing its shuffles from `rng`.
    ///
    /// A `starting_balance` of 0 is raised to a single chip so the first
    /// bet can be placed.
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        let balance = starting_stake(&options);
        Self {
            deck: Deck::new(rng),
            options,
            state: GameState::AwaitingBet,
            balance,
            bet: 0,
            player: Hand::new(),
            dealer: DealerHand::new(),
            last_result: None,
            events: Vec::new(),
        }
    }

    /// Draws a card, noting a reshuffle when the deck had run out.
    fn draw(&mut self) -> Card {
        if self.deck.is_empty() {
            self.events.push(TableEvent::Reshuffled);
        }
        self.deck.draw()
    }

    /// Draws a card into the player's hand.
    fn deal_to_player(&mut self) -> Card {
        let card = self.draw();
        self.player.add_card(card);
        self.events.push(TableEvent::CardDealt {
            to: Participant::Player,
            card,
            face_down: false,
        });
        card
    }

    /// Draws a card into the dealer's hand.
    fn deal_to_dealer(&mut self, face_down: bool) -> Card {
        let card = self.draw();
        self.dealer.add_card(card);
        self.events.push(TableEvent::CardDealt {
            to: Participant::Dealer,
            card,
            face_down,
        });
        card
    }

    /// Turns over the dealer's hole card. Returns `None` if already showing.
    fn reveal_hole(&mut self) -> Option<Card> {
        if self.dealer.is_hole_revealed() {
            return None;
        }
        self.dealer.reveal_hole();
        let card = *self.dealer.hole_card()?;
        self.events.push(TableEvent::HoleRevealed(card));
        Some(card)
    }

    /// Clears the table and waits for the next bet.
    fn reset_table(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.bet = 0;
        if self.options.reshuffle_each_round {
            self.deck.reset_and_shuffle();
        }
        self.state = GameState::AwaitingBet;
    }

    /// Starts the next round after a resolved one.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved yet, or if the balance
    /// is exhausted (use [`Game::restart`] then).
    pub fn new_round(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::Resolved {
            return Err(RoundError::InvalidState(self.state));
        }
        if self.balance == 0 {
            return Err(RoundError::GameOver);
        }
        self.reset_table();
        tracing::debug!(balance = self.balance, "new round");
        Ok(())
    }

    /// Refills the balance to the starting stake after a game over.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NotGameOver`] unless the game is over.
    pub fn restart(&mut self) -> Result<(), RoundError> {
        if !self.is_game_over() {
            return Err(RoundError::NotGameOver);
        }
        self.balance = starting_stake(&self.options);
        self.last_result = None;
        self.reset_table();
        tracing::info!(balance = self.balance, "session restarted");
        Ok(())
    }

    /// Returns whether the player ran out of chips after the last round.
    pub fn is_game_over(&self) -> bool {
        self.state == GameState::Resolved && self.balance == 0
    }

    /// Returns the current round state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's balance, not counting the current bet.
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the bet for the current round (0 while awaiting a bet).
    pub const fn current_bet(&self) -> usize {
        self.bet
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's score.
    pub fn player_score(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer's score.
    ///
    /// With `revealed` false only the cards the player can see are counted,
    /// which is the up card until the hole card is turned over.
    pub fn dealer_score(&self, revealed: bool) -> u8 {
        if revealed {
            self.dealer.value()
        } else {
            self.dealer.visible_value()
        }
    }

    /// Returns the outcome of the last settled round.
    pub fn last_outcome(&self) -> Option<HandOutcome> {
        self.last_result.map(|result| result.outcome)
    }

    /// Returns the full result of the last settled round.
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the deck, for stacking known cards.
    pub const fn deck_mut(&mut self) -> &mut Deck<R> {
        &mut self.deck
    }

    /// Takes all queued table events, oldest first.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        core::mem::take(&mut self.events)
    }
}
