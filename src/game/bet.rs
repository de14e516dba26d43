use rand::RngCore;

use crate::card::Card;
use crate::error::BetError;

use super::{Game, GameState, RoundStarted};

impl<R: RngCore> Game<R> {
    /// Parses a typed bet and places it.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NotANumber`] if `input` is not a whole,
    /// non-negative number, otherwise the errors of [`Game::place_bet`].
    pub fn place_bet_input(&mut self, input: &str) -> Result<RoundStarted, BetError> {
        let Ok(amount) = input.trim().parse::<usize>() else {
            tracing::warn!(input, "rejected bet input");
            return Err(BetError::NotANumber);
        };
        self.place_bet(amount)
    }

    /// Places a bet and deals the opening cards.
    ///
    /// The bet is taken from the balance, then the player and dealer get two
    /// cards each, alternating and starting with the player. The dealer's
    /// second card is dealt face down. Naturals are not settled here; the
    /// round always continues with the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a bet, the bet is zero,
    /// or the bet exceeds the balance. The game state is unchanged then.
    pub fn place_bet(&mut self, amount: usize) -> Result<RoundStarted, BetError> {
        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState(self.state));
        }

        if amount == 0 {
            tracing::warn!("rejected zero bet");
            return Err(BetError::ZeroBet);
        }

        if amount > self.balance {
            tracing::warn!(amount, balance = self.balance, "rejected bet over balance");
            return Err(BetError::InsufficientFunds {
                bet: amount,
                balance: self.balance,
            });
        }

        self.balance -= amount;
        self.bet = amount;
        self.last_result = None;
        self.player.clear();
        self.dealer.clear();
        self.state = GameState::Dealing;
        tracing::debug!(bet = amount, balance = self.balance, "bet placed");

        let deal = self.deal();

        Ok(RoundStarted {
            bet: amount,
            balance: self.balance,
            deal,
        })
    }

    /// Deals player, dealer, player, dealer (hole card) and hands the turn to the player.
    fn deal(&mut self) -> [Card; 4] {
        let player_first = self.deal_to_player();
        let dealer_up = self.deal_to_dealer(false);
        let player_second = self.deal_to_player();
        let dealer_hole = self.deal_to_dealer(true);

        tracing::debug!(
            player = self.player.value(),
            dealer_up = self.dealer.visible_value(),
            "initial deal"
        );

        self.state = GameState::PlayerTurn;
        [player_first, dealer_up, player_second, dealer_hole]
    }
}
