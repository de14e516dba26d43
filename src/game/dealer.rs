use rand::RngCore;

use crate::error::ShowdownError;
use crate::payout::resolve_with;
use crate::result::RoundResult;

use super::{Game, GameState, TableEvent};

impl<R: RngCore> Game<R> {
    /// Returns whether the dealer has to take another card.
    fn dealer_must_draw(&self) -> bool {
        let value = self.dealer.value();
        let stands_on = self.options.dealer_stands_on;

        if value < stands_on {
            return true;
        }
        // Hit soft 17 when the table says so
        value == 17 && stands_on == 17 && self.dealer.is_soft() && !self.options.stand_on_soft_17
    }

    /// Dealer plays their hand according to the rules and settles the round.
    ///
    /// The dealer draws while below [`dealer_stands_on`](crate::GameOptions::dealer_stands_on)
    /// (17 by default). If `stand_on_soft_17` is false, the dealer also
    /// draws on soft 17.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState(self.state));
        }

        self.reveal_hole();

        while self.dealer_must_draw() {
            let card = self.deal_to_dealer(false);
            tracing::debug!(%card, dealer = self.dealer.value(), "dealer draws");
        }

        Ok(self.settle())
    }

    /// Resolves the round, credits the payout and records the result.
    pub(super) fn settle(&mut self) -> RoundResult {
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let settlement = resolve_with(
            player_value,
            dealer_value,
            self.player.len(),
            self.dealer.len(),
            self.bet,
            &self.options,
        );

        self.balance = self.balance.saturating_add(settlement.credit);
        self.state = GameState::Resolved;

        let result = RoundResult {
            outcome: settlement.outcome,
            bet: self.bet,
            payout: settlement.credit,
            player_value,
            dealer_value,
            player_bust: player_value > 21,
            dealer_bust: dealer_value > 21,
            balance: self.balance,
        };
        self.last_result = Some(result);
        self.events.push(TableEvent::RoundSettled(result));

        tracing::info!(
            outcome = ?result.outcome,
            player = player_value,
            dealer = dealer_value,
            payout = result.payout,
            balance = self.balance,
            "round settled"
        );

        if self.balance == 0 {
            self.events.push(TableEvent::GameOver);
            tracing::info!("balance exhausted, game over");
        }

        result
    }
}
