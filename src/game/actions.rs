use rand::RngCore;

use crate::error::ActionError;

use super::{DealerTurnStarted, Game, GameState, HandUpdated};

impl<R: RngCore> Game<R> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState(self.state));
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hit that takes the hand over 21 ends the round at once: the hole
    /// card is turned over for display and the dealer wins without drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<HandUpdated, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deal_to_player();
        let player_value = self.player.value();
        tracing::debug!(%card, player = player_value, "player hits");

        let result = if player_value > 21 {
            self.reveal_hole();
            Some(self.settle())
        } else {
            None
        };

        Ok(HandUpdated {
            card,
            player_value,
            result,
        })
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Turns over the dealer's hole card and hands the turn to the dealer;
    /// follow up with [`Game::dealer_play`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<DealerTurnStarted, ActionError> {
        self.ensure_player_turn()?;

        let Some(&hole_card) = self.dealer.hole_card() else {
            return Err(ActionError::InvalidState(self.state));
        };

        self.state = GameState::DealerTurn;
        self.reveal_hole();
        let dealer_value = self.dealer.value();
        tracing::debug!(player = self.player.value(), dealer = dealer_value, "player stands");

        Ok(DealerTurnStarted {
            hole_card,
            dealer_value,
        })
    }
}
