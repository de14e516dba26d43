//! Error types for game operations.

use thiserror::Error;

use crate::game::GameState;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only taken while awaiting a bet.
    #[error("cannot place a bet during {0:?}")]
    InvalidState(GameState),
    /// The input is not a whole number.
    #[error("bet is not a number")]
    NotANumber,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bet exceeds the balance.
    #[error("bet of {bet} exceeds balance of {balance}")]
    InsufficientFunds {
        /// The rejected bet.
        bet: usize,
        /// The balance at the time of the bet.
        balance: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hit and stand are only allowed on the player's turn.
    #[error("player actions are not allowed during {0:?}")]
    InvalidState(GameState),
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// The dealer only plays on the dealer's turn.
    #[error("dealer cannot play during {0:?}")]
    InvalidState(GameState),
}

/// Errors that can occur when starting over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not been resolved.
    #[error("round is still in progress ({0:?})")]
    InvalidState(GameState),
    /// The balance is exhausted; only a restart is possible.
    #[error("balance is exhausted")]
    GameOver,
    /// A restart was requested while the player still has chips.
    #[error("game is not over")]
    NotGameOver,
}
