//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to place a bet.
    AwaitingBet,
    /// Dealing the initial four cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is over and has been settled.
    Resolved,
}

/// Who a card is dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}
