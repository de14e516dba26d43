//! Table events and transition summaries handed to the presentation layer.

use crate::card::Card;
use crate::result::RoundResult;

use super::Participant;

/// Something that happened at the table, in the order it happened.
///
/// A front end replays these one at a time (for example as card animations)
/// before asking the player for the next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// The deck ran out and a fresh one was shuffled.
    Reshuffled,
    /// A card was dealt.
    CardDealt {
        /// Who received the card.
        to: Participant,
        /// The card.
        card: Card,
        /// Whether the card was dealt face down (the dealer's hole card).
        face_down: bool,
    },
    /// The dealer turned over the hole card.
    HoleRevealed(Card),
    /// The round was settled.
    RoundSettled(RoundResult),
    /// The balance reached zero.
    GameOver,
}

/// Returned by a successful bet: the stake and the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStarted {
    /// The accepted bet.
    pub bet: usize,
    /// Balance after the bet was taken.
    pub balance: usize,
    /// Player up card, dealer up card, player second card, dealer hole card.
    pub deal: [Card; 4],
}

/// Returned by a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandUpdated {
    /// The drawn card.
    pub card: Card,
    /// The player's score after the draw.
    pub player_value: u8,
    /// Set when the hit busted the hand and settled the round.
    pub result: Option<RoundResult>,
}

/// Returned by a stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerTurnStarted {
    /// The revealed hole card.
    pub hole_card: Card,
    /// The dealer's total with the hole card showing.
    pub dealer_value: u8,
}
