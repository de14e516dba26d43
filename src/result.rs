//! Round result types.

use core::fmt;

/// Outcome of a resolved round, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Dealer wins (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
}

impl HandOutcome {
    /// Returns whether the player gets more than the stake back.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "You win!",
            Self::Lose => "Dealer wins!",
            Self::Push => "Push!",
            Self::Blackjack => "Blackjack! You win!",
        })
    }
}

/// Balance change decided by the payout resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Amount credited back to the balance (stake included).
    pub credit: usize,
    /// The outcome label.
    pub outcome: HandOutcome,
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: HandOutcome,
    /// The bet placed for the round.
    pub bet: usize,
    /// The amount credited to the balance (stake included).
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Balance after the payout.
    pub balance: usize,
}

impl RoundResult {
    /// Net result of the round (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.player_bust {
            return write!(f, "Bust! {}", self.outcome);
        }
        if self.dealer_bust {
            return write!(f, "Dealer busts! {}", self.outcome);
        }
        match self.outcome {
            HandOutcome::Blackjack => write!(f, "{}", self.outcome),
            HandOutcome::Win | HandOutcome::Push => {
                write!(f, "{} {} to {}", self.outcome, self.player_value, self.dealer_value)
            }
            HandOutcome::Lose => {
                write!(f, "{} {} to {}", self.outcome, self.dealer_value, self.player_value)
            }
        }
    }
}
