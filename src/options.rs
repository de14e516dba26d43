//! House rules and session configuration.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(500)
///     .with_blackjack_pays(1.2)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Balance at the start of a session and after a game-over restart.
    pub starting_balance: usize,
    /// Blackjack payout ratio on top of the returned stake (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// The dealer keeps drawing while below this total.
    pub dealer_stands_on: u8,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Quick-pick bet amounts offered to the player.
    pub bet_presets: [usize; 4],
    /// Bet suggested when the player types their own amount.
    pub default_bet: usize,
    /// Whether every new round starts from a freshly shuffled deck.
    ///
    /// When `false` the deck carries over and only reshuffles once empty.
    pub reshuffle_each_round: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            bet_presets: [10, 50, 100, 500],
            default_bet: 100,
            reshuffle_each_round: true,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the quick-pick bet amounts.
    #[must_use]
    pub const fn with_bet_presets(mut self, presets: [usize; 4]) -> Self {
        self.bet_presets = presets;
        self
    }

    /// Sets the suggested custom bet.
    #[must_use]
    pub const fn with_default_bet(mut self, bet: usize) -> Self {
        self.default_bet = bet;
        self
    }

    /// Sets whether each round starts from a fresh deck.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_each_round(false);
    /// assert!(!options.reshuffle_each_round);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_each_round(mut self, reshuffle: bool) -> Self {
        self.reshuffle_each_round = reshuffle;
        self
    }

    /// Returns the house rules as display lines.
    #[must_use]
    pub const fn rules(&self) -> [RuleLine; 8] {
        [
            RuleLine::Goal,
            RuleLine::Deal,
            RuleLine::HitOrStand,
            RuleLine::DealerDraws(self.dealer_stands_on),
            RuleLine::CardValues,
            RuleLine::Ace,
            RuleLine::WinPays,
            RuleLine::BlackjackPays(self.blackjack_pays),
        ]
    }
}

/// One line of the house rules summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleLine {
    /// Object of the game.
    Goal,
    /// Initial deal.
    Deal,
    /// Player choices.
    HitOrStand,
    /// Dealer drawing rule, with the stand total.
    DealerDraws(u8),
    /// Pip and face card values.
    CardValues,
    /// Ace value.
    Ace,
    /// Regular win payout.
    WinPays,
    /// Blackjack payout ratio.
    BlackjackPays(f64),
}

impl core::fmt::Display for RuleLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Goal => f.write_str("Get as close to 21 as you can without going over."),
            Self::Deal => f.write_str(
                "You and the dealer get two cards each; one dealer card stays face down.",
            ),
            Self::HitOrStand => f.write_str("Hit to take another card, or stand to stop."),
            Self::DealerDraws(total) => {
                write!(f, "The dealer must draw until reaching {total} or more.")
            }
            Self::CardValues => f.write_str("2-10 count their number; J, Q and K count 10."),
            Self::Ace => f.write_str("An Ace counts 11, or 1 if 11 would bust the hand."),
            Self::WinPays => f.write_str("A regular win pays 1:1."),
            Self::BlackjackPays(ratio) => {
                write!(f, "Blackjack (21 from two cards) pays {ratio}:1.")
            }
        }
    }
}
