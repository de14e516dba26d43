//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one player against the
//! dealer: betting from a session balance, the opening deal, hit and stand,
//! dealer play and payout. Presentation is left to the caller, which reads
//! the table through observers and [`TableEvent`]s.
//!
//! # Example
//!
//! ```
//! use blackjack21::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//!
//! game.stand().unwrap();
//! let result = game.dealer_play().unwrap();
//! assert_eq!(game.state(), GameState::Resolved);
//! assert_eq!(game.balance(), 900 + result.payout);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod assets;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod payout;
pub mod result;

// Re-export main types
#[cfg(feature = "std")]
pub use assets::{AssetError, AssetManifest};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, RoundError, ShowdownError};
pub use game::{
    DealerTurnStarted, Game, GameState, HandUpdated, Participant, RoundStarted, TableEvent,
};
pub use hand::{DealerHand, Hand, score};
pub use options::{GameOptions, RoundingMode, RuleLine};
pub use result::{HandOutcome, RoundResult, Settlement};
