//! Payout resolution for a finished round.

use crate::options::{GameOptions, RoundingMode};
use crate::result::{HandOutcome, Settlement};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Resolves a round with the default 3:2 blackjack payout rounded down.
///
/// See [`resolve_with`].
#[must_use]
pub fn resolve(
    player_value: u8,
    dealer_value: u8,
    player_cards: usize,
    dealer_cards: usize,
    bet: usize,
) -> Settlement {
    resolve_with(
        player_value,
        dealer_value,
        player_cards,
        dealer_cards,
        bet,
        &GameOptions::default(),
    )
}

/// Resolves a round once both hands are final.
///
/// The checks run in a fixed order, so a player natural beats a dealer 21
/// made from three or more cards, while two naturals push:
///
/// 1. player over 21: dealer wins, nothing returned
/// 2. dealer over 21: player wins, twice the bet
/// 3. player natural against a non-natural: stake plus `blackjack_pays`
/// 4. higher total wins; a tie returns the stake
///
/// # Example
///
/// ```
/// use blackjack21::{HandOutcome, payout::resolve};
///
/// let settlement = resolve(21, 21, 2, 3, 100);
/// assert_eq!(settlement.outcome, HandOutcome::Blackjack);
/// assert_eq!(settlement.credit, 250);
/// ```
#[must_use]
pub fn resolve_with(
    player_value: u8,
    dealer_value: u8,
    player_cards: usize,
    dealer_cards: usize,
    bet: usize,
    options: &GameOptions,
) -> Settlement {
    let player_natural = player_value == 21 && player_cards == 2;
    let dealer_natural = dealer_value == 21 && dealer_cards == 2;

    let (outcome, credit) = if player_value > 21 {
        (HandOutcome::Lose, 0)
    } else if dealer_value > 21 {
        (HandOutcome::Win, bet.saturating_mul(2))
    } else if player_natural && !dealer_natural {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (bet as f64) * options.blackjack_pays;
        (
            HandOutcome::Blackjack,
            bet.saturating_add(round_amount(winnings, options.rounding_blackjack)),
        )
    } else if player_value > dealer_value {
        (HandOutcome::Win, bet.saturating_mul(2))
    } else if dealer_value > player_value {
        (HandOutcome::Lose, 0)
    } else {
        (HandOutcome::Push, bet)
    };

    Settlement { credit, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_bust_loses_even_when_dealer_busts() {
        assert_eq!(
            resolve(22, 18, 2, 2, 100),
            Settlement {
                credit: 0,
                outcome: HandOutcome::Lose
            }
        );
        assert_eq!(resolve(23, 25, 3, 4, 100).outcome, HandOutcome::Lose);
    }

    #[test]
    fn dealer_bust_pays_even_money() {
        let settlement = resolve(12, 22, 3, 3, 40);
        assert_eq!(settlement.outcome, HandOutcome::Win);
        assert_eq!(settlement.credit, 80);
    }

    #[test]
    fn natural_beats_three_card_21() {
        let settlement = resolve(21, 21, 2, 3, 100);
        assert_eq!(settlement.outcome, HandOutcome::Blackjack);
        assert_eq!(settlement.credit, 250);
    }

    #[test]
    fn three_card_21_pushes_dealer_natural() {
        assert_eq!(
            resolve(21, 21, 3, 2, 100),
            Settlement {
                credit: 100,
                outcome: HandOutcome::Push
            }
        );
    }

    #[test]
    fn natural_against_natural_pushes() {
        let settlement = resolve(21, 21, 2, 2, 100);
        assert_eq!(settlement.outcome, HandOutcome::Push);
        assert_eq!(settlement.credit, 100);
    }

    #[test]
    fn blackjack_payout_rounds_down() {
        assert_eq!(resolve(21, 19, 2, 2, 15).credit, 37);
        assert_eq!(resolve(21, 19, 2, 2, 1).credit, 2);
    }

    #[test]
    fn dealer_natural_beats_player_three_card_20() {
        let settlement = resolve(20, 21, 3, 2, 10);
        assert_eq!(settlement.outcome, HandOutcome::Lose);
        assert_eq!(settlement.credit, 0);
    }

    #[test]
    fn higher_total_wins_and_tie_pushes() {
        assert_eq!(resolve(20, 18, 2, 3, 10).credit, 20);
        assert_eq!(resolve(17, 19, 3, 2, 10).credit, 0);
        assert_eq!(
            resolve(20, 20, 2, 2, 100),
            Settlement {
                credit: 100,
                outcome: HandOutcome::Push
            }
        );
    }

    #[test]
    fn huge_bets_saturate_credit() {
        let bet = usize::MAX / 2 + 1;
        assert_eq!(resolve(20, 17, 2, 3, bet).credit, usize::MAX);
        assert_eq!(resolve(15, 23, 3, 3, bet).credit, usize::MAX);
        assert_eq!(resolve(21, 20, 2, 2, bet).credit, usize::MAX);
    }

    #[test]
    fn configured_ratio_and_rounding_apply() {
        let options = GameOptions::default()
            .with_blackjack_pays(1.2)
            .with_rounding_blackjack(RoundingMode::Up);
        let settlement = resolve_with(21, 20, 2, 2, 11, &options);
        assert_eq!(settlement.credit, 11 + 14);
    }
}
