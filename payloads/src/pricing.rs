//! Client-side price derivation.
//!
//! Everything here is a pure function of its inputs and is preview-only:
//! the backend recomputes the same figures and is the final authority.
//! Totals are therefore never persisted and never transmitted — only the
//! components that produce them are.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to 2 decimal places, half away from zero (currency display).
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Coerce a missing monetary input to zero rather than propagating it.
pub fn amount_or_zero(amount: Option<Decimal>) -> Decimal {
    amount.unwrap_or(Decimal::ZERO)
}

/// Total payable for a booking: quote plus fees, minus discount, with the
/// cancellation fee applied only when cover is taken.
pub fn total_payable(
    quote_amount: Decimal,
    booking_fee: Decimal,
    has_cancellation_cover: bool,
    cancellation_fee: Decimal,
    discount: Decimal,
) -> Decimal {
    let cover_fee = if has_cancellation_cover {
        cancellation_fee
    } else {
        Decimal::ZERO
    };
    round2(quote_amount + booking_fee + cover_fee - discount)
}

/// Breakdown of what a date extension would cost, reconciling the
/// server-quoted figures with a staff-entered manual adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionBreakdown {
    /// Quote for the original date range.
    pub old_quote: Decimal,
    /// Quote recomputed for the extended date range.
    pub new_quote: Decimal,
    pub extend_charge: Decimal,
    pub extra_charge: Decimal,
}

impl ExtensionBreakdown {
    pub fn diff(&self) -> Decimal {
        round2(self.new_quote - self.old_quote)
    }

    /// The amount the customer must pay to confirm the extension.
    pub fn optional_payable(&self) -> Decimal {
        round2(self.diff() + self.extend_charge + self.extra_charge)
    }

    /// What the booking would come to after the extension, given the total
    /// currently payable.
    pub fn final_total(&self, current_total: Decimal) -> Decimal {
        round2(current_total + self.optional_payable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn total_without_cover() {
        let total =
            total_payable(dec!(56.77), dec!(1.99), false, dec!(9.99), dec!(0));
        assert_eq!(total, dec!(58.76));
    }

    #[test]
    fn total_with_cover() {
        let total =
            total_payable(dec!(56.77), dec!(1.99), true, dec!(9.99), dec!(0));
        assert_eq!(total, dec!(68.75));
    }

    #[test]
    fn discount_is_subtracted() {
        let total = total_payable(
            dec!(100.00),
            dec!(1.99),
            false,
            dec!(0),
            dec!(10.50),
        );
        assert_eq!(total, dec!(91.49));
    }

    #[test]
    fn total_is_idempotent() {
        let compute = || {
            total_payable(dec!(56.77), dec!(1.99), true, dec!(9.99), dec!(2.00))
        };
        assert_eq!(compute(), compute());
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(dec!(2.005)), dec!(2.01));
        assert_eq!(round2(dec!(-2.005)), dec!(-2.01));
        assert_eq!(round2(dec!(2.004)), dec!(2.00));
    }

    #[test]
    fn missing_amounts_degrade_to_zero() {
        assert_eq!(amount_or_zero(None), Decimal::ZERO);
        assert_eq!(amount_or_zero(Some(dec!(3.50))), dec!(3.50));
    }

    #[test]
    fn extension_breakdown() {
        let breakdown = ExtensionBreakdown {
            old_quote: dec!(100.00),
            new_quote: dec!(140.00),
            extend_charge: dec!(5.00),
            extra_charge: dec!(2.50),
        };
        assert_eq!(breakdown.diff(), dec!(40.00));
        assert_eq!(breakdown.optional_payable(), dec!(47.50));
        assert_eq!(breakdown.final_total(dec!(101.99)), dec!(149.49));
    }
}
