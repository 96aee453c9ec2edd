// src/domain/money.rs
use rust_decimal::Decimal;

/// Monetary values are stored with two fractional digits.
pub const MONEY_SCALE: u32 = 2;

/// Largest magnitude accepted from a form.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(999_999_999, 0, 0, false, 0);

/// Rescale to [`MONEY_SCALE`] so that equal amounts share one representation
/// (`4.5` and `4.50` serialize identically in snapshots).
pub fn to_money(value: Decimal) -> Decimal {
    let mut value = value;
    value.rescale(MONEY_SCALE);
    value
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyError {
    /// Zero or negative once rounded to cents.
    NotPositive,
    TooLarge,
}

/// Rounds to cents and requires the result to be strictly positive and no
/// larger than [`MAX_AMOUNT`]. `0.004` rounds to `0.00` and is rejected.
pub fn positive_money(value: Decimal) -> Result<Decimal, MoneyError> {
    let value = to_money(value);
    if value <= Decimal::ZERO {
        Err(MoneyError::NotPositive)
    } else if value > MAX_AMOUNT {
        Err(MoneyError::TooLarge)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn to_money_pads_and_rounds_to_two_places() {
        assert_eq!(to_money(Decimal::from_str("4.5").unwrap()).to_string(), "4.50");
        assert_eq!(to_money(Decimal::from_str("3000").unwrap()).to_string(), "3000.00");
        assert_eq!(to_money(Decimal::from_str("1.005").unwrap()).scale(), 2);
    }

    #[test]
    fn max_amount_is_nine_hundred_ninety_nine_million() {
        assert_eq!(MAX_AMOUNT, Decimal::from(999_999_999u32));
    }

    #[test]
    fn sub_cent_values_are_not_positive_money() {
        let d = |raw: &str| Decimal::from_str(raw).unwrap();
        assert_eq!(positive_money(d("0.004")), Err(MoneyError::NotPositive));
        assert_eq!(positive_money(d("0.001")), Err(MoneyError::NotPositive));
        assert_eq!(positive_money(d("0.006")).unwrap().to_string(), "0.01");
        assert_eq!(positive_money(d("-3")), Err(MoneyError::NotPositive));
    }

    #[test]
    fn positive_money_is_capped() {
        assert_eq!(positive_money(MAX_AMOUNT), Ok(to_money(MAX_AMOUNT)));
        assert_eq!(
            positive_money(MAX_AMOUNT + Decimal::new(1, 2)),
            Err(MoneyError::TooLarge)
        );
    }
}
