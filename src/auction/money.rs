use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 센트 단위 금액 (decimal(5,2): 0.01 ~ 999.99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct Money(i64);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Enter a valid amount, e.g. 10.50.")]
    Malformed,
    #[error("Enter an amount between 0.01 and 999.99.")]
    OutOfRange,
}

impl Money {
    pub const MIN: Money = Money(1);
    pub const MAX: Money = Money(99_999);

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('$').unwrap_or(s);
        let amount = Decimal::from_str(s).map_err(|_| MoneyError::Malformed)?;
        if amount.is_sign_negative() || amount.scale() > 2 {
            return Err(MoneyError::Malformed);
        }

        let cents = (amount * Decimal::ONE_HUNDRED)
            .to_i64()
            .ok_or(MoneyError::OutOfRange)?;
        let money = Money(cents);
        if money < Money::MIN || money > Money::MAX {
            return Err(MoneyError::OutOfRange);
        }
        Ok(money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_forms() {
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("10.01".parse::<Money>().unwrap().cents(), 1001);
        assert_eq!(" $0.99 ".parse::<Money>().unwrap().cents(), 99);
        assert_eq!("0.50".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("007.00".parse::<Money>().unwrap().cents(), 700);
    }

    #[test]
    fn rejects_malformed_and_out_of_range() {
        for bad in ["", "abc", "1.234", "-1", "1,00", "1.2.3", "ten"] {
            assert_eq!(bad.parse::<Money>(), Err(MoneyError::Malformed), "{bad}");
        }
        assert_eq!("0".parse::<Money>(), Err(MoneyError::OutOfRange));
        assert_eq!("0.00".parse::<Money>(), Err(MoneyError::OutOfRange));
        assert_eq!("1000".parse::<Money>(), Err(MoneyError::OutOfRange));
        assert_eq!("999.99".parse::<Money>().unwrap(), Money::MAX);
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::from_cents(1001).to_string(), "10.01");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(serde_json::to_value(Money::from_cents(1000)).unwrap(), "10.00");
    }
}
