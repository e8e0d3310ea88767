use crate::error::CliError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of satoshis in one bitcoin, as a float scale factor.
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// Maximum number of fractional digits a BTC amount can carry.
pub const BTC_DECIMALS: u32 = 8;

const SATS_PER_BTC_DECIMAL: Decimal = dec!(100000000);

/// Returns whether `amount` survives truncation to whole satoshis unchanged.
///
/// Amounts with more than eight fractional digits, and some amounts whose binary
/// representation lands just below a satoshi boundary (e.g. `0.29`), are rejected.
pub fn is_valid_amount(amount: f64) -> bool {
    (amount * SATS_PER_BTC).trunc() / SATS_PER_BTC == amount
}

pub fn subunit_to_amount(subunit: f64) -> f64 {
    subunit / SATS_PER_BTC
}

/// Scales a BTC amount to satoshis. The result is not rounded.
pub fn amount_to_subunit(amount: f64) -> f64 {
    amount * SATS_PER_BTC
}

/// An exact amount of bitcoin with at most eight fractional digits.
///
/// Backed by `rust_decimal::Decimal` so conversions to and from [`Satoshis`]
/// never lose precision. Negative amounts are allowed, since RPC responses
/// report fees and debits that way.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Btc(Decimal);

/// An exact amount of satoshis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Satoshis(pub i64);

impl Btc {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CliError> {
        let value = value.normalize();
        if value.scale() > BTC_DECIMALS {
            return Err(CliError::AmountError(format!(
                "{} has more than {} decimal places",
                value, BTC_DECIMALS
            )));
        }
        Ok(Self(value))
    }

    /// Converts a float through its shortest round-trip decimal text.
    pub fn from_f64(value: f64) -> Result<Self, CliError> {
        if !value.is_finite() {
            return Err(CliError::AmountError(format!(
                "{} is not a finite amount",
                value
            )));
        }
        value.to_string().parse()
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn to_sats(&self) -> Result<Satoshis, CliError> {
        self.0
            .checked_mul(SATS_PER_BTC_DECIMAL)
            .and_then(|sats| sats.to_i64())
            .map(Satoshis)
            .ok_or_else(|| {
                CliError::AmountError(format!("{} BTC does not fit in satoshis", self.0))
            })
    }
}

impl Satoshis {
    pub fn to_btc(&self) -> Btc {
        Btc(Decimal::new(self.0, BTC_DECIMALS).normalize())
    }
}

impl FromStr for Btc {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| CliError::AmountError(format!("Invalid amount '{}': {}", s, e)))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Btc {
    type Error = CliError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Btc> for Decimal {
    fn from(btc: Btc) -> Self {
        btc.0
    }
}

impl From<Satoshis> for Btc {
    fn from(sats: Satoshis) -> Self {
        sats.to_btc()
    }
}

impl fmt::Display for Btc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8}", self.0)
    }
}

impl fmt::Display for Satoshis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
