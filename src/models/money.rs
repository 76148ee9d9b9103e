//! Money type for report amounts
//!
//! Amounts are held as whole minor units (cents/paise) in an i64 so that
//! totals and net savings never drift. Conversion to floating point only
//! happens at the encoding boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbols accepted (and stripped) by [`Money::parse`]
const KNOWN_SYMBOLS: &[char] = &['$', '₹', '€', '£'];

/// A monetary amount stored in minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use expense_report::models::Money;
    /// let amount = Money::from_cents(120050); // 1200.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Minor units portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The amount as a floating point number of whole units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `self / whole` as a ratio, `None` when `whole` is zero
    pub fn ratio_of(&self, whole: Money) -> Option<f64> {
        if whole.is_zero() {
            None
        } else {
            Some(self.0 as f64 / whole.0 as f64)
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "$10", "1,200.00"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.trim_start_matches(KNOWN_SYMBOLS);
        let s: String = s.chars().filter(|c| *c != ',').collect();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let cents = match s.split_once('.') {
            Some((whole, fraction)) => {
                if fraction.contains('.') || !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };
                let fraction: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };
                whole * 100 + fraction
            }
            None => s.parse::<i64>().map_err(|_| invalid())? * 100,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol, e.g. `₹1200.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }

    /// Plain two-decimal rendering without a symbol
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_plain())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
