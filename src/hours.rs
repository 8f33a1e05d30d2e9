//! Fixed-point hour quantities.
//!
//! Uses `rust_decimal` internally with scale enforcement so repeated accrual
//! steps add up exactly instead of drifting the way binary floats do.

use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// An amount of PTO, in hours, held at 4 decimal places.
///
/// Balances are reported with 2 decimal places; the extra internal precision
/// keeps fractional accrual rates such as `5.8462` exact across a year.
/// Values with more than 4 decimal places are rounded on construction.
///
/// The operators panic on overflow like `Decimal` does. Code that works with
/// unvalidated amounts uses [`Hours::checked_add`] and [`Hours::checked_sub`].
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use pto_accrual::Hours;
///
/// let rate = Hours::from_str("5.85").unwrap();
/// assert_eq!((rate + rate).to_string(), "11.70");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hours(Decimal);

impl Hours {
    /// The number of decimal places kept internally.
    pub const SCALE: u32 = 4;

    /// The number of decimal places used when displaying a balance.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Zero hours.
    pub const ZERO: Self = Hours(Decimal::ZERO);

    /// Wraps a decimal, rounding it to [`Hours::SCALE`] places.
    pub fn new(mut value: Decimal) -> Self {
        value.rescale(Self::SCALE);
        Hours(value)
    }

    /// Returns the underlying decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if more PTO has been used than accrued.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Adds two amounts, or `None` if the sum does not fit.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Hours::new)
    }

    /// Subtracts `rhs`, or `None` if the difference does not fit.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Hours::new)
    }
}

impl From<u32> for Hours {
    fn from(hours: u32) -> Self {
        Hours::new(Decimal::from(hours))
    }
}

impl FromStr for Hours {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Hours::new)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(Self::DISPLAY_SCALE))
    }
}

impl Add for Hours {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Hours::new(self.0 + rhs.0)
    }
}

impl Sub for Hours {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Hours::new(self.0 - rhs.0)
    }
}

impl AddAssign for Hours {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Hours {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Hours {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut total = Hours::ZERO;
        for hours in iter {
            total += hours;
        }
        total
    }
}
