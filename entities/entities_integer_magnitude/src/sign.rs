//! Sign of a signed integer value
//!
//! The sign is carried separately from the magnitude. A value is `Zero`
//! exactly when its magnitude is empty.

/// Sign of a signed integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Strictly less than zero
    Negative,
    /// Exactly zero (empty magnitude)
    Zero,
    /// Strictly greater than zero
    Positive,
}

impl Sign {
    /// True for [`Sign::Negative`]; zero is not negative
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl From<std::cmp::Ordering> for Sign {
    fn from(ordering: std::cmp::Ordering) -> Self {
        match ordering {
            std::cmp::Ordering::Less => Sign::Negative,
            std::cmp::Ordering::Equal => Sign::Zero,
            std::cmp::Ordering::Greater => Sign::Positive,
        }
    }
}
