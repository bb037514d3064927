use serde::{Deserialize, Serialize};

use crate::{CalendarDate, prelude::*};

/// A count of complete years elapsed from one calendar date to another.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AgeYears(u16);

impl AgeYears {
    /// Returns the number of whole years as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// Error type for age computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// Birth date is after the reference date.
    #[error("Birth date {birth} is after the reference date {today}")]
    DateInFuture {
        birth: CalendarDate,
        today: CalendarDate,
    },
}

impl CalendarDate {
    /// Computes the age in whole years at the given reference date,
    /// treating `self` as the birth date.
    ///
    /// The caller supplies `today` explicitly, so a single calculation
    /// observes one consistent notion of "now" and tests need no clock.
    ///
    /// # Errors
    /// Returns `AgeError::DateInFuture` if `self` is strictly after
    /// `today`.
    pub fn age_at(&self, today: CalendarDate) -> Result<AgeYears, AgeError> {
        if *self > today {
            return Err(AgeError::DateInFuture {
                birth: *self,
                today,
            });
        }

        let mut age = today.year() - self.year();
        // Birthday not yet reached this year. The comparison is purely
        // numeric on the (month, day) pair, so a Feb 29 birth date needs
        // no Feb 29 in the reference year.
        if (today.month(), today.day()) < (self.month(), self.day()) {
            age -= 1;
        }

        Ok(AgeYears(age))
    }
}
