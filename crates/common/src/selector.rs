//! Symbolic date-range selectors.
//!
//! The viewer offers a fixed set of ranges. They are not real historical
//! queries: the proxy maps each one to a fixed pair of coordinates.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSelector {
    #[default]
    Today,
    Yesterday,
    ThisWeek,
    PreviousWeek,
    ThisMonth,
    PreviousMonth,
    /// Anything unrecognized, including the UI's "custom" entry
    Other,
}

impl RangeSelector {
    pub const ALL: [RangeSelector; 7] = [
        RangeSelector::Today,
        RangeSelector::Yesterday,
        RangeSelector::ThisWeek,
        RangeSelector::PreviousWeek,
        RangeSelector::ThisMonth,
        RangeSelector::PreviousMonth,
        RangeSelector::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RangeSelector::Today => "today",
            RangeSelector::Yesterday => "yesterday",
            RangeSelector::ThisWeek => "this_week",
            RangeSelector::PreviousWeek => "previous_week",
            RangeSelector::ThisMonth => "this_month",
            RangeSelector::PreviousMonth => "previous_month",
            RangeSelector::Other => "custom",
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Never fails: unknown values fall back to [`RangeSelector::Other`].
impl FromStr for RangeSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "today" => RangeSelector::Today,
            "yesterday" => RangeSelector::Yesterday,
            "this_week" => RangeSelector::ThisWeek,
            "previous_week" => RangeSelector::PreviousWeek,
            "this_month" => RangeSelector::ThisMonth,
            "previous_month" => RangeSelector::PreviousMonth,
            _ => RangeSelector::Other,
        })
    }
}

impl From<&str> for RangeSelector {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(selector) => selector,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_round_trip_through_strings() {
        for selector in RangeSelector::ALL {
            assert_eq!(RangeSelector::from(selector.as_str()), selector);
        }
    }

    #[test]
    fn unknown_values_become_other() {
        assert_eq!(RangeSelector::from("custom"), RangeSelector::Other);
        assert_eq!(RangeSelector::from("wireless"), RangeSelector::Other);
        assert_eq!(RangeSelector::from(""), RangeSelector::Other);
        assert_eq!(RangeSelector::from("TODAY"), RangeSelector::Other);
    }

    #[test]
    fn default_is_today() {
        assert_eq!(RangeSelector::default(), RangeSelector::Today);
    }
}
