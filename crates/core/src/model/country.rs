use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the twelve countries a round can draw from.
///
/// The candidate pool is fixed at compile time; variants carry no data so
/// values are `Copy` and cheap to shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    Estonia,
    France,
    Germany,
    Ireland,
    Italy,
    Monaco,
    Nigeria,
    Poland,
    Spain,
    UnitedKingdom,
    Ukraine,
    UnitedStates,
}

impl Country {
    /// Every country a dealer may draw, in display order.
    pub const ALL: [Country; 12] = [
        Country::Estonia,
        Country::France,
        Country::Germany,
        Country::Ireland,
        Country::Italy,
        Country::Monaco,
        Country::Nigeria,
        Country::Poland,
        Country::Spain,
        Country::UnitedKingdom,
        Country::Ukraine,
        Country::UnitedStates,
    ];

    /// Returns the display name shown to the player.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Country::Estonia => "Estonia",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Ireland => "Ireland",
            Country::Italy => "Italy",
            Country::Monaco => "Monaco",
            Country::Nigeria => "Nigeria",
            Country::Poland => "Poland",
            Country::Spain => "Spain",
            Country::UnitedKingdom => "UK",
            Country::Ukraine => "Ukraine",
            Country::UnitedStates => "US",
        }
    }
}

// ─── Display / FromStr Implementations ─────────────────────────────────────────

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error type for parsing a country from its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCountryError {
    raw: String,
}

impl fmt::Display for ParseCountryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown country name: {}", self.raw)
    }
}

impl std::error::Error for ParseCountryError {}

impl FromStr for Country {
    type Err = ParseCountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .iter()
            .copied()
            .find(|country| country.name() == s)
            .ok_or_else(|| ParseCountryError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_has_twelve_distinct_countries() {
        let unique: HashSet<Country> = Country::ALL.iter().copied().collect();
        assert_eq!(Country::ALL.len(), 12);
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_display_uses_player_facing_names() {
        assert_eq!(Country::France.to_string(), "France");
        assert_eq!(Country::UnitedKingdom.to_string(), "UK");
        assert_eq!(Country::UnitedStates.to_string(), "US");
    }

    #[test]
    fn test_from_str_roundtrip() {
        for country in Country::ALL {
            let parsed: Country = country.name().parse().unwrap();
            assert_eq!(parsed, country);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        let result = "Atlantis".parse::<Country>();
        assert!(result.is_err());
    }

    #[test]
    fn test_names_are_distinct() {
        let unique: HashSet<&str> = Country::ALL.iter().map(Country::name).collect();
        assert_eq!(unique.len(), Country::ALL.len());
    }
}
