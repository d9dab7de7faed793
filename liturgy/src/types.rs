//! Core calendar types consumed by the office engine.
//!
//! Seasons, ranks and named feasts are closed enumerations so that every rule
//! switches on a stable identifier rather than on display text.
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript using ts-rs.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Liturgical season. Exactly one applies to any date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Advent,
    Christmastide,
    Epiphanytide,
    Lent,
    HolyWeek,
    Eastertide,
    SeasonAfterPentecost,
}

impl Season {
    /// Display name of the season
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advent => "Advent",
            Self::Christmastide => "Christmastide",
            Self::Epiphanytide => "Epiphanytide",
            Self::Lent => "Lent",
            Self::HolyWeek => "Holy Week",
            Self::Eastertide => "Eastertide",
            Self::SeasonAfterPentecost => "Season after Pentecost",
        }
    }

    /// Lent and Holy Week, when alleluias are omitted
    pub fn is_penitential(&self) -> bool {
        matches!(self, Self::Lent | Self::HolyWeek)
    }

    /// All seasons in calendar order, starting with Advent
    pub fn all() -> [Self; 7] {
        [
            Self::Advent,
            Self::Christmastide,
            Self::Epiphanytide,
            Self::Lent,
            Self::HolyWeek,
            Self::Eastertide,
            Self::SeasonAfterPentecost,
        ]
    }
}

/// Precedence category of a commemoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Ordinary weekday
    Ferial,
    /// Ember Day
    EmberDay,
    /// Rogation Day
    RogationDay,
    /// Lord's Day
    Sunday,
    /// Major holy day
    HolyDay,
    /// Principal feast, highest precedence
    PrincipalFeast,
}

impl Rank {
    /// Get the precedence value (higher = more authority).
    ///
    /// Ember and Rogation Days share a level.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Ferial => 1,
            Self::EmberDay | Self::RogationDay => 2,
            Self::Sunday => 3,
            Self::HolyDay => 4,
            Self::PrincipalFeast => 5,
        }
    }

    /// Check if this rank takes precedence over another
    pub fn outranks(&self, other: &Self) -> bool {
        self.precedence() > other.precedence()
    }

    /// Principal Feasts, Sundays and Holy Days
    pub fn is_feast_or_sunday(&self) -> bool {
        matches!(self, Self::PrincipalFeast | Self::Sunday | Self::HolyDay)
    }

}

impl Default for Rank {
    fn default() -> Self {
        Self::Ferial
    }
}

/// Named observances that office rules select on.
///
/// Only feasts that some rule distinguishes are listed; every other
/// commemoration carries no identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum FeastId {
    HolyName,
    Presentation,
    Annunciation,
    EasterDay,
    /// Any weekday of Easter Week
    EasterWeek,
    AscensionDay,
    SundayAfterAscension,
    DayOfPentecost,
    TrinitySunday,
    Visitation,
    Transfiguration,
    HolyCrossDay,
    AllSaintsDay,
    ThanksgivingDay,
    HolyInnocents,
}

impl FeastId {
    /// Conventional display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HolyName => "The Circumcision and Holy Name of our Lord Jesus Christ",
            Self::Presentation => "The Presentation of Christ in the Temple",
            Self::Annunciation => "The Annunciation of our Lord Jesus Christ to the Virgin Mary",
            Self::EasterDay => "Easter Day",
            Self::EasterWeek => "Easter Week",
            Self::AscensionDay => "Ascension Day",
            Self::SundayAfterAscension => "The Sunday after Ascension Day",
            Self::DayOfPentecost => "The Day of Pentecost",
            Self::TrinitySunday => "Trinity Sunday",
            Self::Visitation => "The Visitation of the Virgin Mary to Elizabeth and Zechariah",
            Self::Transfiguration => "The Transfiguration of Our Lord Jesus Christ",
            Self::HolyCrossDay => "Holy Cross Day",
            Self::AllSaintsDay => "All Saints’ Day",
            Self::ThanksgivingDay => "Thanksgiving Day",
            Self::HolyInnocents => "The Holy Innocents",
        }
    }
}

/// A named observance attached to a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Commemoration {
    /// Display name, also the key for collect aggregation
    pub name: String,
    /// Precedence category
    pub rank: Rank,
    /// Stable identifier for feasts that rules select on
    #[serde(default)]
    pub feast: Option<FeastId>,
    /// Collect said at Morning Prayer
    #[serde(default)]
    pub morning_prayer_collect: Option<String>,
    /// Collect said at Evening Prayer
    #[serde(default)]
    pub evening_prayer_collect: Option<String>,
}

impl Commemoration {
    /// Create a commemoration without collects.
    pub fn new(name: impl Into<String>, rank: Rank) -> Self {
        Self {
            name: name.into(),
            rank,
            feast: None,
            morning_prayer_collect: None,
            evening_prayer_collect: None,
        }
    }

    /// Create a named feast using its conventional display name.
    pub fn feast(feast: FeastId, rank: Rank) -> Self {
        Self::new(feast.display_name(), rank).with_feast(feast)
    }

    /// Builder: set the feast identifier.
    pub fn with_feast(mut self, feast: FeastId) -> Self {
        self.feast = Some(feast);
        self
    }

    /// Builder: set the Morning Prayer collect.
    pub fn with_morning_collect(mut self, collect: impl Into<String>) -> Self {
        self.morning_prayer_collect = Some(collect.into());
        self
    }

    /// Builder: set the Evening Prayer collect.
    pub fn with_evening_collect(mut self, collect: impl Into<String>) -> Self {
        self.evening_prayer_collect = Some(collect.into());
        self
    }

    /// Check whether this is the given named feast
    pub fn is(&self, feast: FeastId) -> bool {
        self.feast == Some(feast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_precedence() {
        assert!(Rank::PrincipalFeast.outranks(&Rank::HolyDay));
        assert!(Rank::HolyDay.outranks(&Rank::Sunday));
        assert!(Rank::Sunday.outranks(&Rank::EmberDay));
        assert!(Rank::RogationDay.outranks(&Rank::Ferial));
        assert!(!Rank::EmberDay.outranks(&Rank::RogationDay));
        assert!(!Rank::RogationDay.outranks(&Rank::EmberDay));
    }

    #[test]
    fn test_feast_rank_grouping() {
        assert!(Rank::Sunday.is_feast_or_sunday());
        assert!(Rank::HolyDay.is_feast_or_sunday());
        assert!(!Rank::EmberDay.is_feast_or_sunday());
        assert!(!Rank::Ferial.is_feast_or_sunday());
    }

    #[test]
    fn test_commemoration_deserialize_defaults() {
        let commemoration: Commemoration =
            serde_json::from_str(r#"{"name": "Saint Mark", "rank": "holy_day"}"#).unwrap();
        assert_eq!(commemoration.rank, Rank::HolyDay);
        assert!(commemoration.feast.is_none());
        assert!(commemoration.morning_prayer_collect.is_none());
    }

    #[test]
    fn test_feast_identity() {
        let easter = Commemoration::feast(FeastId::EasterDay, Rank::PrincipalFeast);
        assert_eq!(easter.name, "Easter Day");
        assert!(easter.is(FeastId::EasterDay));
        assert!(!easter.is(FeastId::EasterWeek));
    }
}
