//! Per-date liturgical context.
//!
//! A [`LiturgicalContext`] is an immutable snapshot of everything the calendar
//! knows about one date. It is constructed once per composition and shared by
//! every section resolver.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::{Commemoration, FeastId, Rank, Season};

/// Immutable calendar snapshot for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalContext {
    date: NaiveDate,
    season: Season,
    /// Morning commemorations, ranked by precedence
    commemorations: Vec<Commemoration>,
    /// Evening commemorations, ranked by precedence
    evening_commemorations: Vec<Commemoration>,
    primary: Commemoration,
    fast_day: bool,
}

impl LiturgicalContext {
    /// Start building a context for a date in a season.
    pub fn builder(date: NaiveDate, season: Season) -> LiturgicalContextBuilder {
        LiturgicalContextBuilder {
            date,
            season,
            commemorations: Vec::new(),
            evening_commemorations: None,
            primary: None,
            fast_day: false,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// The commemorations observed in the morning.
    pub fn commemorations(&self) -> &[Commemoration] {
        &self.commemorations
    }

    /// The commemorations observed in the evening (may include the eve of the next day).
    pub fn evening_commemorations(&self) -> &[Commemoration] {
        &self.evening_commemorations
    }

    /// The commemoration that governs the day.
    pub fn primary(&self) -> &Commemoration {
        &self.primary
    }

    pub fn primary_rank(&self) -> Rank {
        self.primary.rank
    }

    pub fn is_fast_day(&self) -> bool {
        self.fast_day
    }

    /// Check whether the primary commemoration is the given feast.
    pub fn is_feast(&self, feast: FeastId) -> bool {
        self.primary.is(feast)
    }

    /// Check whether any morning commemoration is the given feast.
    pub fn observes(&self, feast: FeastId) -> bool {
        self.commemorations.iter().any(|c| c.is(feast))
    }
}

/// Builder for [`LiturgicalContext`].
#[derive(Debug, Clone)]
pub struct LiturgicalContextBuilder {
    date: NaiveDate,
    season: Season,
    commemorations: Vec<Commemoration>,
    evening_commemorations: Option<Vec<Commemoration>>,
    primary: Option<Commemoration>,
    fast_day: bool,
}

impl LiturgicalContextBuilder {
    /// Builder: append a morning commemoration (in precedence order).
    pub fn commemoration(mut self, commemoration: Commemoration) -> Self {
        self.commemorations.push(commemoration);
        self
    }

    /// Builder: append an evening commemoration (in precedence order).
    pub fn evening_commemoration(mut self, commemoration: Commemoration) -> Self {
        self.evening_commemorations
            .get_or_insert_with(Vec::new)
            .push(commemoration);
        self
    }

    /// Builder: designate the primary commemoration.
    pub fn primary(mut self, commemoration: Commemoration) -> Self {
        self.primary = Some(commemoration);
        self
    }

    /// Builder: mark the date as a fast day.
    pub fn fast_day(mut self, fast_day: bool) -> Self {
        self.fast_day = fast_day;
        self
    }

    /// Finish the snapshot.
    ///
    /// Without an explicit primary, the highest-ranked morning commemoration
    /// governs the day, the earliest winning a tie; with no commemorations at
    /// all a ferial weekday stands in. The evening list defaults to the morning
    /// list.
    pub fn build(self) -> LiturgicalContext {
        let primary = self
            .primary
            .or_else(|| highest_ranked(&self.commemorations).cloned())
            .unwrap_or_else(|| ferial_day(self.date, self.season));

        let commemorations = if self.commemorations.is_empty() {
            vec![primary.clone()]
        } else {
            self.commemorations
        };

        let evening_commemorations = self
            .evening_commemorations
            .unwrap_or_else(|| commemorations.clone());

        LiturgicalContext {
            date: self.date,
            season: self.season,
            commemorations,
            evening_commemorations,
            primary,
            fast_day: self.fast_day,
        }
    }
}

fn highest_ranked(commemorations: &[Commemoration]) -> Option<&Commemoration> {
    commemorations.iter().fold(None, |best, candidate| match best {
        Some(best) if !candidate.rank.outranks(&best.rank) => Some(best),
        _ => Some(candidate),
    })
}

fn ferial_day(date: NaiveDate, season: Season) -> Commemoration {
    let rank = if date.weekday() == Weekday::Sun {
        Rank::Sunday
    } else {
        Rank::Ferial
    };
    Commemoration::new(
        format!("{} in {}", date.format("%A"), season.as_str()),
        rank,
    )
}
