//! Calendar capability consumed by the office engine.
//!
//! The rules that compute seasons and commemorations live outside this
//! workspace. The engine only needs `date -> LiturgicalContext`, so that
//! capability is a trait, and [`FixedCalendar`] serves hand-built contexts for
//! tests and for precomputed calendars.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::context::LiturgicalContext;
use crate::error::{LiturgyError, Result};

/// Trait turning a date into its liturgical context.
pub trait CalendarProvider: Send + Sync {
    /// Resolve the context for a date.
    ///
    /// Fails with [`LiturgyError::InvalidDate`] when the date is outside the
    /// range the calendar can answer for.
    fn resolve_context(&self, date: NaiveDate) -> Result<LiturgicalContext>;
}

/// Parse an office date such as `2024-03-31` or `2024-3-31`.
pub fn parse_office_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| LiturgyError::InvalidDate(format!("{input}: {e}")))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CalendarFile {
    #[serde(default)]
    days: Vec<LiturgicalContext>,
}

/// Calendar backed by precomputed contexts.
///
/// Dates without an entry are outside its range.
#[derive(Debug, Clone, Default)]
pub struct FixedCalendar {
    days: HashMap<NaiveDate, LiturgicalContext>,
}

impl FixedCalendar {
    /// Create an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load precomputed contexts from YAML (a `days:` list).
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: CalendarFile = serde_yaml::from_str(yaml)?;
        Ok(file.days.into_iter().collect())
    }

    /// Add or replace the context for its date.
    pub fn insert(&mut self, context: LiturgicalContext) {
        self.days.insert(context.date(), context);
    }

    /// Builder: add a context.
    pub fn with_day(mut self, context: LiturgicalContext) -> Self {
        self.insert(context);
        self
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<LiturgicalContext> for FixedCalendar {
    fn from_iter<I: IntoIterator<Item = LiturgicalContext>>(iter: I) -> Self {
        let mut calendar = Self::new();
        for context in iter {
            calendar.insert(context);
        }
        calendar
    }
}

impl CalendarProvider for FixedCalendar {
    fn resolve_context(&self, date: NaiveDate) -> Result<LiturgicalContext> {
        self.days
            .get(&date)
            .cloned()
            .ok_or_else(|| LiturgyError::InvalidDate(format!("{date} is outside the calendar")))
    }
}
