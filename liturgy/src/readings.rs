//! Office readings appointed for a date.
//!
//! Each date resolves to exactly one [`OfficeReadingSet`]: a holy-day set keyed
//! by the primary commemoration wins, otherwise the standard table keyed by
//! (month, day) applies. The standard table must cover all 366 calendar days.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::LiturgicalContext;
use crate::error::{LiturgyError, Result};
use crate::types::Commemoration;

/// Psalms and lessons appointed for both offices of one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeReadingSet {
    pub morning: OfficeReadings,
    pub evening: OfficeReadings,
}

/// Psalms and lessons for a single office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeReadings {
    /// Comma-separated psalm citations, e.g. `"95, 100"`
    pub psalms: String,
    /// Psalm text, when the table carries it
    #[serde(default)]
    pub psalms_text: Option<String>,
    pub first_lesson: Lesson,
    pub second_lesson: Lesson,
}

impl OfficeReadings {
    /// The individual psalm citations, trimmed, in appointed order.
    pub fn psalm_citations(&self) -> Vec<&str> {
        split_citations(&self.psalms)
    }

    /// Exact-token membership test against the appointed psalms.
    pub fn appoints_psalm(&self, psalm: &str) -> bool {
        contains_citation(&self.psalms, psalm)
    }
}

/// A scripture lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Citation, e.g. `"Isaiah 40:1-11"`
    pub citation: String,
    #[serde(default)]
    pub text: Option<String>,
    /// Shorter alternative, offered for first lessons only
    #[serde(default)]
    pub abbreviated: Option<AbbreviatedLesson>,
}

impl Lesson {
    pub fn new(citation: impl Into<String>) -> Self {
        Self {
            citation: citation.into(),
            text: None,
            abbreviated: None,
        }
    }

    /// Builder: set the lesson text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: set the abbreviated alternative.
    pub fn with_abbreviated(mut self, citation: impl Into<String>, text: Option<String>) -> Self {
        self.abbreviated = Some(AbbreviatedLesson {
            citation: citation.into(),
            text,
        });
        self
    }
}

/// Abbreviated form of a first lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbbreviatedLesson {
    pub citation: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Split a comma-separated citation list into trimmed, non-empty tokens.
pub fn split_citations(citations: &str) -> Vec<&str> {
    citations
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Whether `token` is one of the citations in `citations`.
///
/// Matching is on whole tokens: `"95, 100"` contains `"100"` but `"195, 200"`
/// does not contain `"95"`.
pub fn contains_citation(citations: &str, token: &str) -> bool {
    let token = token.trim();
    split_citations(citations).into_iter().any(|c| c == token)
}

/// Source of appointed office readings.
pub trait ReadingLookup: Send + Sync {
    /// Readings proper to a holy day, if the commemoration has any.
    fn holy_day_readings(&self, commemoration: &Commemoration) -> Option<OfficeReadingSet>;

    /// Readings from the standard table for a calendar day.
    fn standard_readings(&self, month: u32, day: u32) -> Option<OfficeReadingSet>;
}

/// Resolve the reading set for a context.
///
/// A holy-day set for the primary commemoration takes precedence over the
/// standard table. Absence of both is a data defect and is never defaulted.
pub fn resolve_readings(
    lookup: &dyn ReadingLookup,
    context: &LiturgicalContext,
) -> Result<OfficeReadingSet> {
    let primary = context.primary();
    if let Some(readings) = lookup.holy_day_readings(primary) {
        debug!(commemoration = %primary.name, "Using holy day readings");
        return Ok(readings);
    }

    let (month, day) = (context.date().month(), context.date().day());
    match lookup.standard_readings(month, day) {
        Some(readings) => {
            debug!(month, day, "Using standard readings");
            Ok(readings)
        }
        None => {
            warn!(month, day, commemoration = %primary.name, "No office readings found");
            Err(LiturgyError::ReadingSetNotFound {
                month,
                day,
                commemoration: primary.name.clone(),
            })
        }
    }
}

/// Every (month, day) pair of a leap year, Feb 29 included.
pub fn calendar_days() -> impl Iterator<Item = (u32, u32)> {
    // 2024 is a leap year
    let start = NaiveDate::from_ymd_opt(2024, 1, 1);
    start
        .into_iter()
        .flat_map(|d| d.iter_days())
        .take_while(|d| d.year() == 2024)
        .map(|d| (d.month(), d.day()))
}

/// On-disk layout of a reading table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ReadingTableFile {
    #[serde(default)]
    holy_days: Vec<HolyDayEntry>,
    #[serde(default)]
    standard: Vec<StandardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HolyDayEntry {
    commemoration: String,
    #[serde(flatten)]
    readings: OfficeReadingSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StandardEntry {
    month: u32,
    day: u32,
    #[serde(flatten)]
    readings: OfficeReadingSet,
}

/// In-memory holy-day and standard reading tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReadingTable {
    /// Holy-day sets keyed by commemoration name
    holy_days: HashMap<String, OfficeReadingSet>,
    /// Standard sets keyed by (month, day)
    standard: HashMap<(u32, u32), OfficeReadingSet>,
}

impl InMemoryReadingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tables from YAML.
    ///
    /// ```yaml
    /// holy_days:
    ///   - commemoration: Easter Day
    ///     morning: { psalms: "148, 149, 150", first_lesson: { citation: "Exodus 12:1-14" }, ... }
    ///     evening: { ... }
    /// standard:
    ///   - month: 1
    ///     day: 1
    ///     morning: { ... }
    ///     evening: { ... }
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: ReadingTableFile = serde_yaml::from_str(yaml)?;
        let mut table = Self::new();
        for entry in file.holy_days {
            table.insert_holy_day(entry.commemoration, entry.readings);
        }
        for entry in file.standard {
            table.insert_standard(entry.month, entry.day, entry.readings);
        }
        Ok(table)
    }

    /// Add or replace a holy-day set.
    pub fn insert_holy_day(
        &mut self,
        commemoration: impl Into<String>,
        readings: OfficeReadingSet,
    ) {
        self.holy_days.insert(commemoration.into(), readings);
    }

    /// Add or replace a standard-table set.
    pub fn insert_standard(&mut self, month: u32, day: u32, readings: OfficeReadingSet) {
        self.standard.insert((month, day), readings);
    }

    /// Calendar days the standard table does not cover, in calendar order.
    pub fn missing_standard_days(&self) -> Vec<(u32, u32)> {
        calendar_days()
            .filter(|key| !self.standard.contains_key(key))
            .collect()
    }

    /// Fail unless the standard table covers all 366 days.
    pub fn ensure_complete(&self) -> Result<()> {
        let missing = self.missing_standard_days();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(LiturgyError::IncompleteTable(missing))
        }
    }

    pub fn holy_day_count(&self) -> usize {
        self.holy_days.len()
    }

    pub fn standard_count(&self) -> usize {
        self.standard.len()
    }
}

impl ReadingLookup for InMemoryReadingTable {
    fn holy_day_readings(&self, commemoration: &Commemoration) -> Option<OfficeReadingSet> {
        self.holy_days.get(&commemoration.name).cloned()
    }

    fn standard_readings(&self, month: u32, day: u32) -> Option<OfficeReadingSet> {
        self.standard.get(&(month, day)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeastId, Rank, Season};

    fn readings(psalms: &str) -> OfficeReadingSet {
        let office = OfficeReadings {
            psalms: psalms.to_string(),
            psalms_text: None,
            first_lesson: Lesson::new("Genesis 1:1-19"),
            second_lesson: Lesson::new("John 1:1-18"),
        };
        OfficeReadingSet {
            morning: office.clone(),
            evening: office,
        }
    }

    fn easter_context() -> LiturgicalContext {
        let easter = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        LiturgicalContext::builder(easter, Season::Eastertide)
            .commemoration(Commemoration::feast(FeastId::EasterDay, Rank::PrincipalFeast))
            .build()
    }

    #[test]
    fn test_exact_token_membership() {
        assert!(contains_citation("95, 100", "95"));
        assert!(contains_citation("95, 100", "100"));
        assert!(!contains_citation("195, 200", "95"));
        assert!(!contains_citation("1, 2, 3", "12"));
        assert!(contains_citation("100", "100"));
        assert!(!contains_citation("", "100"));
    }

    #[test]
    fn test_psalm_citations() {
        let set = readings("19, 20,  21");
        assert_eq!(set.morning.psalm_citations(), vec!["19", "20", "21"]);
        assert!(set.morning.appoints_psalm("20"));
        assert!(!set.morning.appoints_psalm("2"));
    }

    #[test]
    fn test_holy_day_overrides_standard() {
        let mut table = InMemoryReadingTable::new();
        table.insert_standard(3, 31, readings("1, 2"));
        table.insert_holy_day("Easter Day", readings("148, 149, 150"));

        let resolved = resolve_readings(&table, &easter_context()).unwrap();
        assert_eq!(resolved.morning.psalms, "148, 149, 150");
    }

    #[test]
    fn test_standard_fallback() {
        let mut table = InMemoryReadingTable::new();
        table.insert_standard(3, 31, readings("1, 2"));

        let resolved = resolve_readings(&table, &easter_context()).unwrap();
        assert_eq!(resolved.morning.psalms, "1, 2");
    }

    #[test]
    fn test_missing_readings_is_fatal() {
        let table = InMemoryReadingTable::new();
        let err = resolve_readings(&table, &easter_context()).unwrap_err();
        match err {
            LiturgyError::ReadingSetNotFound {
                month,
                day,
                commemoration,
            } => {
                assert_eq!((month, day), (3, 31));
                assert_eq!(commemoration, "Easter Day");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_calendar_days_include_leap_day() {
        let days: Vec<_> = calendar_days().collect();
        assert_eq!(days.len(), 366);
        assert!(days.contains(&(2, 29)));
        assert_eq!(days.first(), Some(&(1, 1)));
        assert_eq!(days.last(), Some(&(12, 31)));
    }

    #[test]
    fn test_completeness_check() {
        let mut table = InMemoryReadingTable::new();
        for (month, day) in calendar_days() {
            if (month, day) != (2, 29) {
                table.insert_standard(month, day, readings("1"));
            }
        }
        assert_eq!(table.missing_standard_days(), vec![(2, 29)]);
        assert!(matches!(
            table.ensure_complete(),
            Err(LiturgyError::IncompleteTable(_))
        ));

        table.insert_standard(2, 29, readings("1"));
        assert!(table.ensure_complete().is_ok());
        assert_eq!(table.standard_count(), 366);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
holy_days:
  - commemoration: Easter Day
    morning:
      psalms: "148, 149, 150"
      first_lesson: { citation: "Exodus 12:1-14" }
      second_lesson: { citation: "John 1:1-18" }
    evening:
      psalms: "113, 114"
      first_lesson: { citation: "Isaiah 51:9-11" }
      second_lesson: { citation: "Luke 24:13-35" }
standard:
  - month: 2
    day: 29
    morning:
      psalms: "119:1-24"
      first_lesson:
        citation: "Genesis 1:1-2:3"
        abbreviated: { citation: "Genesis 1:1-19" }
      second_lesson: { citation: "John 1:1-28" }
    evening:
      psalms: "119:25-48"
      first_lesson: { citation: "Jeremiah 1" }
      second_lesson: { citation: "Romans 1" }
"#;
        let table = InMemoryReadingTable::from_yaml(yaml).unwrap();
        assert_eq!(table.holy_day_count(), 1);
        assert_eq!(table.standard_count(), 1);

        let leap = table.standard_readings(2, 29).unwrap();
        let abbreviated = leap.morning.first_lesson.abbreviated.as_ref();
        assert_eq!(
            abbreviated.map(|a| a.citation.as_str()),
            Some("Genesis 1:1-19")
        );
        assert!(table.standard_readings(3, 1).is_none());
    }
}
