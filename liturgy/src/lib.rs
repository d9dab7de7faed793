//! Liturgical model for the Daily Office
//!
//! This crate holds the immutable inputs the office composition engine works
//! from:
//!
//! - **Calendar data**: [`Season`], [`Rank`], [`FeastId`] and [`Commemoration`]
//! - **Context**: [`LiturgicalContext`], a per-date snapshot built once per composition
//! - **Readings**: [`OfficeReadingSet`], the psalms and lessons appointed for a date
//!
//! # Key Components
//!
//! - [`CalendarProvider`]: Trait turning a date into a [`LiturgicalContext`]
//! - [`ReadingLookup`]: Trait exposing the holy-day and standard reading tables
//! - [`resolve_readings`]: Holy-day override with standard-table fallback
//!
//! # Example
//!
//! ```ignore
//! use liturgy::{resolve_readings, CalendarProvider, FixedCalendar, InMemoryReadingTable};
//!
//! let context = calendar.resolve_context(date)?;
//! let readings = resolve_readings(&table, &context)?;
//! ```

pub mod calendar;
pub mod context;
pub mod error;
pub mod readings;
pub mod types;

// Re-export main types
pub use calendar::{parse_office_date, CalendarProvider, FixedCalendar};
pub use context::{LiturgicalContext, LiturgicalContextBuilder};
pub use error::{LiturgyError, Result};
pub use readings::{
    calendar_days, contains_citation, resolve_readings, split_citations, AbbreviatedLesson,
    InMemoryReadingTable, Lesson, OfficeReadingSet, OfficeReadings, ReadingLookup,
};
pub use types::*;
