//! Error types for liturgical lookups.

/// Error types for calendar and reading-table operations.
#[derive(Debug, thiserror::Error)]
pub enum LiturgyError {
    /// Date could not be parsed or lies outside the calendar's range
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Neither a holy-day override nor a standard entry exists for the date
    #[error("No office readings for {month:02}-{day:02} (primary commemoration: {commemoration})")]
    ReadingSetNotFound {
        month: u32,
        day: u32,
        commemoration: String,
    },

    /// The standard table does not cover every calendar day
    #[error("Standard reading table is missing {} day(s)", .0.len())]
    IncompleteTable(Vec<(u32, u32)>),

    /// Table or calendar data could not be parsed
    #[error("Invalid table data: {0}")]
    Table(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, LiturgyError>;
