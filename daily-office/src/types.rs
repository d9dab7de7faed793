//! Core types for office composition.

use serde::{Deserialize, Serialize};

use liturgy::{LiturgicalContext, LiturgyError, OfficeReadingSet, OfficeReadings};

use crate::render::RenderError;

/// The two offices the engine composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeType {
    Morning,
    Evening,
}

impl OfficeType {
    /// Get the office name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Morning => "Morning Prayer",
            Self::Evening => "Evening Prayer",
        }
    }

    /// Both offices, morning first
    pub fn all() -> [Self; 2] {
        [Self::Morning, Self::Evening]
    }
}

/// Everything a section resolver may read.
///
/// Resolvers only see the shared immutable inputs, never each other's output.
#[derive(Debug, Clone, Copy)]
pub struct SectionInput<'a> {
    pub office: OfficeType,
    pub context: &'a LiturgicalContext,
    pub readings: &'a OfficeReadingSet,
}

impl<'a> SectionInput<'a> {
    pub fn new(
        office: OfficeType,
        context: &'a LiturgicalContext,
        readings: &'a OfficeReadingSet,
    ) -> Self {
        Self {
            office,
            context,
            readings,
        }
    }

    /// Readings appointed for this office.
    pub fn office_readings(&self) -> &'a OfficeReadings {
        match self.office {
            OfficeType::Morning => &self.readings.morning,
            OfficeType::Evening => &self.readings.evening,
        }
    }

    /// Commemorations observed at this office.
    pub fn commemorations(&self) -> &'a [liturgy::Commemoration] {
        match self.office {
            OfficeType::Morning => self.context.commemorations(),
            OfficeType::Evening => self.context.evening_commemorations(),
        }
    }
}

/// Error types for office composition.
#[derive(Debug, thiserror::Error)]
pub enum OfficeError {
    /// Calendar or reading lookup failed
    #[error(transparent)]
    Liturgy(#[from] LiturgyError),

    /// A section could not be rendered
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, OfficeError>;
