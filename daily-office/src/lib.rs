//! Daily Office composition engine.
//!
//! Given a calendar date, resolves the liturgical context and appointed
//! readings, then assembles Daily Morning or Evening Prayer as an ordered
//! document of rendered sections.
//!
//! # Key Components
//!
//! - [`OfficeAssembler`]: Runs the fixed step list for an office
//! - [`PrecedenceList`]: Ordered first-match-wins content rules
//! - [`SectionRecord`]: Content a resolver selected for one section
//! - [`SectionRenderer`]: Renders records through named template slots
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use daily_office::{OfficeAssembler, OfficeConfig, OfficeType};
//!
//! let config = OfficeConfig::default();
//! let assembler = OfficeAssembler::new(Arc::new(calendar), Arc::new(table), config);
//! let text = assembler.compose_str(OfficeType::Morning, "2024-3-31")?;
//! ```

pub mod assembler;
pub mod config;
pub mod record;
pub mod render;
pub mod rules;
pub mod sections;
pub mod types;

// Re-export main types
pub use assembler::{
    steps, OfficeAssembler, OfficeDocument, OfficeStep, RenderedSection, EVENING_PRAYER,
    MORNING_PRAYER,
};
pub use config::{OfficeConfig, RendererConfig};
pub use record::{SectionRecord, TemplateSlot};
pub use render::{PlainTextRenderer, RenderError, SectionRenderer};
pub use rules::{Condition, PrecedenceList, Rule, WeekdayTable};
pub use sections::texts::CanticleId;
pub use types::{OfficeError, OfficeType, Result, SectionInput};
