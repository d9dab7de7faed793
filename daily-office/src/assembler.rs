//! Office assembly.
//!
//! Each office is a fixed, statically declared list of steps. A step names a
//! resolver and the template slot its record renders through. Composition
//! resolves the liturgical context and reading set once, runs every step
//! against them in declared order, and collects the rendered sections.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use liturgy::{parse_office_date, resolve_readings, CalendarProvider, ReadingLookup};

use crate::config::OfficeConfig;
use crate::record::{SectionRecord, TemplateSlot};
use crate::render::{PlainTextRenderer, SectionRenderer};
use crate::sections::{
    canticles, closing, collects, heading, invitatory, lessons, opening, Resolver,
};
use crate::types::{OfficeType, Result, SectionInput};

/// One section of an office.
#[derive(Clone, Copy)]
pub struct OfficeStep {
    pub name: &'static str,
    pub resolve: Resolver,
    pub slot: TemplateSlot,
}

impl std::fmt::Debug for OfficeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfficeStep")
            .field("name", &self.name)
            .field("slot", &self.slot)
            .finish()
    }
}

const fn step(name: &'static str, resolve: Resolver, slot: TemplateSlot) -> OfficeStep {
    OfficeStep {
        name,
        resolve,
        slot,
    }
}

pub static MORNING_PRAYER: &[OfficeStep] = &[
    step("heading", heading::heading, TemplateSlot::Heading),
    step(
        "commemoration_listing",
        heading::commemoration_listing,
        TemplateSlot::CommemorationListing,
    ),
    step(
        "opening_sentence",
        opening::opening_sentence,
        TemplateSlot::OpeningSentence,
    ),
    step("confession", opening::confession, TemplateSlot::Confession),
    step("preces", opening::preces, TemplateSlot::Preces),
    step(
        "invitatory",
        invitatory::invitatory,
        TemplateSlot::Invitatory,
    ),
    step("psalms", lessons::psalms, TemplateSlot::Psalms),
    step("first_lesson", lessons::first_lesson, TemplateSlot::Reading),
    step(
        "first_canticle",
        canticles::first_canticle,
        TemplateSlot::Canticle,
    ),
    step(
        "second_lesson",
        lessons::second_lesson,
        TemplateSlot::Reading,
    ),
    step(
        "second_canticle",
        canticles::second_canticle,
        TemplateSlot::Canticle,
    ),
    step("creed", closing::creed, TemplateSlot::Creed),
    step("prayers", closing::prayers, TemplateSlot::Prayers),
    step("suffrages", closing::suffrages, TemplateSlot::Suffrages),
    step(
        "collects_of_the_day",
        collects::collects_of_the_day,
        TemplateSlot::CollectsOfTheDay,
    ),
    step(
        "weekly_collect",
        collects::weekly_collect,
        TemplateSlot::Collects,
    ),
    step(
        "mission_collect",
        collects::mission_collect,
        TemplateSlot::MissionCollect,
    ),
    step(
        "intercessions",
        closing::intercessions,
        TemplateSlot::Intercessions,
    ),
    step(
        "general_thanksgiving",
        closing::general_thanksgiving,
        TemplateSlot::GeneralThanksgiving,
    ),
    step("chrysostom", closing::chrysostom, TemplateSlot::Chrysostom),
    step("dismissal", closing::dismissal, TemplateSlot::Dismissal),
    step("grace", closing::grace, TemplateSlot::Grace),
];

pub static EVENING_PRAYER: &[OfficeStep] = &[
    step("heading", heading::heading, TemplateSlot::Heading),
    step(
        "commemoration_listing",
        heading::commemoration_listing,
        TemplateSlot::CommemorationListing,
    ),
    step(
        "opening_sentence",
        opening::opening_sentence,
        TemplateSlot::OpeningSentence,
    ),
    step("confession", opening::confession, TemplateSlot::Confession),
    step("preces", opening::preces, TemplateSlot::Preces),
    step("hymn", canticles::evening_hymn, TemplateSlot::Hymn),
    step("psalms", lessons::psalms, TemplateSlot::Psalms),
    step("first_lesson", lessons::first_lesson, TemplateSlot::Reading),
    step(
        "first_canticle",
        canticles::first_canticle,
        TemplateSlot::Canticle,
    ),
    step(
        "second_lesson",
        lessons::second_lesson,
        TemplateSlot::Reading,
    ),
    step(
        "second_canticle",
        canticles::second_canticle,
        TemplateSlot::Canticle,
    ),
    step("creed", closing::creed, TemplateSlot::Creed),
    step("prayers", closing::prayers, TemplateSlot::Prayers),
    step("suffrages", closing::suffrages, TemplateSlot::Suffrages),
    step(
        "collects_of_the_day",
        collects::collects_of_the_day,
        TemplateSlot::CollectsOfTheDay,
    ),
    step(
        "weekly_collect",
        collects::weekly_collect,
        TemplateSlot::Collects,
    ),
    step(
        "mission_collect",
        collects::mission_collect,
        TemplateSlot::MissionCollect,
    ),
    step(
        "intercessions",
        closing::intercessions,
        TemplateSlot::Intercessions,
    ),
    step(
        "general_thanksgiving",
        closing::general_thanksgiving,
        TemplateSlot::GeneralThanksgiving,
    ),
    step("chrysostom", closing::chrysostom, TemplateSlot::Chrysostom),
    step("dismissal", closing::dismissal, TemplateSlot::Dismissal),
    step("grace", closing::grace, TemplateSlot::Grace),
];

/// Declared steps for an office.
pub fn steps(office: OfficeType) -> &'static [OfficeStep] {
    match office {
        OfficeType::Morning => MORNING_PRAYER,
        OfficeType::Evening => EVENING_PRAYER,
    }
}

/// A resolved and rendered section.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub name: &'static str,
    pub slot: TemplateSlot,
    pub record: SectionRecord,
    pub text: String,
}

/// A composed office.
#[derive(Debug, Clone, Serialize)]
pub struct OfficeDocument {
    pub office: OfficeType,
    pub date: NaiveDate,
    pub sections: Vec<RenderedSection>,
}

impl OfficeDocument {
    /// Rendered sections joined with a separator.
    pub fn text(&self, separator: &str) -> String {
        self.sections
            .iter()
            .map(|section| section.text.trim_end())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Section names in document order.
    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|section| section.name).collect()
    }

    /// Find a section by step name.
    pub fn section(&self, name: &str) -> Option<&RenderedSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// SHA-256 over the office, date and every rendered section.
    pub fn digest(&self) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.office.name().as_bytes());
        hasher.update(self.date.to_string().as_bytes());
        for section in &self.sections {
            hasher.update(section.name.as_bytes());
            hasher.update(section.text.as_bytes());
        }

        hex::encode(hasher.finalize())
    }
}

/// Composes offices from a calendar, a reading table and a renderer.
pub struct OfficeAssembler {
    calendar: Arc<dyn CalendarProvider>,
    readings: Arc<dyn ReadingLookup>,
    renderer: Arc<dyn SectionRenderer>,
    config: OfficeConfig,
}

impl OfficeAssembler {
    /// Create an assembler rendering plain text per `config`.
    pub fn new(
        calendar: Arc<dyn CalendarProvider>,
        readings: Arc<dyn ReadingLookup>,
        config: OfficeConfig,
    ) -> Self {
        let renderer = Arc::new(PlainTextRenderer::new(config.renderer.clone()));
        Self {
            calendar,
            readings,
            renderer,
            config,
        }
    }

    /// Replace the renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn SectionRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    /// Compose an office for a date.
    pub fn compose(&self, office: OfficeType, date: NaiveDate) -> Result<OfficeDocument> {
        let context = self.calendar.resolve_context(date)?;
        let readings = resolve_readings(self.readings.as_ref(), &context)?;
        let input = SectionInput::new(office, &context, &readings);

        let steps = steps(office);
        let mut sections = Vec::with_capacity(steps.len());
        for step in steps {
            let record = (step.resolve)(&input);
            let text = self.renderer.render(step.slot, &record)?;
            debug!(
                office = office.name(),
                step = step.name,
                kind = record.kind(),
                "Section rendered"
            );
            sections.push(RenderedSection {
                name: step.name,
                slot: step.slot,
                record,
                text,
            });
        }

        info!(
            office = office.name(),
            date = %date,
            primary = %context.primary().name,
            season = context.season().as_str(),
            sections = sections.len(),
            "Office composed"
        );

        Ok(OfficeDocument {
            office,
            date,
            sections,
        })
    }

    /// Compose an office and return its text.
    pub fn compose_text(&self, office: OfficeType, date: NaiveDate) -> Result<String> {
        let document = self.compose(office, date)?;
        Ok(document.text(&self.config.renderer.section_separator))
    }

    /// Compose an office for a `YYYY-M-D` date string.
    pub fn compose_str(&self, office: OfficeType, date: &str) -> Result<String> {
        let date = parse_office_date(date)?;
        self.compose_text(office, date)
    }
}
