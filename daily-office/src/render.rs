//! Rendering section records to text.
//!
//! Records are rendered through a named [`TemplateSlot`]. The renderer is a
//! trait so callers can swap in their own templating; [`PlainTextRenderer`]
//! is the built-in implementation.

use crate::config::RendererConfig;
use crate::record::*;
use crate::sections::texts::{CONFESSION, EXHORTATION};

/// Rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template slot '{slot}' cannot render a '{kind}' record")]
    SlotMismatch {
        slot: &'static str,
        kind: &'static str,
    },
}

/// Renders one section record through a template slot.
pub trait SectionRenderer: Send + Sync {
    fn render(&self, slot: TemplateSlot, record: &SectionRecord) -> Result<String, RenderError>;
}

/// Renders records as plain text.
#[derive(Debug, Clone, Default)]
pub struct PlainTextRenderer {
    config: RendererConfig,
}

impl PlainTextRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn heading(&self, out: &mut String, heading: &str) {
        if self.config.uppercase_headings {
            out.push_str(&heading.to_uppercase());
        } else {
            out.push_str(heading);
        }
        out.push('\n');
    }

    fn citation(&self, out: &mut String, citation: &str) {
        if self.config.show_citations && !citation.is_empty() {
            out.push_str(citation);
            out.push('\n');
        }
    }

    fn versicles(&self, out: &mut String, versicles: &[Versicle]) {
        for versicle in versicles {
            out.push_str(&format!("Officiant: {}\n", versicle.officiant));
            if !versicle.people.is_empty() {
                out.push_str(&format!("People: {}\n", versicle.people));
            }
        }
    }

    fn lesson(&self, out: &mut String, record: &LessonRecord) {
        self.heading(out, &record.heading);
        let prefer_abbreviated = self.config.prefer_abbreviated_lessons;
        let (passage, reading) = match (&record.abbreviated_passage, prefer_abbreviated) {
            (Some(passage), true) => (passage, record.abbreviated_reading.as_ref()),
            _ => (&record.passage, record.reading.as_ref()),
        };
        out.push_str(&format!("A Reading from {}\n", passage));
        if let Some(reading) = reading {
            out.push_str(reading);
            out.push('\n');
        }
        out.push_str("The Word of the Lord.\n");
        out.push_str("People: Thanks be to God.\n");
    }

    fn canticle(&self, out: &mut String, record: &CanticleRecord) {
        self.heading(out, &record.heading);
        out.push_str(&record.subheading);
        out.push('\n');
        out.push_str(&record.rubric);
        out.push('\n');
        if let Some(antiphon) = &record.antiphon {
            out.push_str(&format!("{}\n{}\n", antiphon.first_line, antiphon.second_line));
        }
        out.push_str(&record.text);
        out.push('\n');
        if let Some(antiphon) = &record.antiphon {
            out.push_str(&format!("{}\n{}\n", antiphon.first_line, antiphon.second_line));
        }
        self.citation(out, &record.citation);
    }

    fn render_record(&self, record: &SectionRecord) -> String {
        let mut out = String::new();
        match record {
            SectionRecord::Heading(r) => {
                self.heading(&mut out, &r.heading);
                out.push_str(&format!("{}\n{}\n", r.date.format("%A, %B %-d, %Y"), r.day_name));
            }
            SectionRecord::CommemorationListing(r) => {
                self.heading(&mut out, &r.heading);
                for name in &r.commemorations {
                    out.push_str(name);
                    out.push('\n');
                }
            }
            SectionRecord::OpeningSentence(r) => {
                self.heading(&mut out, &r.heading);
                if let Some(sentence) = &r.sentence {
                    out.push_str(&sentence.text);
                    out.push('\n');
                    self.citation(&mut out, &sentence.citation);
                }
            }
            SectionRecord::Confession(r) => {
                self.heading(&mut out, &r.heading);
                if r.long_form {
                    out.push_str(EXHORTATION);
                    out.push('\n');
                }
                out.push_str(CONFESSION);
                out.push('\n');
            }
            SectionRecord::Preces(r) | SectionRecord::Suffrages(r) => {
                self.heading(&mut out, &r.heading);
                self.versicles(&mut out, &r.versicles);
            }
            SectionRecord::Hymn(r) => {
                self.heading(&mut out, &r.heading);
                out.push_str(&format!("{}\n{}\n{}\n", r.subheading, r.rubric, r.text));
            }
            SectionRecord::Canticle(r) => self.canticle(&mut out, r),
            SectionRecord::Psalms(r) => {
                self.heading(&mut out, &r.heading);
                out.push_str(&format!("Psalm {}\n", r.citations.join(", ")));
                if let Some(text) = &r.text {
                    out.push_str(text);
                    out.push('\n');
                }
            }
            SectionRecord::Lesson(r) => self.lesson(&mut out, r),
            SectionRecord::Creed(r) => {
                self.heading(&mut out, &r.heading);
                out.push_str(&format!("{}\n{}\n", r.rubric, r.text));
            }
            SectionRecord::Prayers(r) => {
                self.heading(&mut out, &r.heading);
                self.versicles(&mut out, &r.kyrie);
                out.push_str(&r.lords_prayer);
                out.push('\n');
            }
            SectionRecord::CollectsOfTheDay(r) => {
                self.heading(&mut out, &r.heading);
                for (name, collect) in &r.collects {
                    out.push_str(&format!("{}\n{}\nPeople: Amen.\n", name, collect));
                }
            }
            SectionRecord::WeeklyCollect(r) => {
                self.heading(&mut out, &r.title);
                out.push_str(&format!("{}\n{}\nPeople: Amen.\n", r.weekday, r.collect));
            }
            SectionRecord::MissionCollect(r) => {
                self.heading(&mut out, &r.heading);
                out.push_str(&format!("{}\nPeople: Amen.\n", r.collect));
            }
            SectionRecord::Intercessions(r) => {
                self.heading(&mut out, &r.heading);
                for rubric in &r.rubrics {
                    out.push_str(rubric);
                    out.push('\n');
                }
            }
            SectionRecord::FixedPrayer(r) => {
                self.heading(&mut out, &r.heading);
                out.push_str(&r.text);
                out.push('\n');
            }
            SectionRecord::Dismissal(r) => {
                self.heading(&mut out, &r.heading);
                out.push_str(&format!("Officiant: {}\nPeople: {}\n", r.officiant, r.people));
            }
            SectionRecord::Grace(r) => {
                self.heading(&mut out, &r.heading);
                if let Some(grace) = &r.grace {
                    out.push_str(&format!("{}\nPeople: {}\n", grace.officiant, grace.people));
                    self.citation(&mut out, &grace.citation);
                }
            }
        }
        out
    }
}

impl SectionRenderer for PlainTextRenderer {
    fn render(&self, slot: TemplateSlot, record: &SectionRecord) -> Result<String, RenderError> {
        if !slot.accepts(record) {
            return Err(RenderError::SlotMismatch {
                slot: slot.as_str(),
                kind: record.kind(),
            });
        }
        Ok(self.render_record(record))
    }
}
