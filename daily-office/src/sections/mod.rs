//! Section resolvers.
//!
//! Every resolver is a pure function from [`SectionInput`] to a
//! [`SectionRecord`]. Resolvers are mutually independent; the assembler decides
//! the order in which their records appear.

pub mod canticles;
pub mod closing;
pub mod collects;
pub mod heading;
pub mod invitatory;
pub mod lessons;
pub mod opening;
pub mod texts;

use crate::record::{SectionRecord, Sentence};
use crate::types::SectionInput;

/// Signature shared by every section resolver.
pub type Resolver = fn(&SectionInput<'_>) -> SectionRecord;

/// Scripture text held in a static rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scripture {
    pub text: &'static str,
    pub citation: &'static str,
}

impl Scripture {
    pub fn to_sentence(&self) -> Sentence {
        Sentence {
            text: self.text.to_string(),
            citation: self.citation.to_string(),
        }
    }
}

/// Singular or plural form depending on how many items are listed.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count > 1 {
        plural.to_string()
    } else {
        singular.to_string()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Hand-built contexts for resolver tests.

    use chrono::NaiveDate;
    use liturgy::{
        Commemoration, Lesson, LiturgicalContext, OfficeReadingSet, OfficeReadings, Rank, Season,
    };

    use crate::types::{OfficeType, SectionInput};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn context(date: NaiveDate, season: Season, primary: Commemoration) -> LiturgicalContext {
        LiturgicalContext::builder(date, season)
            .commemoration(primary)
            .build()
    }

    /// Context whose only commemoration is an ordinary weekday.
    pub fn ferial(date: NaiveDate, season: Season) -> LiturgicalContext {
        context(date, season, Commemoration::new("Weekday", Rank::Ferial))
    }

    pub fn readings_with_psalms(morning: &str, evening: &str) -> OfficeReadingSet {
        let office = |psalms: &str| OfficeReadings {
            psalms: psalms.to_string(),
            psalms_text: None,
            first_lesson: Lesson::new("1 Kings 19:1-18")
                .with_text("Ahab told Jezebel all that Elijah had done."),
            second_lesson: Lesson::new("1 John 4:7-21"),
        };
        OfficeReadingSet {
            morning: office(morning),
            evening: office(evening),
        }
    }

    pub fn readings() -> OfficeReadingSet {
        readings_with_psalms("19, 20", "121, 122")
    }

    pub fn morning<'a>(
        context: &'a LiturgicalContext,
        readings: &'a OfficeReadingSet,
    ) -> SectionInput<'a> {
        SectionInput::new(OfficeType::Morning, context, readings)
    }

    pub fn evening<'a>(
        context: &'a LiturgicalContext,
        readings: &'a OfficeReadingSet,
    ) -> SectionInput<'a> {
        SectionInput::new(OfficeType::Evening, context, readings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "Psalm", "Psalms"), "Psalm");
        assert_eq!(pluralize(1, "Psalm", "Psalms"), "Psalm");
        assert_eq!(pluralize(2, "Psalm", "Psalms"), "Psalms");
    }
}
