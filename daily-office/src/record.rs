//! Section records and the template slots that render them.
//!
//! A [`SectionRecord`] is the content a resolver selected for one section of
//! an office. Each variant matches exactly one kind of [`TemplateSlot`].

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::sections::texts::CanticleId;

/// Named template slot a record is rendered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSlot {
    Heading,
    CommemorationListing,
    OpeningSentence,
    Confession,
    Preces,
    Hymn,
    Invitatory,
    Psalms,
    Reading,
    Canticle,
    Creed,
    Prayers,
    Suffrages,
    CollectsOfTheDay,
    Collects,
    MissionCollect,
    Intercessions,
    GeneralThanksgiving,
    Chrysostom,
    Dismissal,
    Grace,
}

impl TemplateSlot {
    /// Template path for this slot
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "office/heading",
            Self::CommemorationListing => "office/commemoration_listing",
            Self::OpeningSentence => "office/opening_sentence",
            Self::Confession => "office/confession",
            Self::Preces => "office/preces",
            Self::Hymn => "office/hymn",
            Self::Invitatory => "office/invitatory",
            Self::Psalms => "office/psalms",
            Self::Reading => "office/reading",
            Self::Canticle => "office/canticle",
            Self::Creed => "office/creed",
            Self::Prayers => "office/prayers",
            Self::Suffrages => "office/suffrages",
            Self::CollectsOfTheDay => "office/collects_of_the_day",
            Self::Collects => "office/collects",
            Self::MissionCollect => "office/mission_collect",
            Self::Intercessions => "office/intercessions",
            Self::GeneralThanksgiving => "office/general_thanksgiving",
            Self::Chrysostom => "office/chrysostom",
            Self::Dismissal => "office/dismissal",
            Self::Grace => "office/grace",
        }
    }

    /// Whether a record carries the fields this slot expects.
    pub fn accepts(&self, record: &SectionRecord) -> bool {
        matches!(
            (self, record),
            (Self::Heading, SectionRecord::Heading(_))
                | (Self::CommemorationListing, SectionRecord::CommemorationListing(_))
                | (Self::OpeningSentence, SectionRecord::OpeningSentence(_))
                | (Self::Confession, SectionRecord::Confession(_))
                | (Self::Preces, SectionRecord::Preces(_))
                | (Self::Hymn, SectionRecord::Hymn(_))
                | (Self::Invitatory, SectionRecord::Canticle(_))
                | (Self::Psalms, SectionRecord::Psalms(_))
                | (Self::Reading, SectionRecord::Lesson(_))
                | (Self::Canticle, SectionRecord::Canticle(_))
                | (Self::Creed, SectionRecord::Creed(_))
                | (Self::Prayers, SectionRecord::Prayers(_))
                | (Self::Suffrages, SectionRecord::Suffrages(_))
                | (Self::CollectsOfTheDay, SectionRecord::CollectsOfTheDay(_))
                | (Self::Collects, SectionRecord::WeeklyCollect(_))
                | (Self::MissionCollect, SectionRecord::MissionCollect(_))
                | (Self::Intercessions, SectionRecord::Intercessions(_))
                | (Self::GeneralThanksgiving, SectionRecord::FixedPrayer(_))
                | (Self::Chrysostom, SectionRecord::FixedPrayer(_))
                | (Self::Dismissal, SectionRecord::Dismissal(_))
                | (Self::Grace, SectionRecord::Grace(_))
        )
    }
}

/// Content selected for one section of an office.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionRecord {
    Heading(HeadingRecord),
    CommemorationListing(CommemorationListingRecord),
    OpeningSentence(OpeningSentenceRecord),
    Confession(ConfessionRecord),
    Preces(VersiclesRecord),
    Hymn(HymnRecord),
    Canticle(CanticleRecord),
    Psalms(PsalmsRecord),
    Lesson(LessonRecord),
    Creed(CreedRecord),
    Prayers(PrayersRecord),
    Suffrages(VersiclesRecord),
    CollectsOfTheDay(CollectsOfTheDayRecord),
    WeeklyCollect(WeeklyCollectRecord),
    MissionCollect(MissionCollectRecord),
    Intercessions(IntercessionsRecord),
    FixedPrayer(FixedPrayerRecord),
    Dismissal(DismissalRecord),
    Grace(GraceRecord),
}

impl SectionRecord {
    /// Record kind, as serialized
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading(_) => "heading",
            Self::CommemorationListing(_) => "commemoration_listing",
            Self::OpeningSentence(_) => "opening_sentence",
            Self::Confession(_) => "confession",
            Self::Preces(_) => "preces",
            Self::Hymn(_) => "hymn",
            Self::Canticle(_) => "canticle",
            Self::Psalms(_) => "psalms",
            Self::Lesson(_) => "lesson",
            Self::Creed(_) => "creed",
            Self::Prayers(_) => "prayers",
            Self::Suffrages(_) => "suffrages",
            Self::CollectsOfTheDay(_) => "collects_of_the_day",
            Self::WeeklyCollect(_) => "weekly_collect",
            Self::MissionCollect(_) => "mission_collect",
            Self::Intercessions(_) => "intercessions",
            Self::FixedPrayer(_) => "fixed_prayer",
            Self::Dismissal(_) => "dismissal",
            Self::Grace(_) => "grace",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingRecord {
    pub heading: String,
    pub date: NaiveDate,
    /// Name of the primary commemoration
    pub day_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommemorationListingRecord {
    pub heading: String,
    pub commemorations: Vec<String>,
}

/// A scripture sentence with its citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub citation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningSentenceRecord {
    pub heading: String,
    /// Absent when no rule matched
    pub sentence: Option<Sentence>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfessionRecord {
    pub heading: String,
    /// Long form with the exhortation, used on fast days
    pub long_form: bool,
}

/// An officiant line and the people's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Versicle {
    pub officiant: String,
    pub people: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersiclesRecord {
    pub heading: String,
    pub versicles: Vec<Versicle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HymnRecord {
    pub heading: String,
    pub subheading: String,
    pub rubric: String,
    pub text: String,
}

/// Paired antiphon lines said before and after an invitatory canticle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Antiphon {
    pub first_line: String,
    pub second_line: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanticleRecord {
    pub canticle: CanticleId,
    pub heading: String,
    pub subheading: String,
    pub rubric: String,
    pub text: String,
    /// May be empty
    pub citation: String,
    pub antiphon: Option<Antiphon>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsalmsRecord {
    pub heading: String,
    pub citations: Vec<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonRecord {
    pub heading: String,
    /// Book name derived from the citation
    pub book: String,
    pub passage: String,
    pub reading: Option<String>,
    pub abbreviated_passage: Option<String>,
    pub abbreviated_reading: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreedRecord {
    pub heading: String,
    pub rubric: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrayersRecord {
    pub heading: String,
    pub kyrie: Vec<Versicle>,
    pub lords_prayer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectsOfTheDayRecord {
    pub heading: String,
    /// Collect text keyed by commemoration name, in commemoration order
    pub collects: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyCollectRecord {
    pub title: String,
    pub weekday: String,
    pub collect: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionCollectRecord {
    pub heading: String,
    pub collect: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntercessionsRecord {
    pub heading: String,
    pub rubrics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedPrayerRecord {
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DismissalRecord {
    pub heading: String,
    pub officiant: String,
    pub people: String,
}

/// A closing sentence of scripture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraceSentence {
    pub officiant: String,
    pub people: String,
    pub citation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraceRecord {
    pub heading: String,
    pub grace: Option<GraceSentence>,
}
