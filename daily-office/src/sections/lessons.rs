//! Appointed psalms and the two lessons.

use liturgy::Lesson;

use crate::record::{LessonRecord, PsalmsRecord, SectionRecord};
use crate::sections::pluralize;
use crate::types::SectionInput;

/// Book name for a first lesson: ASCII letters and spaces survive.
///
/// `"1 Kings 19:1-18"` becomes `" Kings "`. Surrounding spaces are kept.
pub fn first_lesson_book(citation: &str) -> String {
    citation
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect()
}

/// Book name for a second lesson: only ASCII letters survive.
///
/// `"1 John 4:7-21"` becomes `"John"`, `"Song of Songs 2"` becomes
/// `"SongofSongs"`.
pub fn second_lesson_book(citation: &str) -> String {
    citation.chars().filter(char::is_ascii_alphabetic).collect()
}

pub fn psalms(input: &SectionInput<'_>) -> SectionRecord {
    let readings = input.office_readings();
    let citations: Vec<String> = readings
        .psalm_citations()
        .into_iter()
        .map(str::to_string)
        .collect();
    let noun = pluralize(citations.len(), "Psalm", "Psalms");

    SectionRecord::Psalms(PsalmsRecord {
        heading: format!("The {noun} Appointed"),
        citations,
        text: readings.psalms_text.clone(),
    })
}

fn lesson_record(heading: &str, lesson: &Lesson, book: String) -> LessonRecord {
    let abbreviated = lesson.abbreviated.as_ref();
    LessonRecord {
        heading: heading.to_string(),
        book,
        passage: lesson.citation.clone(),
        reading: lesson.text.clone(),
        abbreviated_passage: abbreviated.map(|a| a.citation.clone()),
        abbreviated_reading: abbreviated.and_then(|a| a.text.clone()),
    }
}

pub fn first_lesson(input: &SectionInput<'_>) -> SectionRecord {
    let lesson = &input.office_readings().first_lesson;
    SectionRecord::Lesson(lesson_record(
        "The First Lesson",
        lesson,
        first_lesson_book(&lesson.citation),
    ))
}

pub fn second_lesson(input: &SectionInput<'_>) -> SectionRecord {
    let lesson = &input.office_readings().second_lesson;
    SectionRecord::Lesson(lesson_record(
        "The Second Lesson",
        lesson,
        second_lesson_book(&lesson.citation),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::fixtures::*;
    use liturgy::Season;

    #[test]
    fn test_book_extraction_asymmetry() {
        assert_eq!(first_lesson_book("1 Kings 19:1-18"), " Kings ");
        assert_eq!(second_lesson_book("1 John 4:7-21"), "John");
        assert_eq!(first_lesson_book("Song of Songs 2:8-13"), "Song of Songs ");
        assert_eq!(second_lesson_book("Song of Songs 2:8-13"), "SongofSongs");
    }

    #[test]
    fn test_psalms_heading_pluralized() {
        let ctx = ferial(date(2024, 7, 10), Season::SeasonAfterPentecost);

        let set = readings_with_psalms("19, 20", "121");
        match psalms(&morning(&ctx, &set)) {
            SectionRecord::Psalms(record) => {
                assert_eq!(record.heading, "The Psalms Appointed");
                assert_eq!(record.citations, vec!["19", "20"]);
            }
            other => panic!("unexpected record: {other:?}"),
        }
        match psalms(&evening(&ctx, &set)) {
            SectionRecord::Psalms(record) => {
                assert_eq!(record.heading, "The Psalm Appointed");
                assert_eq!(record.citations, vec!["121"]);
            }
            other => panic!("unexpected record: {other:?}"),
        }
    }

    #[test]
    fn test_lessons_follow_office() {
        let ctx = ferial(date(2024, 7, 10), Season::SeasonAfterPentecost);
        let mut set = readings();
        set.evening.first_lesson = Lesson::new("Isaiah 40:1-11")
            .with_text("Comfort, comfort my people.")
            .with_abbreviated("Isaiah 40:1-5", Some("Comfort my people.".to_string()));

        match first_lesson(&morning(&ctx, &set)) {
            SectionRecord::Lesson(record) => {
                assert_eq!(record.heading, "The First Lesson");
                assert_eq!(record.passage, "1 Kings 19:1-18");
                assert!(record.reading.is_some());
                assert!(record.abbreviated_passage.is_none());
            }
            other => panic!("unexpected record: {other:?}"),
        }
        match first_lesson(&evening(&ctx, &set)) {
            SectionRecord::Lesson(record) => {
                assert_eq!(record.book, "Isaiah ");
                assert_eq!(record.abbreviated_passage.as_deref(), Some("Isaiah 40:1-5"));
                assert_eq!(
                    record.abbreviated_reading.as_deref(),
                    Some("Comfort my people.")
                );
            }
            other => panic!("unexpected record: {other:?}"),
        }
        match second_lesson(&evening(&ctx, &set)) {
            SectionRecord::Lesson(record) => {
                assert_eq!(record.heading, "The Second Lesson");
                assert_eq!(record.book, "John");
                assert!(record.reading.is_none());
            }
            other => panic!("unexpected record: {other:?}"),
        }
    }
}
