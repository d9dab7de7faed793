//! Office heading and commemoration listing.

use crate::record::{CommemorationListingRecord, HeadingRecord, SectionRecord};
use crate::sections::pluralize;
use crate::types::{OfficeType, SectionInput};

pub fn heading(input: &SectionInput<'_>) -> SectionRecord {
    let heading = match input.office {
        OfficeType::Morning => "Daily Morning Prayer",
        OfficeType::Evening => "Daily Evening Prayer",
    };
    SectionRecord::Heading(HeadingRecord {
        heading: heading.to_string(),
        date: input.context.date(),
        day_name: input.context.primary().name.clone(),
    })
}

pub fn commemoration_listing(input: &SectionInput<'_>) -> SectionRecord {
    let commemorations = input.commemorations();
    let time = match input.office {
        OfficeType::Morning => "This Morning\u{2019}s",
        OfficeType::Evening => "This Evening\u{2019}s",
    };
    let noun = pluralize(commemorations.len(), "Commemoration", "Commemorations");

    SectionRecord::CommemorationListing(CommemorationListingRecord {
        heading: format!("{time} {noun}"),
        commemorations: commemorations.iter().map(|c| c.name.clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::fixtures::*;
    use liturgy::{Commemoration, LiturgicalContext, Rank, Season};

    #[test]
    fn test_heading_per_office() {
        let ctx = ferial(date(2024, 7, 10), Season::SeasonAfterPentecost);
        let set = readings();

        match heading(&morning(&ctx, &set)) {
            SectionRecord::Heading(record) => {
                assert_eq!(record.heading, "Daily Morning Prayer");
                assert_eq!(record.date, date(2024, 7, 10));
            }
            other => panic!("unexpected record: {other:?}"),
        }
        match heading(&evening(&ctx, &set)) {
            SectionRecord::Heading(record) => assert_eq!(record.heading, "Daily Evening Prayer"),
            other => panic!("unexpected record: {other:?}"),
        }
    }

    #[test]
    fn test_listing_pluralization() {
        let set = readings();
        let single = ferial(date(2024, 7, 10), Season::SeasonAfterPentecost);
        let double = LiturgicalContext::builder(date(2024, 7, 22), Season::SeasonAfterPentecost)
            .commemoration(Commemoration::new("Saint Mary Magdalene", Rank::HolyDay))
            .commemoration(Commemoration::new("Monday", Rank::Ferial))
            .evening_commemoration(Commemoration::new("Saint Mary Magdalene", Rank::HolyDay))
            .build();

        match commemoration_listing(&morning(&single, &set)) {
            SectionRecord::CommemorationListing(r) => {
                assert_eq!(r.heading, "This Morning’s Commemoration")
            }
            other => panic!("unexpected record: {other:?}"),
        }
        match commemoration_listing(&morning(&double, &set)) {
            SectionRecord::CommemorationListing(r) => {
                assert_eq!(r.heading, "This Morning’s Commemorations");
                assert_eq!(r.commemorations, vec!["Saint Mary Magdalene", "Monday"]);
            }
            other => panic!("unexpected record: {other:?}"),
        }
        match commemoration_listing(&evening(&double, &set)) {
            SectionRecord::CommemorationListing(r) => {
                assert_eq!(r.heading, "This Evening’s Commemoration")
            }
            other => panic!("unexpected record: {other:?}"),
        }
    }
}
