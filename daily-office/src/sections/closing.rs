//! Creed, prayers and the closing sections shared by both offices.

use chrono::Weekday;

use liturgy::Season;

use crate::record::{
    CreedRecord, DismissalRecord, FixedPrayerRecord, GraceRecord, GraceSentence,
    IntercessionsRecord, PrayersRecord, SectionRecord, VersiclesRecord,
};
use crate::rules::{Condition, PrecedenceList, Rule};
use crate::sections::opening::versicle;
use crate::sections::texts::{APOSTLES_CREED, CHRYSOSTOM, GENERAL_THANKSGIVING, LORDS_PRAYER};
use crate::types::SectionInput;

const EASTER_ALLELUIA: &str = " Alleluia, alleluia.";

pub fn creed(_input: &SectionInput<'_>) -> SectionRecord {
    SectionRecord::Creed(CreedRecord {
        heading: "The Apostles\u{2019} Creed".to_string(),
        rubric: "Officiant and People together, all standing".to_string(),
        text: APOSTLES_CREED.to_string(),
    })
}

pub fn prayers(_input: &SectionInput<'_>) -> SectionRecord {
    SectionRecord::Prayers(PrayersRecord {
        heading: "The Prayers".to_string(),
        kyrie: vec![
            versicle("The Lord be with you.", "And with your spirit."),
            versicle("Let us pray.", ""),
            versicle("Lord, have mercy.", "Christ, have mercy."),
            versicle("Lord, have mercy.", ""),
        ],
        lords_prayer: LORDS_PRAYER.to_string(),
    })
}

const SUFFRAGES: [(&str, &str); 7] = [
    ("O Lord, show your mercy upon us;", "And grant us your salvation."),
    ("O Lord, guide those who govern us;", "And lead us in the way of justice and truth."),
    ("Clothe your ministers with righteousness;", "And let your people sing with joy."),
    ("O Lord, save your people;", "And bless your inheritance."),
    ("Give peace in our time, O Lord;", "And defend us by your mighty power."),
    ("Let not the needy, O Lord, be forgotten;", "Nor the hope of the poor be taken away."),
    ("Create in us clean hearts, O God;", "And take not your Holy Spirit from us."),
];

pub fn suffrages(_input: &SectionInput<'_>) -> SectionRecord {
    SectionRecord::Suffrages(VersiclesRecord {
        heading: "Suffrages".to_string(),
        versicles: SUFFRAGES
            .iter()
            .map(|(officiant, people)| versicle(officiant, people))
            .collect(),
    })
}

pub fn intercessions(_input: &SectionInput<'_>) -> SectionRecord {
    SectionRecord::Intercessions(IntercessionsRecord {
        heading: "Intercessions".to_string(),
        rubrics: vec![
            "The Officiant may invite the People to offer intercessions and thanksgivings.".to_string(),
            "A hymn or anthem may be sung.".to_string(),
        ],
    })
}

pub fn general_thanksgiving(_input: &SectionInput<'_>) -> SectionRecord {
    SectionRecord::FixedPrayer(FixedPrayerRecord {
        heading: "The General Thanksgiving".to_string(),
        text: GENERAL_THANKSGIVING.to_string(),
    })
}

pub fn chrysostom(_input: &SectionInput<'_>) -> SectionRecord {
    SectionRecord::FixedPrayer(FixedPrayerRecord {
        heading: "A PRAYER OF ST. JOHN CHRYSOSTOM".to_string(),
        text: CHRYSOSTOM.to_string(),
    })
}

/// Dismissal versicle, with alleluias throughout Eastertide.
pub fn dismissal(input: &SectionInput<'_>) -> SectionRecord {
    let mut officiant = String::from("Let us bless the Lord.");
    let mut people = String::from("Thanks be to God.");
    if input.context.season() == Season::Eastertide {
        officiant.push_str(EASTER_ALLELUIA);
        people.push_str(EASTER_ALLELUIA);
    }

    SectionRecord::Dismissal(DismissalRecord {
        heading: "Dismissal".to_string(),
        officiant,
        people,
    })
}

/// Closing sentence of scripture.
#[derive(Debug)]
pub struct Grace {
    pub text: &'static str,
    pub citation: &'static str,
}

pub static GRACES: PrecedenceList<Grace> = PrecedenceList {
    name: "grace",
    rules: &[
        Rule {
            name: "sunday_wednesday_saturday",
            when: Condition::Weekday(&[Weekday::Sun, Weekday::Wed, Weekday::Sat]),
            then: Grace {
                text: "The grace of our Lord Jesus Christ, and the love of God, and the fellowship of the Holy Spirit, be with us all evermore.",
                citation: "2 CORINTHIANS 13:14",
            },
        },
        Rule {
            name: "monday_thursday",
            when: Condition::Weekday(&[Weekday::Mon, Weekday::Thu]),
            then: Grace {
                text: "May the God of hope fill us with all joy and peace in believing through the power of the Holy Spirit.",
                citation: "ROMANS 15:13",
            },
        },
        Rule {
            name: "tuesday_friday",
            when: Condition::Weekday(&[Weekday::Tue, Weekday::Fri]),
            then: Grace {
                text: "Glory to God whose power, working in us, can do infinitely more than we can ask or imagine: Glory to him from generation to generation in the Church, and in Christ Jesus for ever and ever.",
                citation: "EPHESIANS 3:20-21",
            },
        },
    ],
};

pub fn grace(input: &SectionInput<'_>) -> SectionRecord {
    let grace = GRACES.resolve(input.context).map(|grace| GraceSentence {
        officiant: grace.text.to_string(),
        people: "Amen.".to_string(),
        citation: grace.citation.to_string(),
    });
    SectionRecord::Grace(GraceRecord {
        heading: "The Grace".to_string(),
        grace,
    })
}
