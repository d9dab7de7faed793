//! The Morning Prayer invitatory: antiphon and canticle.
//!
//! The antiphon comes from an ordered precedence list keyed on named feast,
//! season and weekday group. The canticle is chosen by a second ordered list
//! that also looks at the appointed psalms, so that a psalm already appointed
//! for the day is not said twice.

use chrono::Weekday;

use liturgy::{FeastId, Rank, Season};

use crate::record::{Antiphon, CanticleRecord, SectionRecord};
use crate::rules::{Condition, PrecedenceList, Rule};
use crate::sections::texts::{CanticleId, ANTIPHON_RESPONSE, STANDING};
use crate::types::SectionInput;

const SAINTS: &str = "The Lord is glorious in his saints:";
const ASCENDED: &str = "Alleluia. Christ the Lord has ascended into heaven:";
const RISEN: &str = "Alleluia. The Lord is risen indeed:";
const GLORY: &str = "The Lord has shown forth his glory:";

/// First lines of the invitatory antiphon.
pub static ANTIPHONS: PrecedenceList<&'static str> = PrecedenceList {
    name: "invitatory_antiphon",
    rules: &[
        Rule {
            name: "incarnation",
            when: Condition::AnyFeast(&[FeastId::Presentation, FeastId::Annunciation]),
            then: "The Word was made flesh and dwelt among us:",
        },
        Rule {
            name: "day_of_pentecost",
            when: Condition::Feast(FeastId::DayOfPentecost),
            then: "Alleluia. The Spirit of the Lord renews the face of the earth:",
        },
        Rule {
            name: "trinity_sunday",
            when: Condition::Feast(FeastId::TrinitySunday),
            then: "Father, Son, and Holy Spirit, one God:",
        },
        Rule {
            name: "easter_day",
            when: Condition::Feast(FeastId::EasterDay),
            then: RISEN,
        },
        Rule {
            name: "ascension_day",
            when: Condition::Feast(FeastId::AscensionDay),
            then: ASCENDED,
        },
        Rule {
            name: "transfiguration",
            when: Condition::Feast(FeastId::Transfiguration),
            then: GLORY,
        },
        Rule {
            name: "all_saints_day",
            when: Condition::Feast(FeastId::AllSaintsDay),
            then: SAINTS,
        },
        Rule {
            name: "holy_day",
            when: Condition::All(&[
                Condition::Rank(Rank::HolyDay),
                Condition::Not(&Condition::AnyFeast(&[
                    FeastId::HolyName,
                    FeastId::Visitation,
                    FeastId::HolyCrossDay,
                    FeastId::HolyInnocents,
                ])),
            ]),
            then: SAINTS,
        },
        Rule {
            name: "lent",
            when: Condition::Season(Season::Lent),
            then: "The Lord is full of compassion and mercy:",
        },
        Rule {
            name: "advent",
            when: Condition::Season(Season::Advent),
            then: "Our King and Savior now draws near:",
        },
        Rule {
            name: "christmastide",
            when: Condition::Season(Season::Christmastide),
            then: "Alleluia, to us a child is born:",
        },
        Rule {
            name: "epiphanytide",
            when: Condition::Season(Season::Epiphanytide),
            then: GLORY,
        },
        Rule {
            name: "eastertide_ascension",
            when: Condition::All(&[
                Condition::Season(Season::Eastertide),
                Condition::Observes(FeastId::AscensionDay),
            ]),
            then: ASCENDED,
        },
        Rule {
            name: "eastertide",
            when: Condition::Season(Season::Eastertide),
            then: RISEN,
        },
        Rule {
            name: "monday_thursday_sunday",
            when: Condition::Weekday(&[Weekday::Mon, Weekday::Thu, Weekday::Sun]),
            then: "The earth is the Lord\u{2019}s for he made it:",
        },
        Rule {
            name: "tuesday_friday",
            when: Condition::Weekday(&[Weekday::Tue, Weekday::Fri]),
            then: "Worship the Lord in the beauty of holiness:",
        },
        Rule {
            name: "wednesday_saturday",
            when: Condition::Weekday(&[Weekday::Wed, Weekday::Sat]),
            then: "The mercy of the Lord is everlasting:",
        },
    ],
};

/// A step in invitatory canticle selection.
pub struct CanticleRule {
    pub name: &'static str,
    pub when: fn(&SectionInput<'_>) -> bool,
    pub canticle: CanticleId,
}

fn is_feast_or_sunday(input: &SectionInput<'_>) -> bool {
    input.context.primary_rank().is_feast_or_sunday()
}

/// Canticle selection, first match wins.
pub static CANTICLE_RULES: &[CanticleRule] = &[
    CanticleRule {
        name: "easter_octave",
        when: |input| {
            input.context.is_feast(FeastId::EasterDay)
                || input.context.is_feast(FeastId::EasterWeek)
        },
        canticle: CanticleId::PaschaNostrum,
    },
    CanticleRule {
        name: "eastertide_feast",
        when: |input| input.context.season() == Season::Eastertide && is_feast_or_sunday(input),
        canticle: CanticleId::PaschaNostrum,
    },
    CanticleRule {
        name: "feast_with_psalm_100",
        when: |input| is_feast_or_sunday(input) && input.office_readings().appoints_psalm("100"),
        canticle: CanticleId::Venite,
    },
    CanticleRule {
        name: "feast",
        when: is_feast_or_sunday,
        canticle: CanticleId::Jubilate,
    },
    CanticleRule {
        name: "psalm_95",
        when: |input| input.office_readings().appoints_psalm("95"),
        canticle: CanticleId::Jubilate,
    },
    CanticleRule {
        name: "default",
        when: |_| true,
        canticle: CanticleId::Venite,
    },
];

/// The canticle rule that applies to an input.
pub fn canticle_rule(input: &SectionInput<'_>) -> &'static CanticleRule {
    CANTICLE_RULES
        .iter()
        .find(|rule| (rule.when)(input))
        .unwrap_or(&CANTICLE_RULES[CANTICLE_RULES.len() - 1])
}

/// Antiphon for the day, if any rule applies.
pub fn antiphon(input: &SectionInput<'_>) -> Option<Antiphon> {
    ANTIPHONS.resolve(input.context).map(|first_line| Antiphon {
        first_line: first_line.to_string(),
        second_line: ANTIPHON_RESPONSE.to_string(),
    })
}

pub fn invitatory(input: &SectionInput<'_>) -> SectionRecord {
    let rule = canticle_rule(input);
    let canticle = rule.canticle;
    let lenten = input.context.season().is_penitential();
    tracing::debug!(rule = rule.name, canticle = ?canticle, "Invitatory canticle selected");

    let antiphon = match canticle {
        CanticleId::PaschaNostrum => None,
        _ => antiphon(input),
    };

    SectionRecord::Canticle(CanticleRecord {
        canticle,
        heading: canticle.heading().to_string(),
        subheading: canticle.subheading().to_string(),
        rubric: STANDING.to_string(),
        text: canticle.text(lenten),
        citation: canticle.citation(lenten).to_string(),
        antiphon,
    })
}
