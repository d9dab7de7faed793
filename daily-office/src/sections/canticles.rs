//! Canticles after the lessons, and the evening hymn.

use crate::record::{CanticleRecord, HymnRecord, SectionRecord};
use crate::sections::texts::{CanticleId, PHOS_HILARON, STANDING};
use crate::types::{OfficeType, SectionInput};

fn canticle_record(canticle: CanticleId, lenten: bool) -> SectionRecord {
    SectionRecord::Canticle(CanticleRecord {
        canticle,
        heading: canticle.heading().to_string(),
        subheading: canticle.subheading().to_string(),
        rubric: STANDING.to_string(),
        text: canticle.text(lenten),
        citation: canticle.citation(lenten).to_string(),
        antiphon: None,
    })
}

/// Canticle after the first lesson.
///
/// Morning Prayer uses the Te Deum, replaced by Benedictus es, Domine in Lent
/// and Holy Week. Evening Prayer always uses the Magnificat.
pub fn first_canticle(input: &SectionInput<'_>) -> SectionRecord {
    let lenten = input.context.season().is_penitential();
    let canticle = match input.office {
        OfficeType::Morning if lenten => CanticleId::BenedictusEsDomine,
        OfficeType::Morning => CanticleId::TeDeum,
        OfficeType::Evening => CanticleId::Magnificat,
    };
    canticle_record(canticle, lenten)
}

/// Canticle after the second lesson.
pub fn second_canticle(input: &SectionInput<'_>) -> SectionRecord {
    let canticle = match input.office {
        OfficeType::Morning => CanticleId::Benedictus,
        OfficeType::Evening => CanticleId::NuncDimittis,
    };
    canticle_record(canticle, input.context.season().is_penitential())
}

pub fn evening_hymn(_input: &SectionInput<'_>) -> SectionRecord {
    SectionRecord::Hymn(HymnRecord {
        heading: "PHOS HILARON".to_string(),
        subheading: "O Gracious Light".to_string(),
        rubric: STANDING.to_string(),
        text: PHOS_HILARON.to_string(),
    })
}
