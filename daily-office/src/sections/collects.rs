//! Collects of the day, the weekly collect and the prayer for mission.

use chrono::Weekday;
use indexmap::IndexMap;

use crate::record::{
    CollectsOfTheDayRecord, MissionCollectRecord, SectionRecord, WeeklyCollectRecord,
};
use crate::rules::{Condition, PrecedenceList, Rule, WeekdayTable};
use crate::sections::pluralize;
use crate::types::{OfficeType, SectionInput};

/// Remove a closing "Amen." from collect text; the response is rendered separately.
pub fn strip_amen(collect: &str) -> &str {
    let trimmed = collect.trim_end();
    trimmed.strip_suffix("Amen.").unwrap_or(trimmed).trim_end()
}

/// Collects for each commemoration observed at the office, in commemoration order.
///
/// Commemorations without a collect for the office are skipped. If two share a
/// name the later collect replaces the earlier one without moving it.
pub fn collects_of_the_day(input: &SectionInput<'_>) -> SectionRecord {
    let mut collects = IndexMap::new();
    for commemoration in input.commemorations() {
        let collect = match input.office {
            OfficeType::Morning => commemoration.morning_prayer_collect.as_deref(),
            OfficeType::Evening => commemoration.evening_prayer_collect.as_deref(),
        };
        let Some(collect) = collect.map(strip_amen).filter(|c| !c.is_empty()) else {
            continue;
        };
        if collects
            .insert(commemoration.name.clone(), collect.to_string())
            .is_some()
        {
            tracing::debug!(
                name = %commemoration.name,
                "Duplicate commemoration collect replaced"
            );
        }
    }

    let noun = pluralize(collects.len(), "Collect", "Collects");
    SectionRecord::CollectsOfTheDay(CollectsOfTheDayRecord {
        heading: format!("The {noun} of the Day"),
        collects,
    })
}

/// Said on Monday mornings as well as Tuesday evenings.
const LIGHTEN_OUR_DARKNESS: &str = "Lighten our darkness, we beseech you, O Lord; and by your great mercy defend us from all perils and dangers of this night; for the love of your only Son, our Savior Jesus Christ.";

/// Title and text of a collect said on one weekday.
#[derive(Debug)]
pub struct WeeklyCollect {
    pub title: &'static str,
    pub collect: &'static str,
}

pub static MORNING_WEEKLY_COLLECTS: WeekdayTable<WeeklyCollect> = WeekdayTable {
    entries: [
        WeeklyCollect {
            title: "A COLLECT FOR THE RENEWAL OF LIFE",
            collect: LIGHTEN_OUR_DARKNESS,
        },
        WeeklyCollect {
            title: "A COLLECT FOR PEACE",
            collect: "O God, the author of peace and lover of concord, to know you is eternal life and to serve you is perfect freedom: Defend us, your humble servants, in all assaults of our enemies; that we, surely trusting in your defense, may not fear the power of any adversaries, through the might of Jesus Christ our Lord.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR GRACE",
            collect: "O Lord, our heavenly Father, almighty and everlasting God, you have brought us safely to the beginning of this day: Defend us by your mighty power, that we may not fall into sin nor run into any danger; and that, guided by your Spirit, we may do what is righteous in your sight; through Jesus Christ our Lord.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR GUIDANCE",
            collect: "Heavenly Father, in you we live and move and have our being: We humbly pray you so to guide and govern us by your Holy Spirit, that in all the cares and occupations of our life we may not forget you, but may remember that we are ever walking in your sight; through Jesus Christ our Lord.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR ENDURANCE",
            collect: "Almighty God, whose most dear Son went not up to joy but first he suffered pain, and entered not into glory before he was crucified: Mercifully grant that we, walking in the way of the Cross, may find it none other than the way of life and peace; through Jesus Christ your Son our Lord.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR SABBATH REST",
            collect: "Almighty God, who after the creation of the world rested from all your works and sanctified a day of rest for all your creatures: Grant that we, putting away all earthly anxieties, may be duly prepared for the service of your sanctuary, and that our rest here upon earth may be a preparation for the eternal rest promised to your people in heaven; through Jesus Christ our Lord.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR STRENGTH TO AWAIT CHRIST\u{2019}S RETURN",
            collect: "O God our King, by the resurrection of your Son Jesus Christ on the first day of the week, you conquered sin, put death to flight, and gave us the hope of everlasting life: Redeem all our days by this victory; forgive our sins, banish our fears, make us bold to praise you and to do your will; and steel us to wait for the consummation of your kingdom on the last great Day; through Jesus Christ our Lord.",
        },
    ],
};

pub static EVENING_WEEKLY_COLLECTS: WeekdayTable<WeeklyCollect> = WeekdayTable {
    entries: [
        WeeklyCollect {
            title: "A COLLECT FOR PEACE",
            collect: "O God, the source of all holy desires, all good counsels, and all just works: Give to your servants that peace which the world cannot give, that our hearts may be set to obey your commandments, and that we, being defended from the fear of our enemies, may pass our time in rest and quietness; through the merits of Jesus Christ our Savior.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR AID AGAINST PERILS",
            collect: LIGHTEN_OUR_DARKNESS,
        },
        WeeklyCollect {
            title: "A COLLECT FOR PROTECTION",
            collect: "O God, the life of all who live, the light of the faithful, the strength of those who labor, and the repose of the dead: We thank you for the blessings of the day that is past, and humbly ask for your protection through the coming night. Bring us in safety to the morning hours; through him who died and rose again for us, your Son our Savior Jesus Christ.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR THE PRESENCE OF CHRIST",
            collect: "Lord Jesus, stay with us, for evening is at hand and the day is past; be our companion in the way, kindle our hearts, and awaken hope, that we may know you as you are revealed in Scripture and the breaking of bread. Grant this for the sake of your love.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR FAITH",
            collect: "Lord Jesus Christ, by your death you took away the sting of death: Grant to us your servants so to follow in faith where you have led the way, that we may at length fall asleep peacefully in you and wake up in your likeness; for your tender mercies\u{2019} sake.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR THE EVE OF WORSHIP",
            collect: "O God, the source of eternal light: Shed forth your unending day upon us who watch for you, that our lips may praise you, our lives may bless you, and our worship on the morrow give you glory; through Jesus Christ our Lord.",
        },
        WeeklyCollect {
            title: "A COLLECT FOR RESURRECTION HOPE",
            collect: "Lord God, whose Son our Savior Jesus Christ triumphed over the powers of death and prepared for us our place in the new Jerusalem: Grant that we, who have this day given thanks for his resurrection, may praise you in that City of which he is the light, and where he lives and reigns for ever and ever.",
        },
    ],
};

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn weekly_collect(input: &SectionInput<'_>) -> SectionRecord {
    let table = match input.office {
        OfficeType::Morning => &MORNING_WEEKLY_COLLECTS,
        OfficeType::Evening => &EVENING_WEEKLY_COLLECTS,
    };
    let weekday = input.context.weekday();
    let entry = table.get(weekday);

    SectionRecord::WeeklyCollect(WeeklyCollectRecord {
        title: entry.title.to_string(),
        weekday: weekday_name(weekday).to_string(),
        collect: entry.collect.to_string(),
    })
}

const MONDAY_THURSDAY: Condition = Condition::Weekday(&[Weekday::Mon, Weekday::Thu]);
const TUESDAY_FRIDAY_SUNDAY: Condition =
    Condition::Weekday(&[Weekday::Tue, Weekday::Fri, Weekday::Sun]);
const WEDNESDAY_SATURDAY: Condition = Condition::Weekday(&[Weekday::Wed, Weekday::Sat]);

const MORNING_MISSION_ONE_BLOOD: &str = "O God, you have made of one blood all the peoples of the earth, and sent your blessed Son to preach peace to those who are far off and to those who are near: Grant that people everywhere may seek after you and find you; bring the nations into your fold; pour out your Spirit upon all flesh; and hasten the coming of your kingdom; through Jesus Christ our Lord.";

const EVENING_MISSION_KEEP_WATCH: &str = "Keep watch, dear Lord, with those who work, or watch, or weep this night, and give your angels charge over those who sleep. Tend the sick, Lord Christ; give rest to the weary, bless the dying, soothe the suffering, pity the afflicted, shield the joyous; and all for your love\u{2019}s sake.";

// Wednesday and Saturday share the Tuesday/Friday/Sunday text.
pub static MORNING_MISSION_COLLECTS: PrecedenceList<&'static str> = PrecedenceList {
    name: "morning_mission_collect",
    rules: &[
        Rule {
            name: "monday_thursday",
            when: MONDAY_THURSDAY,
            then: "Almighty and everlasting God, who alone works great marvels: Send down upon our clergy and the congregations committed to their charge the life-giving Spirit of your grace, shower them with the continual dew of your blessing, and ignite in them a zealous love of your Gospel; through Jesus Christ our Lord.",
        },
        Rule {
            name: "tuesday_friday_sunday",
            when: TUESDAY_FRIDAY_SUNDAY,
            then: MORNING_MISSION_ONE_BLOOD,
        },
        Rule {
            name: "wednesday_saturday",
            when: WEDNESDAY_SATURDAY,
            then: MORNING_MISSION_ONE_BLOOD,
        },
    ],
};

pub static EVENING_MISSION_COLLECTS: PrecedenceList<&'static str> = PrecedenceList {
    name: "evening_mission_collect",
    rules: &[
        Rule {
            name: "monday_thursday",
            when: MONDAY_THURSDAY,
            then: "O God and Father of all, whom the whole heavens adore: Let the whole earth also worship you, all nations obey you, all tongues confess and bless you, and men, women, and children everywhere love you and serve you in peace; through Jesus Christ our Lord.",
        },
        Rule {
            name: "tuesday_friday_sunday",
            when: TUESDAY_FRIDAY_SUNDAY,
            then: EVENING_MISSION_KEEP_WATCH,
        },
        Rule {
            name: "wednesday_saturday",
            when: WEDNESDAY_SATURDAY,
            then: EVENING_MISSION_KEEP_WATCH,
        },
    ],
};

pub fn mission_collect(input: &SectionInput<'_>) -> SectionRecord {
    let list = match input.office {
        OfficeType::Morning => &MORNING_MISSION_COLLECTS,
        OfficeType::Evening => &EVENING_MISSION_COLLECTS,
    };
    let collect = list.resolve(input.context).copied().unwrap_or_default();
    SectionRecord::MissionCollect(MissionCollectRecord {
        heading: "Prayer for Mission".to_string(),
        collect: collect.to_string(),
    })
}
