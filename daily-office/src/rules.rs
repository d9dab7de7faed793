//! Ordered precedence rules.
//!
//! Section content is chosen by walking a static list of `(condition, result)`
//! rules from top to bottom; the first rule whose condition holds wins. The
//! order of a list is part of its meaning, so lists are declared statically
//! and never sorted or computed.

use chrono::Weekday;
use tracing::{debug, warn};

use liturgy::{FeastId, LiturgicalContext, Rank, Season};

/// Condition for rule matching.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Always matches
    Always,
    /// Primary commemoration is the feast
    Feast(FeastId),
    /// Primary commemoration is any of the feasts
    AnyFeast(&'static [FeastId]),
    /// Some morning commemoration of the day is the feast
    Observes(FeastId),
    /// Date falls in the season
    Season(Season),
    /// Primary commemoration has the rank
    Rank(Rank),
    /// Date falls on one of the weekdays
    Weekday(&'static [Weekday]),
    /// Date falls in an even-numbered year
    EvenYear,
    /// Logical AND of conditions
    All(&'static [Condition]),
    /// Logical OR of conditions
    Any(&'static [Condition]),
    /// Negation
    Not(&'static Condition),
}

impl Condition {
    /// Evaluate the condition against a context.
    pub fn evaluate(&self, context: &LiturgicalContext) -> bool {
        match self {
            Condition::Always => true,
            Condition::Feast(feast) => context.is_feast(*feast),
            Condition::AnyFeast(feasts) => feasts.iter().any(|f| context.is_feast(*f)),
            Condition::Observes(feast) => context.observes(*feast),
            Condition::Season(season) => context.season() == *season,
            Condition::Rank(rank) => context.primary_rank() == *rank,
            Condition::Weekday(days) => days.contains(&context.weekday()),
            Condition::EvenYear => context.year() % 2 == 0,
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(context)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(context)),
            Condition::Not(condition) => !condition.evaluate(context),
        }
    }
}

/// Lent, or a primary Ember or Rogation Day.
pub const PENITENTIAL: Condition = Condition::Any(&[
    Condition::Season(Season::Lent),
    Condition::Rank(Rank::EmberDay),
    Condition::Rank(Rank::RogationDay),
]);

/// A rule in a precedence list.
#[derive(Debug)]
pub struct Rule<T: 'static> {
    /// Rule name, used in logs and regression tests
    pub name: &'static str,
    /// Condition that selects the rule
    pub when: Condition,
    /// Content produced when the rule wins
    pub then: T,
}

/// A named, ordered list of rules evaluated first-match-wins.
#[derive(Debug)]
pub struct PrecedenceList<T: 'static> {
    pub name: &'static str,
    pub rules: &'static [Rule<T>],
}

impl<T> PrecedenceList<T> {
    /// The first rule whose condition holds, if any.
    pub fn matching_rule(&self, context: &LiturgicalContext) -> Option<&'static Rule<T>> {
        let rules: &'static [Rule<T>] = self.rules;
        rules.iter().find(|rule| rule.when.evaluate(context))
    }

    /// Content of the first matching rule.
    ///
    /// No match is not an error: the section renders without that content.
    pub fn resolve(&self, context: &LiturgicalContext) -> Option<&'static T> {
        match self.matching_rule(context) {
            Some(rule) => {
                debug!(list = self.name, rule = rule.name, date = %context.date(), "Rule matched");
                Some(&rule.then)
            }
            None => {
                warn!(list = self.name, date = %context.date(), "No rule matched");
                None
            }
        }
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }
}

/// A table with one entry per weekday, Monday first.
#[derive(Debug)]
pub struct WeekdayTable<T: 'static> {
    pub entries: [T; 7],
}

impl<T> WeekdayTable<T> {
    /// Entry for a weekday.
    pub fn get(&self, weekday: Weekday) -> &T {
        &self.entries[weekday.num_days_from_monday() as usize]
    }
}

/// All weekdays, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use liturgy::Commemoration;

    static LIST: PrecedenceList<u8> = PrecedenceList {
        name: "test",
        rules: &[
            Rule {
                name: "easter",
                when: Condition::Feast(FeastId::EasterDay),
                then: 1,
            },
            Rule {
                name: "eastertide",
                when: Condition::Season(Season::Eastertide),
                then: 2,
            },
            Rule {
                name: "wednesday",
                when: Condition::Weekday(&[Weekday::Wed]),
                then: 3,
            },
        ],
    };

    fn context(
        y: i32,
        m: u32,
        d: u32,
        season: Season,
        primary: Commemoration,
    ) -> LiturgicalContext {
        LiturgicalContext::builder(NaiveDate::from_ymd_opt(y, m, d).unwrap(), season)
            .commemoration(primary)
            .build()
    }

    #[test]
    fn test_first_match_wins() {
        let easter = context(
            2024,
            3,
            31,
            Season::Eastertide,
            Commemoration::feast(FeastId::EasterDay, Rank::PrincipalFeast),
        );
        assert_eq!(LIST.resolve(&easter), Some(&1));

        let easter_monday = context(
            2024,
            4,
            1,
            Season::Eastertide,
            Commemoration::feast(FeastId::EasterWeek, Rank::HolyDay),
        );
        assert_eq!(LIST.resolve(&easter_monday), Some(&2));
        assert_eq!(
            LIST.matching_rule(&easter_monday).map(|r| r.name),
            Some("eastertide")
        );
    }

    #[test]
    fn test_no_match_is_none() {
        // Thursday in ordinary time matches nothing
        let thursday = context(
            2024,
            7,
            11,
            Season::SeasonAfterPentecost,
            Commemoration::new("Thursday", Rank::Ferial),
        );
        assert_eq!(LIST.resolve(&thursday), None);
    }

    #[test]
    fn test_compound_conditions() {
        let ember = context(
            2024,
            9,
            18,
            Season::SeasonAfterPentecost,
            Commemoration::new("Ember Wednesday", Rank::EmberDay),
        );
        assert!(PENITENTIAL.evaluate(&ember));
        const PENITENTIAL_WEDNESDAY: Condition =
            Condition::All(&[PENITENTIAL, Condition::Weekday(&[Weekday::Wed])]);
        assert!(PENITENTIAL_WEDNESDAY.evaluate(&ember));
        assert!(!Condition::Not(&PENITENTIAL).evaluate(&ember));
        assert!(Condition::EvenYear.evaluate(&ember));
    }

    #[test]
    fn test_rule_names_keep_declared_order() {
        assert_eq!(LIST.rule_names(), vec!["easter", "eastertide", "wednesday"]);
    }

    #[test]
    fn test_weekday_table() {
        let table = WeekdayTable {
            entries: ["mon", "tue", "wed", "thu", "fri", "sat", "sun"],
        };
        for (day, expected) in WEEK.iter().zip(table.entries.iter()) {
            assert_eq!(table.get(*day), expected);
        }
    }
}
