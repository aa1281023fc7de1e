//! Hand-built contests with known outcomes.

use podium_config::SchedulerConfig;
use podium_core::{CategoryId, Contest, ContestBuilder, PersonId};

/// A contest paired with the configuration it is meant to be solved with.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub contest: Contest,
    pub config: SchedulerConfig,
    pub categories: Vec<CategoryId>,
    pub judges: Vec<PersonId>,
}

/// One slot, one two-speaker category from school X, judges from Y and Z.
///
/// Solvable: the slot takes the category and both judges and runs
/// `(5 + 2) * 2 - 2 = 12` minutes.
pub fn single_slot() -> Scenario {
    two_judge_slot("Single slot", ["Yale", "Zurich"])
}

/// Like [`single_slot`], but both judges come from the contestants' school.
///
/// Unsolvable: nobody may judge the only category.
pub fn conflicted_judges() -> Scenario {
    two_judge_slot("Conflicted judges", ["Xavier", "Xavier"])
}

fn two_judge_slot(name: &str, judge_schools: [&str; 2]) -> Scenario {
    let mut b = ContestBuilder::new(name);
    let period = b.add_period("Morning");
    let room = b.add_room("Hall");
    b.open_room(period, room).expect("fixture");
    let x = b.add_school("Xavier", "X");
    let poetry = b
        .add_category("Poetry", "Senior", "Native", 5)
        .expect("fixture");
    b.add_contestant("Ana", x, poetry).expect("fixture");
    b.add_contestant("Bo", x, poetry).expect("fixture");

    let judges = judge_schools
        .iter()
        .zip(["Cy", "Di"])
        .map(|(school, judge)| {
            let short = &school[..1];
            let school = b.add_school(*school, short);
            b.add_judge(judge, school).expect("fixture")
        })
        .collect();

    Scenario {
        contest: b.build().expect("fixture"),
        config: SchedulerConfig::new().with_judges(2, 2).with_categories(1, 1),
        categories: vec![poetry],
        judges,
    }
}

/// Two periods of one room, two categories, two judges, two judges needed
/// per occupied slot.
///
/// Unsolvable: the categories cannot share a slot without breaking the
/// fairness ceiling, and two slots need four judges.
pub fn judge_shortage() -> Scenario {
    let mut b = ContestBuilder::new("Judge shortage");
    let morning = b.add_period("Morning");
    let afternoon = b.add_period("Afternoon");
    let hall = b.add_room("Hall");
    b.open_room(morning, hall).expect("fixture");
    b.open_room(afternoon, hall).expect("fixture");
    let x = b.add_school("Xavier", "X");
    let y = b.add_school("Yale", "Y");
    let z = b.add_school("Zurich", "Z");
    let poetry = b
        .add_category("Poetry", "Senior", "Native", 5)
        .expect("fixture");
    let prose = b
        .add_category("Prose", "Senior", "Native", 5)
        .expect("fixture");
    b.add_contestant("Ana", x, poetry).expect("fixture");
    b.add_contestant("Bo", x, prose).expect("fixture");
    let cy = b.add_judge("Cy", y).expect("fixture");
    let di = b.add_judge("Di", z).expect("fixture");

    Scenario {
        contest: b.build().expect("fixture"),
        config: SchedulerConfig::new().with_judges(2, 3),
        categories: vec![poetry, prose],
        judges: vec![cy, di],
    }
}

/// Two rooms, one two-speaker category and one category nobody entered.
///
/// Solvable with one judge per slot; the empty category occupies a slot
/// that runs zero minutes. Sharing a slot would take 16 minutes, well over
/// the fairness ceiling of the 6-minute mean.
pub fn empty_category() -> Scenario {
    let mut b = ContestBuilder::new("Empty category");
    let period = b.add_period("Morning");
    let hall = b.add_room("Hall");
    let annex = b.add_room("Annex");
    b.open_room(period, hall).expect("fixture");
    b.open_room(period, annex).expect("fixture");
    let x = b.add_school("Xavier", "X");
    let y = b.add_school("Yale", "Y");
    let poetry = b
        .add_category("Poetry", "Senior", "Native", 5)
        .expect("fixture");
    let debate = b
        .add_category("Debate", "Junior", "Foreign", 8)
        .expect("fixture");
    b.add_contestant("Ana", x, poetry).expect("fixture");
    b.add_contestant("Bo", x, poetry).expect("fixture");
    let cy = b.add_judge("Cy", y).expect("fixture");
    let di = b.add_judge("Di", y).expect("fixture");

    Scenario {
        contest: b.build().expect("fixture"),
        config: SchedulerConfig::new().with_judges(1, 1),
        categories: vec![poetry, debate],
        judges: vec![cy, di],
    }
}
