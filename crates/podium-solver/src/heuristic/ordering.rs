//! Work queue ordering.
//!
//! Hard-to-place items go first so that conflicts surface near the root of
//! the search tree, where backtracking is cheap.

use std::cmp::Reverse;

use podium_core::{CategoryId, Contest, PersonId};

/// Categories by projected duration, then school count, both descending.
/// Ties go to the lower id.
pub fn order_categories(contest: &Contest) -> Vec<CategoryId> {
    let mut order: Vec<CategoryId> = contest.categories().iter().map(|c| c.id()).collect();
    order.sort_by_key(|&id| {
        let cat = contest.category(id);
        (
            Reverse(cat.projected_duration()),
            Reverse(cat.schools().len()),
            id,
        )
    });
    order
}

/// Judges by the number of schools their own school shares a category
/// with, descending. Period-bound judges go before unbound ones on a tie,
/// then the lower id.
pub fn order_judges(contest: &Contest) -> Vec<PersonId> {
    let mut order: Vec<(Reverse<usize>, bool, PersonId)> = contest
        .judges()
        .map(|j| {
            (
                Reverse(contest.reachable_schools(j.id()).len()),
                j.bound_period().is_none(),
                j.id(),
            )
        })
        .collect();
    order.sort();
    order.into_iter().map(|(_, _, id)| id).collect()
}
