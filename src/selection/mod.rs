use crate::catalog::models::{Difficulty, Place};
use crate::catalog::Catalog;
use rand::Rng;
use std::collections::HashSet;


const EASY_WEIGHT: u64 = 5;
const MEDIUM_WEIGHT: u64 = 3;
const HARD_WEIGHT: u64 = 1;
const UNSPECIFIED_WEIGHT: u64 = 2;

/// Draws one not-yet-used place with probability proportional to its
/// selection weight. Returns `None` when every place has been used; the
/// caller decides whether to reset the used set.
pub fn select_next<'a, R: Rng>(
    catalog: &'a Catalog,
    used_ids: &HashSet<String>,
    rng: &mut R,
) -> Option<&'a Place> {
    let eligible = catalog
        .places()
        .iter()
        .filter(|place| !used_ids.contains(&place.id))
        .collect::<Vec<_>>();
    if eligible.is_empty() {
        return None;
    }
    let mut cumulative_weights = Vec::with_capacity(eligible.len());
    let mut total_weight = 0;
    for place in &eligible {
        total_weight += selection_weight(place);
        cumulative_weights.push(total_weight);
    }
    let draw = rng.gen_range(0..total_weight);
    let index = cumulative_weights.partition_point(|&weight| weight <= draw);
    Some(eligible[index])
}

pub fn selection_weight(place: &Place) -> u64 {
    if let Some(weight) = place.weight {
        return (weight.floor() as u64).max(1);
    }
    match place.difficulty {
        Some(Difficulty::Easy) => EASY_WEIGHT,
        Some(Difficulty::Medium) => MEDIUM_WEIGHT,
        Some(Difficulty::Hard) => HARD_WEIGHT,
        None => UNSPECIFIED_WEIGHT,
    }
}
