//! Next AMS contents after a plate is chosen.
//!
//! The required colors are always loaded. Remaining slots go first to
//! colors already loaded, favoring those the future plates need most, and
//! then to colors the future plates need that are not loaded yet. Evicting
//! the colors least needed later is what keeps the swap count down.

use std::collections::{BTreeSet, HashMap};

use super::frequency::color_frequency;
use crate::models::{ColorId, Plate};

/// Computes the colors loaded after printing a plate requiring `required`.
///
/// The result always contains `required`, even when it is larger than
/// `capacity`; flagging that case is up to the caller. Otherwise the result
/// never exceeds `capacity`.
///
/// Ties between equally needed colors go to the color a future plate needs
/// first (plate order, then ascending color id within a plate), then to the
/// lower color id. Loaded colors no future plate needs rank last.
pub fn next_loaded(
    current: &BTreeSet<ColorId>,
    required: &BTreeSet<ColorId>,
    future: &[&Plate],
    capacity: usize,
) -> BTreeSet<ColorId> {
    let mut next = required.clone();
    if next.len() >= capacity {
        return next;
    }

    let frequency = color_frequency(future.iter().copied());
    let upcoming = first_appearance(future);
    let rank: HashMap<ColorId, usize> = upcoming
        .iter()
        .enumerate()
        .map(|(index, color)| (*color, index))
        .collect();
    let rank_of = |color: &ColorId| rank.get(color).copied().unwrap_or(usize::MAX);

    let mut retained: Vec<ColorId> = current.difference(&next).copied().collect();
    retained.sort_by(|a, b| {
        frequency
            .get(*b)
            .cmp(&frequency.get(*a))
            .then_with(|| rank_of(a).cmp(&rank_of(b)))
            .then_with(|| a.cmp(b))
    });

    for color in retained.into_iter().chain(upcoming) {
        if next.len() >= capacity {
            break;
        }
        next.insert(color);
    }

    next
}

/// Colors required by `plates`, each listed once, in the order a plate first
/// needs them.
fn first_appearance(plates: &[&Plate]) -> Vec<ColorId> {
    let mut seen = BTreeSet::new();
    let mut order = Vec::new();
    for plate in plates {
        for color in &plate.colors {
            if seen.insert(*color) {
                order.push(*color);
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(id: u64, colors: &[ColorId]) -> Plate {
        Plate::new(id, 1, format!("plate-{id}"), colors.iter().copied().collect(), 0)
    }

    fn set(colors: &[ColorId]) -> BTreeSet<ColorId> {
        colors.iter().copied().collect()
    }

    #[test]
    fn test_required_always_kept_over_capacity() {
        let next = next_loaded(&set(&[1, 2]), &set(&[3, 4, 5]), &[], 2);
        assert_eq!(next, set(&[3, 4, 5]));
    }

    #[test]
    fn test_keeps_most_needed_loaded_color() {
        let p1 = plate(1, &[1]);
        let p2 = plate(2, &[2]);
        let p3 = plate(3, &[2, 4]);
        let future = [&p1, &p2, &p3];

        // Color 2 is needed twice, color 1 once, color 3 never.
        let next = next_loaded(&set(&[1, 2, 3]), &set(&[5]), &future, 3);
        assert_eq!(next, set(&[1, 2, 5]));
    }

    #[test]
    fn test_equal_demand_prefers_color_needed_first() {
        let p1 = plate(1, &[3]);
        let p2 = plate(2, &[1]);
        let future = [&p1, &p2];

        let next = next_loaded(&set(&[1, 3]), &set(&[5]), &future, 2);
        assert_eq!(next, set(&[3, 5]));
    }

    #[test]
    fn test_unneeded_loaded_colors_break_ties_by_id() {
        let next = next_loaded(&set(&[4, 2, 9]), &set(&[1]), &[], 2);
        assert_eq!(next, set(&[1, 2]));
    }

    #[test]
    fn test_fills_free_slots_from_future_plates() {
        let p1 = plate(1, &[7, 8]);
        let p2 = plate(2, &[6]);
        let future = [&p1, &p2];

        let next = next_loaded(&BTreeSet::new(), &set(&[1]), &future, 3);
        assert_eq!(next, set(&[1, 7, 8]));
    }

    #[test]
    fn test_stops_when_nothing_left_to_load() {
        let p1 = plate(1, &[2]);
        let next = next_loaded(&BTreeSet::new(), &set(&[1]), &[&p1], 4);
        assert_eq!(next, set(&[1, 2]));
    }
}
