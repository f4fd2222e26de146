//! Greedy plate selection loop.

use std::{cmp::Ordering, collections::BTreeSet};

use log::{debug, info};

use super::{frequency::color_frequency, reallocator::next_loaded, ColorFrequency, PlanInput};
use crate::models::{ColorId, PlanStep, Plate, PrintPlan, SortOrder};

/// Orders the input plates and records the AMS changes each one causes.
///
/// Emits exactly one step per input plate. A plate already printing is
/// always picked before anything else.
pub fn plan(input: PlanInput<'_>) -> PrintPlan {
    let PlanInput {
        plates: mut pending,
        mut loaded,
        capacity,
        sort_order,
    } = input;

    let mut steps = Vec::with_capacity(pending.len());
    let mut total_swaps = 0;

    while let Some(index) = select_next(&pending, &loaded, sort_order) {
        let plate = pending.remove(index);
        let required = plate.colors.clone();
        let requires_pause_and_filament_swap = plate.exceeds_capacity(capacity);

        let next = next_loaded(&loaded, &required, &pending, capacity);
        let removed: BTreeSet<ColorId> = loaded.difference(&next).copied().collect();
        let added: BTreeSet<ColorId> = next.difference(&loaded).copied().collect();
        let swaps = added.len();
        total_swaps += swaps;

        debug!(
            "Step {}: plate {} ({}) swaps={} removed={:?} added={:?}",
            steps.len() + 1,
            plate.id,
            plate.name,
            swaps,
            removed,
            added
        );

        steps.push(PlanStep {
            plate_id: plate.id,
            plate_name: plate.name.clone(),
            required,
            before: std::mem::replace(&mut loaded, next.clone()),
            after: next,
            removed,
            added,
            swaps,
            requires_pause_and_filament_swap,
            estimated_minutes: plate.estimated_minutes,
        });
    }

    info!(
        "Planned {} plates with {} swaps",
        steps.len(),
        total_swaps
    );

    PrintPlan { steps, total_swaps }
}

/// Index of the plate to print next, or `None` once nothing is pending.
fn select_next(pending: &[&Plate], loaded: &BTreeSet<ColorId>, sort_order: SortOrder) -> Option<usize> {
    let frequency = color_frequency(pending.iter().copied());
    let in_progress = pending.iter().any(|p| p.printing);

    let mut best: Option<(usize, Score)> = None;
    for (index, plate) in pending.iter().enumerate() {
        if in_progress && !plate.printing {
            continue;
        }
        let score = Score::of(plate, loaded, &frequency);
        let better = match &best {
            Some((_, current)) => score.compare(current, sort_order) == Ordering::Less,
            None => true,
        };
        if better {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}

/// Selection criteria for one candidate plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Score {
    /// Required colors not loaded
    missing: usize,
    /// Estimated minutes
    duration: u32,
    /// Required colors already loaded
    overlap: usize,
    /// Demand for the plate's colors across all pending plates
    future_score: usize,
}

impl Score {
    fn of(plate: &Plate, loaded: &BTreeSet<ColorId>, frequency: &ColorFrequency) -> Self {
        let overlap = plate.colors.intersection(loaded).count();
        Self {
            missing: plate.colors.len() - overlap,
            duration: plate.estimated_minutes,
            overlap,
            future_score: plate.colors.iter().map(|c| frequency.get(*c)).sum(),
        }
    }

    /// `Less` means `self` is the better pick.
    fn compare(&self, other: &Self, sort_order: SortOrder) -> Ordering {
        let duration = match sort_order {
            SortOrder::Ascending => self.duration.cmp(&other.duration),
            SortOrder::Descending => other.duration.cmp(&self.duration),
        };

        self.missing
            .cmp(&other.missing)
            .then(duration)
            .then_with(|| other.overlap.cmp(&self.overlap))
            .then_with(|| other.future_score.cmp(&self.future_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(missing: usize, duration: u32, overlap: usize, future_score: usize) -> Score {
        Score {
            missing,
            duration,
            overlap,
            future_score,
        }
    }

    #[test]
    fn test_fewer_missing_wins_over_everything() {
        let a = score(0, 500, 0, 0);
        let b = score(1, 0, 5, 50);
        assert_eq!(a.compare(&b, SortOrder::Ascending), Ordering::Less);
        assert_eq!(a.compare(&b, SortOrder::Descending), Ordering::Less);
    }

    #[test]
    fn test_duration_direction_follows_sort_order() {
        let short = score(1, 10, 0, 0);
        let long = score(1, 90, 0, 0);
        assert_eq!(short.compare(&long, SortOrder::Ascending), Ordering::Less);
        assert_eq!(long.compare(&short, SortOrder::Descending), Ordering::Less);
    }

    #[test]
    fn test_overlap_then_future_score() {
        let more_overlap = score(1, 0, 2, 0);
        let less_overlap = score(1, 0, 1, 9);
        assert_eq!(more_overlap.compare(&less_overlap, SortOrder::Ascending), Ordering::Less);

        let busy = score(1, 0, 1, 6);
        let quiet = score(1, 0, 1, 2);
        assert_eq!(busy.compare(&quiet, SortOrder::Ascending), Ordering::Less);
        assert_eq!(busy.compare(&busy, SortOrder::Ascending), Ordering::Equal);
    }

    #[test]
    fn test_select_next_on_empty_is_none() {
        assert_eq!(select_next(&[], &BTreeSet::new(), SortOrder::Ascending), None);
    }
}
