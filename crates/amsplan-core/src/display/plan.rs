//! Markdown rendering of print plans.

use std::{collections::BTreeSet, fmt};

use super::{datetime::Minutes, models::ColorNames};
use crate::models::{Color, ColorId, PlanStep, PrintPlan};

/// A print plan together with the color list needed to show color names.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
///
/// use amsplan_core::{
///     display::PlanReport,
///     models::{Color, Plate, Project},
/// };
///
/// let mut project = Project::new(1, "Sign");
/// project.colors = vec![Color::new(1, "Red", 0)];
/// project.plates = vec![Plate::new(10, 1, "Letters", BTreeSet::from([1]), 40)];
///
/// let report = PlanReport::new(project.print_plan(), project.colors.clone());
/// let output = report.to_string();
/// assert!(output.contains("## 1. Letters (ID: 10)"));
/// assert!(output.contains("- Load: Red"));
/// ```
pub struct PlanReport {
    pub plan: PrintPlan,
    pub colors: Vec<Color>,
}

impl PlanReport {
    pub fn new(plan: PrintPlan, colors: Vec<Color>) -> Self {
        Self { plan, colors }
    }

    fn names<'a>(&'a self, ids: &'a BTreeSet<ColorId>) -> ColorNames<'a> {
        ColorNames::new(ids, &self.colors)
    }

    fn fmt_step(&self, f: &mut fmt::Formatter<'_>, index: usize, step: &PlanStep) -> fmt::Result {
        writeln!(f, "## {}. {} (ID: {})", index + 1, step.plate_name, step.plate_id)?;
        writeln!(f)?;
        if step.requires_pause_and_filament_swap {
            writeln!(
                f,
                "**Needs {} colors but the AMS holds fewer: pause mid-print to swap filament.**",
                step.required.len()
            )?;
            writeln!(f)?;
        }
        if step.swaps > 0 {
            writeln!(
                f,
                "Swap {} filament{} before printing:",
                step.swaps,
                if step.swaps == 1 { "" } else { "s" }
            )?;
            writeln!(f)?;
            writeln!(f, "- Unload: {}", self.names(&step.removed))?;
            writeln!(f, "- Load: {}", self.names(&step.added))?;
        } else {
            writeln!(f, "No filament change.")?;
            writeln!(f)?;
        }
        writeln!(f, "- Requires: {}", self.names(&step.required))?;
        writeln!(f, "- AMS after: {}", self.names(&step.after))?;
        writeln!(f, "- Estimated: {}", Minutes(u64::from(step.estimated_minutes)))?;
        writeln!(f)
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plan.is_empty() {
            return writeln!(f, "Nothing left to print.");
        }

        writeln!(f, "# Print plan")?;
        writeln!(f)?;
        writeln!(f, "- Plates: {}", self.plan.len())?;
        writeln!(f, "- Filament swaps: {}", self.plan.total_swaps)?;
        writeln!(f, "- Pauses: {}", self.plan.pause_count())?;
        writeln!(f, "- Estimated time: {}", Minutes(self.plan.total_minutes()))?;
        writeln!(f)?;

        for (index, step) in self.plan.steps.iter().enumerate() {
            self.fmt_step(f, index, step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Plate, Project};

    fn report() -> PlanReport {
        let mut project = Project::new(1, "Figurine");
        project.slot_capacity = 2;
        project.colors = vec![
            Color::new(1, "Red", 0),
            Color::new(2, "Blue", 1),
            Color::new(3, "Green", 2),
        ];
        project.plates = vec![
            Plate::new(10, 1, "Body", BTreeSet::from([1, 2]), 90),
            Plate::new(11, 1, "Base", BTreeSet::from([1, 2]), 30),
            Plate::new(12, 1, "Leaves", BTreeSet::from([3]), 15),
        ];
        for (i, plate) in project.plates.iter_mut().enumerate() {
            plate.position = i as u32;
        }
        PlanReport::new(project.print_plan(), project.colors.clone())
    }

    #[test]
    fn test_plan_report_header() {
        let output = report().to_string();

        assert!(output.starts_with("# Print plan\n"));
        assert!(output.contains("- Plates: 3"));
        assert!(output.contains("- Filament swaps: 3"));
        assert!(output.contains("- Pauses: 0"));
        assert!(output.contains("- Estimated time: 2h 15m"));
    }

    #[test]
    fn test_plan_report_steps() {
        let output = report().to_string();

        assert!(output.contains("## 1. Leaves (ID: 12)"));
        assert!(output.contains("Swap 2 filaments before printing:"));
        assert!(output.contains("- Load: Red, Green"));
        assert!(output.contains("## 2. Base (ID: 11)"));
        assert!(output.contains("Swap 1 filament before printing:"));
        assert!(output.contains("- Unload: Green"));
        assert!(output.contains("- Load: Blue"));
        assert!(output.contains("## 3. Body (ID: 10)"));
        assert!(output.contains("No filament change."));
        assert!(!output.contains("pause mid-print"));
    }

    #[test]
    fn test_plan_report_flags_oversized_plate() {
        let mut project = Project::new(1, "Flag");
        project.slot_capacity = 1;
        project.colors = vec![Color::new(1, "Red", 0), Color::new(2, "White", 1)];
        project.plates = vec![Plate::new(10, 1, "Stripes", BTreeSet::from([1, 2]), 20)];

        let output = PlanReport::new(project.print_plan(), project.colors.clone()).to_string();
        assert!(output.contains("- Pauses: 1"));
        assert!(output.contains("**Needs 2 colors but the AMS holds fewer: pause mid-print to swap filament.**"));
    }

    #[test]
    fn test_empty_plan_report() {
        let report = PlanReport::new(PrintPlan::default(), Vec::new());
        assert_eq!(report.to_string(), "Nothing left to print.\n");
    }
}
