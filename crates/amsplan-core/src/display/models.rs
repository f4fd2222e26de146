//! Display implementations for domain models.
//!
//! Everything here renders markdown for the terminal renderer. Plates only
//! know their color ids, so views that have the project's color list at hand
//! go through [`ColorNames`] to show names instead.

use std::{collections::BTreeSet, fmt};

use super::datetime::{LocalDateTime, Minutes};
use crate::models::{Color, ColorId, Plate, Project, ProjectSummary};

/// Renders a set of color ids as a comma-separated list of names.
///
/// Ids missing from `colors` are shown as `#id`; an empty set renders as
/// `none`.
///
/// ```rust
/// use std::collections::BTreeSet;
///
/// use amsplan_core::{display::ColorNames, models::Color};
///
/// let colors = vec![Color::new(1, "Red", 0), Color::new(2, "Blue", 1)];
/// let ids = BTreeSet::from([2, 1, 7]);
/// assert_eq!(ColorNames::new(&ids, &colors).to_string(), "Red, Blue, #7");
/// ```
pub struct ColorNames<'a> {
    pub ids: &'a BTreeSet<ColorId>,
    pub colors: &'a [Color],
}

impl<'a> ColorNames<'a> {
    pub fn new(ids: &'a BTreeSet<ColorId>, colors: &'a [Color]) -> Self {
        Self { ids, colors }
    }
}

impl fmt::Display for ColorNames<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ids.is_empty() {
            return write!(f, "none");
        }
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.colors.iter().find(|c| c.id == *id) {
                Some(color) => write!(f, "{}", color.name)?,
                None => write!(f, "#{id}")?,
            }
        }
        Ok(())
    }
}

/// A plate rendered with the color names of its project.
pub struct PlateView<'a> {
    pub plate: &'a Plate,
    pub colors: &'a [Color],
}

impl fmt::Display for PlateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plate = self.plate;
        writeln!(
            f,
            "### {}. {} ({})",
            plate.id,
            plate.name,
            plate.status().with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Colors: {}", ColorNames::new(&plate.colors, self.colors))?;
        writeln!(f, "- Estimated: {}", Minutes(u64::from(plate.estimated_minutes)))?;
        writeln!(f)
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PlateView { plate: self, colors: &[] })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}. {}", self.id, self.name)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- AMS slots: {}", self.capacity())?;
        writeln!(f, "- Sort order: {}", self.sort_order)?;
        writeln!(
            f,
            "- Loaded: {}",
            ColorNames::new(&self.loaded_colors, &self.colors)
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Colors")?;
        writeln!(f)?;
        if self.colors.is_empty() {
            writeln!(f, "No colors declared.")?;
        } else {
            for color in &self.colors {
                write!(f, "{color}")?;
            }
        }

        writeln!(f, "\n## Plates")?;
        writeln!(f)?;
        if self.plates.is_empty() {
            writeln!(f, "No plates in this project.")?;
        } else {
            for plate in &self.plates {
                write!(f, "{}", PlateView { plate, colors: &self.colors })?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_plates > 0 {
            format!(" ({}/{})", self.printed_plates, self.total_plates)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Colors**: {}", self.total_colors)?;
        writeln!(f, "- **Left to print**: {}", self.pending_plates)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlateStatus;

    fn project() -> Project {
        let mut project = Project::new(3, "Chess set");
        project.colors = vec![Color::new(1, "Black", 0), Color::new(2, "White", 1)];
        let mut pawns = Plate::new(10, 3, "Pawns", BTreeSet::from([1, 2]), 95);
        pawns.apply_status(PlateStatus::Printing);
        project.plates = vec![pawns, Plate::new(11, 3, "Board", BTreeSet::new(), 0)];
        project.loaded_colors = BTreeSet::from([2]);
        project
    }

    #[test]
    fn test_project_display() {
        let output = project().to_string();

        assert!(output.starts_with("# 3. Chess set\n"));
        assert!(output.contains("- AMS slots: 4"));
        assert!(output.contains("- Sort order: ascending"));
        assert!(output.contains("- Loaded: White"));
        assert!(output.contains("- 1. Black"));
        assert!(output.contains("### 10. Pawns (➤ Printing)"));
        assert!(output.contains("- Colors: Black, White"));
        assert!(output.contains("- Estimated: 1h 35m"));
        assert!(output.contains("### 11. Board (○ Queued)"));
        assert!(output.contains("- Colors: none"));
    }

    #[test]
    fn test_empty_project_display() {
        let output = Project::new(1, "Empty").to_string();
        assert!(output.contains("No colors declared."));
        assert!(output.contains("No plates in this project."));
        assert!(output.contains("- Loaded: none"));
    }

    #[test]
    fn test_plate_without_names_uses_ids() {
        let plate = Plate::new(5, 1, "Lid", BTreeSet::from([4]), 30);
        let output = plate.to_string();
        assert!(output.contains("### 5. Lid (○ Queued)"));
        assert!(output.contains("- Colors: #4"));
        assert!(output.contains("- Estimated: 30m"));
    }

    #[test]
    fn test_project_summary_display() {
        let mut project = project();
        project.plates[1].apply_status(PlateStatus::Printed);
        let summary = ProjectSummary::from(&project);
        let output = summary.to_string();

        assert!(output.contains("## Chess set (ID: 3) (1/2)"));
        assert!(output.contains("- **Colors**: 2"));
        assert!(output.contains("- **Left to print**: 1"));
    }
}
