//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::ProjectSummary;

/// Newtype wrapper for displaying a list of project summaries.
///
/// # Examples
///
/// ```rust
/// use amsplan_core::{
///     display::ProjectSummaries,
///     models::{Project, ProjectSummary},
/// };
///
/// let project = Project::new(1, "Chess set");
/// let summaries = ProjectSummaries(vec![ProjectSummary::from(&project)]);
/// assert!(summaries.to_string().contains("Chess set"));
///
/// assert_eq!(ProjectSummaries(vec![]).to_string(), "No projects found.\n");
/// ```
pub struct ProjectSummaries(pub Vec<ProjectSummary>);

impl ProjectSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ProjectSummaries {
    type Output = ProjectSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ProjectSummaries {
    type Item = ProjectSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectSummaries {
    type Item = &'a ProjectSummary;
    type IntoIter = std::slice::Iter<'a, ProjectSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No projects found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    #[test]
    fn test_project_summaries_display() {
        let first = ProjectSummary::from(&Project::new(1, "Chess set"));
        let second = ProjectSummary::from(&Project::new(2, "Desk organizer"));
        let summaries = ProjectSummaries(vec![first, second]);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].id, 2);

        let output = summaries.to_string();
        assert!(output.contains("## Chess set (ID: 1)"));
        assert!(output.contains("## Desk organizer (ID: 2)"));
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_empty_project_summaries() {
        let summaries = ProjectSummaries(vec![]);
        assert!(summaries.is_empty());
        assert_eq!(summaries.to_string(), "No projects found.\n");
    }
}
