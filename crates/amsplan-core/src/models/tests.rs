//! Tests for model state transitions and parsing.

use std::collections::BTreeSet;

use super::*;
use crate::error::PlannerError;

fn sample_project() -> Project {
    let mut project = Project::new(1, "Keycaps");
    project.colors = vec![
        Color::new(1, "White", 0),
        Color::new(2, "Black", 1),
        Color::new(3, "Orange", 2),
    ];
    project.plates = vec![
        Plate::new(10, 1, "Alphas", BTreeSet::from([1, 2]), 120),
        Plate::new(11, 1, "Modifiers", BTreeSet::from([2]), 45),
        Plate::new(12, 1, "Accents", BTreeSet::new(), 10),
    ];
    for (position, plate) in project.plates.iter_mut().enumerate() {
        plate.position = position as u32;
    }
    project.loaded_colors = BTreeSet::from([1, 3]);
    project
}

#[test]
fn test_new_project_defaults() {
    let project = Project::new(7, "Empty");
    assert_eq!(project.slot_capacity, DEFAULT_SLOT_CAPACITY);
    assert_eq!(project.sort_order, SortOrder::Ascending);
    assert!(project.colors.is_empty());
    assert!(project.loaded_colors.is_empty());
    assert_eq!(project.capacity(), 4);
}

#[test]
fn test_plate_status_flags() {
    let mut plate = Plate::new(1, 1, "P", BTreeSet::new(), 0);
    assert_eq!(plate.status(), PlateStatus::Queued);
    assert!(!plate.printed && !plate.printing);

    plate.apply_status(PlateStatus::Printing);
    assert!(plate.printing && !plate.printed);

    plate.apply_status(PlateStatus::Printed);
    assert!(plate.printed);
    assert!(!plate.printing, "printed forces printing off");
}

#[test]
fn test_only_one_plate_printing() {
    let mut project = sample_project();

    let changed = project.set_plate_status(10, PlateStatus::Printing).unwrap();
    assert_eq!(changed, vec![10]);

    let changed = project.set_plate_status(11, PlateStatus::Printing).unwrap();
    assert_eq!(changed, vec![10, 11]);

    let printing: Vec<_> = project.plates.iter().filter(|p| p.printing).map(|p| p.id).collect();
    assert_eq!(printing, vec![11]);
    assert_eq!(project.printing_plate().map(|p| p.id), Some(11));
}

#[test]
fn test_marking_printed_clears_printing() {
    let mut project = sample_project();
    project.set_plate_status(12, PlateStatus::Printing).unwrap();
    project.set_plate_status(12, PlateStatus::Printed).unwrap();

    let plate = project.plate(12).unwrap();
    assert!(plate.printed);
    assert!(!plate.printing);
    assert!(project.printing_plate().is_none());
    assert_eq!(project.pending_plates().count(), 2);
}

#[test]
fn test_unchanged_status_reports_nothing() {
    let mut project = sample_project();
    let changed = project.set_plate_status(10, PlateStatus::Queued).unwrap();
    assert!(changed.is_empty());
}

#[test]
fn test_status_of_unknown_plate() {
    let mut project = sample_project();
    let err = project.set_plate_status(99, PlateStatus::Printed).unwrap_err();
    assert!(matches!(err, PlannerError::PlateNotFound { id: 99 }));
}

#[test]
fn test_remove_color_in_use_is_refused() {
    let mut project = sample_project();
    let err = project.remove_color(2, false).unwrap_err();
    match err {
        PlannerError::ColorInUse { id, plates } => {
            assert_eq!(id, 2);
            assert_eq!(plates, vec![10, 11]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(project.colors.len(), 3);
}

#[test]
fn test_forced_remove_cascades() {
    let mut project = sample_project();
    let removed = project.remove_color(1, true).unwrap();

    assert_eq!(removed.name, "White");
    assert!(project.color(1).is_none());
    assert_eq!(project.plate(10).unwrap().colors, BTreeSet::from([2]));
    assert_eq!(project.loaded_colors, BTreeSet::from([3]));
    let positions: Vec<_> = project.colors.iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![0, 1]);
}

#[test]
fn test_remove_unused_color_drops_it_from_loaded() {
    let mut project = sample_project();
    project.remove_color(3, false).unwrap();
    assert_eq!(project.loaded_colors, BTreeSet::from([1]));
}

#[test]
fn test_remove_unknown_color() {
    let mut project = sample_project();
    let err = project.remove_color(42, true).unwrap_err();
    assert!(matches!(err, PlannerError::ColorNotFound { id: 42 }));
}

#[test]
fn test_set_loaded_colors_validates_ids() {
    let mut project = sample_project();
    let err = project.set_loaded_colors(BTreeSet::from([1, 8])).unwrap_err();
    assert!(matches!(err, PlannerError::ColorNotFound { id: 8 }));
    assert_eq!(project.loaded_colors, BTreeSet::from([1, 3]));

    project.set_loaded_colors(BTreeSet::from([2])).unwrap();
    assert_eq!(project.loaded_colors, BTreeSet::from([2]));
}

#[test]
fn test_summary_counts() {
    let mut project = sample_project();
    project.set_plate_status(11, PlateStatus::Printed).unwrap();

    let summary = ProjectSummary::from(&project);
    assert_eq!(summary.total_colors, 3);
    assert_eq!(summary.total_plates, 3);
    assert_eq!(summary.printed_plates, 1);
    assert_eq!(summary.pending_plates, 2);
}

#[test]
fn test_parse_enums() {
    assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Ascending));
    assert_eq!("Descending".parse::<SortOrder>(), Ok(SortOrder::Descending));
    assert!("sideways".parse::<SortOrder>().is_err());

    assert_eq!("printing".parse::<PlateStatus>(), Ok(PlateStatus::Printing));
    assert_eq!("done".parse::<PlateStatus>(), Ok(PlateStatus::Printed));
    assert!("lost".parse::<PlateStatus>().is_err());
    assert_eq!(PlateStatus::Queued.to_string(), "queued");
}

#[test]
fn test_serde_lowercase_enums() {
    let json = serde_json::to_string(&SortOrder::Descending).unwrap();
    assert_eq!(json, "\"descending\"");
    let status: PlateStatus = serde_json::from_str("\"printed\"").unwrap();
    assert_eq!(status, PlateStatus::Printed);
}
