use amsplan_core::{
    params::{AddColor, AddPlate, CreateProject},
    Planner, PlannerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Creates a project with the given colors and plates.
///
/// Plates are `(name, color indexes into colors, minutes)`. Returns the
/// project id, the color ids and the plate ids.
pub async fn seed_project(
    planner: &Planner,
    slots: u32,
    colors: &[&str],
    plates: &[(&str, Vec<usize>, i64)],
) -> (u64, Vec<u64>, Vec<u64>) {
    let project = planner
        .create_project(&CreateProject {
            name: "Seeded".to_string(),
            slot_capacity: Some(slots),
            sort_order: None,
        })
        .await
        .expect("Failed to create project");

    let mut color_ids = Vec::new();
    for name in colors {
        let color = planner
            .add_color(&AddColor {
                project_id: project.id,
                name: (*name).to_string(),
            })
            .await
            .expect("Failed to add color");
        color_ids.push(color.id);
    }

    let mut plate_ids = Vec::new();
    for (name, indexes, minutes) in plates {
        let plate = planner
            .add_plate(&AddPlate {
                project_id: project.id,
                name: (*name).to_string(),
                colors: indexes.iter().map(|i| color_ids[*i]).collect(),
                estimated_minutes: Some(*minutes),
            })
            .await
            .expect("Failed to add plate");
        plate_ids.push(plate.id);
    }

    (project.id, color_ids, plate_ids)
}
