use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and the given
/// database
fn amsplan_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("amsplan").expect("Failed to find amsplan binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Project 1 with two AMS slots, colors C1..C3 (IDs 1..3) and plates
/// P1 {C1, C2} 10m, P2 {C2, C3} 20m, P3 {C1} 5m (IDs 1..3).
fn seed_three_plates(db_path: &Path) {
    amsplan_cmd(db_path)
        .args(["project", "create", "Three plates", "--slots", "2"])
        .assert()
        .success();
    for name in ["C1", "C2", "C3"] {
        amsplan_cmd(db_path)
            .args(["color", "add", "1", name])
            .assert()
            .success();
    }
    for (name, colors, minutes) in [("P1", "1,2", "10"), ("P2", "2,3", "20"), ("P3", "1", "5")] {
        amsplan_cmd(db_path)
            .args(["plate", "add", "1", name, "--colors", colors, "--minutes", minutes])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_create_project_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    amsplan_cmd(&db_path)
        .args(["project", "create", "Chess set", "--slots", "8", "--sort", "desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project with ID: 1"))
        .stdout(predicate::str::contains("# 1. Chess set"))
        .stdout(predicate::str::contains("- AMS slots: 8"))
        .stdout(predicate::str::contains("- Sort order: descending"));
}

#[test]
fn test_cli_create_project_rejects_zero_slots() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    amsplan_cmd(&db_path)
        .args(["project", "create", "Broken", "--slots", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("slot_capacity"));
}

#[test]
fn test_cli_list_without_command() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    amsplan_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));

    amsplan_cmd(&db_path)
        .args(["project", "create", "Lamp"])
        .assert()
        .success();

    amsplan_cmd(&db_path)
        .args(["p", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Lamp (ID: 1)"));
}

#[test]
fn test_cli_show_missing_project() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    amsplan_cmd(&db_path)
        .args(["project", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project with ID 42 not found"));
}

#[test]
fn test_cli_configure_project() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    amsplan_cmd(&db_path)
        .args(["project", "create", "Lamp"])
        .assert()
        .success();

    amsplan_cmd(&db_path)
        .args(["project", "configure", "1", "--name", "Desk lamp", "--slots", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated project with ID: 1"))
        .stdout(predicate::str::contains("- Renamed to Desk lamp"))
        .stdout(predicate::str::contains("- Set AMS slots to 16"));

    amsplan_cmd(&db_path)
        .args(["project", "configure", "1"])
        .assert()
        .failure();
}

#[test]
fn test_cli_delete_project_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    amsplan_cmd(&db_path)
        .args(["project", "create", "Lamp"])
        .assert()
        .success();

    amsplan_cmd(&db_path)
        .args(["project", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    amsplan_cmd(&db_path)
        .args(["project", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted project 'Lamp' (ID: 1)"));

    amsplan_cmd(&db_path)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_cli_plate_shows_color_names() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["plate", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2. P2"))
        .stdout(predicate::str::contains("- Colors: C2, C3"))
        .stdout(predicate::str::contains("- Estimated: 20m"));
}

#[test]
fn test_cli_plate_with_unknown_color_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["plate", "add", "1", "P4", "--colors", "1,99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Color with ID 99 not found"));
}

#[test]
fn test_cli_update_plate() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["plate", "update", "3", "--name", "Pawn", "--minutes", "65"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plate with ID: 3"))
        .stdout(predicate::str::contains("### 3. Pawn"))
        .stdout(predicate::str::contains("- Estimated: 1h 05m"));
}

#[test]
fn test_cli_plan_three_plates() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["plan", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Print plan"))
        .stdout(predicate::str::contains("- Filament swaps: 3"))
        .stdout(predicate::str::contains("- Estimated time: 35m"))
        .stdout(predicate::str::contains("## 1. P3 (ID: 3)"))
        .stdout(predicate::str::contains("## 2. P1 (ID: 1)"))
        .stdout(predicate::str::contains("## 3. P2 (ID: 2)"));
}

#[test]
fn test_cli_plan_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    let output = amsplan_cmd(&db_path)
        .args(["plan", "1", "--json"])
        .output()
        .expect("Failed to run amsplan");
    assert!(output.status.success());

    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("plan output is not JSON");
    assert_eq!(plan["total_swaps"], 3);
    let order: Vec<u64> = plan["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["plate_id"].as_u64().unwrap())
        .collect();
    assert_eq!(order, vec![3, 1, 2]);
}

#[test]
fn test_cli_printing_plate_leads_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["plate", "status", "2", "printing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plate 2 is now printing"));

    amsplan_cmd(&db_path)
        .args(["plan", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. P2 (ID: 2)"));

    amsplan_cmd(&db_path)
        .args(["plate", "status", "2", "done"])
        .assert()
        .success();

    amsplan_cmd(&db_path)
        .args(["plan", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Plates: 2"))
        .stdout(predicate::str::contains("(ID: 2)").not());
}

#[test]
fn test_cli_loaded_colors() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["loaded", "1", "--colors", "2,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("now holds C2, C3"));

    amsplan_cmd(&db_path)
        .args(["loaded", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now empty"));

    amsplan_cmd(&db_path)
        .args(["loaded", "1", "--colors", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Color with ID 7 not found"));
}

#[test]
fn test_cli_remove_color_in_use() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["color", "remove", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    amsplan_cmd(&db_path)
        .args(["color", "remove", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted color 'C1' (ID: 1)"));

    amsplan_cmd(&db_path)
        .args(["plate", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Colors: none"));
}

#[test]
fn test_cli_rename_color() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["color", "rename", "3", "Jade White"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Renamed to Jade White"));

    amsplan_cmd(&db_path)
        .args(["plate", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Colors: C2, Jade White"));
}

#[test]
fn test_cli_export_import() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let export_path = temp_dir.path().join("three.json");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["project", "export", "1", "--output"])
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported project 1"));

    amsplan_cmd(&db_path)
        .args(["project", "import"])
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project with ID: 2"))
        .stdout(predicate::str::contains("# 2. Three plates"));

    amsplan_cmd(&db_path)
        .args(["plan", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Filament swaps: 3"))
        .stdout(predicate::str::contains("## 1. P3"));
}

#[test]
fn test_cli_remove_plate() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    seed_three_plates(&db_path);

    amsplan_cmd(&db_path)
        .args(["plate", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plate 'P1' (ID: 1)"));

    amsplan_cmd(&db_path)
        .args(["plate", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plate with ID 1 not found"));
}
