mod common;
use common::{init_db_with_data, rin, setup_test_db};
use predicates::prelude::*;
use std::env;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rin()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_seed_then_list_contracts() {
    let db_path = setup_test_db("seed_then_list_contracts");
    init_db_with_data(&db_path);

    rin()
        .args(["--db", &db_path, "list", "--report", "contracts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C-101"))
        .stdout(predicate::str::contains("C-103"))
        .stdout(predicate::str::contains("3 contract(s)"));
}

#[test]
fn test_list_devices_with_range() {
    let db_path = setup_test_db("list_devices_with_range");
    init_db_with_data(&db_path);

    // All seeded devices are installed on 2024-01-01.
    rin()
        .args([
            "--db", &db_path, "list", "--report", "devices", "--range", "2024-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("15 device(s)"));

    rin()
        .args([
            "--db", &db_path, "list", "--report", "devices", "--range", "2025",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 device(s)"));
}

#[test]
fn test_add_and_delete_contract() {
    let db_path = setup_test_db("add_and_delete_contract");

    rin()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rin()
        .args([
            "--db",
            &db_path,
            "add",
            "contract",
            "C-900",
            "Test contract",
            "--start",
            "2024-05-01",
        ])
        .assert()
        .success();

    rin()
        .args(["--db", &db_path, "list", "--report", "contracts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C-900"));

    rin()
        .args(["--db", &db_path, "del", "contract", "C-900"])
        .assert()
        .success();

    rin()
        .args(["--db", &db_path, "list", "--report", "contracts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 contract(s)"));
}

#[test]
fn test_add_contract_rejects_bad_date() {
    let db_path = setup_test_db("add_contract_rejects_bad_date");

    rin()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rin()
        .args([
            "--db",
            &db_path,
            "add",
            "contract",
            "C-901",
            "Bad date",
            "--start",
            "01/05/2024",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_card_flips_device_status() {
    let db_path = setup_test_db("card_flips_device_status");
    init_db_with_data(&db_path);

    // An unrepaired card marks its device damaged.
    rin()
        .args([
            "--db",
            &db_path,
            "add",
            "card",
            "--device",
            "D-102",
            "--reported",
            "2024-06-01",
            "--issue",
            "no power",
            "--technician",
            "Tech 9",
        ])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let status: String = conn
        .query_row(
            "SELECT status FROM devices WHERE serial_number = 'D-102'",
            [],
            |r| r.get(0),
        )
        .expect("device status");
    assert_eq!(status, "damaged");
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_and_info");
    init_db_with_data(&db_path);

    rin()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("integrity check passed"));

    rin()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("contracts"))
        .stdout(predicate::str::contains("maintenance_cards"));
}

#[test]
fn test_backup_creates_copy_and_refuses_overwrite() {
    let db_path = setup_test_db("backup_creates_copy");
    init_db_with_data(&db_path);

    let mut dest = env::temp_dir();
    dest.push("backup_creates_copy_rinventory.bak");
    let dest = dest.to_string_lossy().to_string();
    fs::remove_file(&dest).ok();

    rin()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success();
    assert!(fs::metadata(&dest).is_ok());

    // The destination exists now; with stdin closed the prompt reads as a
    // refusal and the backup stops.
    rin()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .failure();
}

#[test]
fn test_add_list_delete_coordination_request() {
    let db_path = setup_test_db("add_list_delete_coordination_request");

    rin()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rin()
        .args([
            "--db",
            &db_path,
            "add",
            "coordination",
            "Trenching",
            "--zone",
            "Zone 9",
            "--requested",
            "2024-07-01",
            "--department",
            "Roads",
            "--location",
            "Gate 3",
            "--details",
            "Open a trench for conduit",
            "--responsible",
            "Ops",
            "--phone",
            "0500000099",
        ])
        .assert()
        .success();

    rin()
        .args(["--db", &db_path, "list", "--report", "coordination"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trenching"))
        .stdout(predicate::str::contains("Zone 9"))
        .stdout(predicate::str::contains("1 coordination request(s)"));

    rin()
        .args(["--db", &db_path, "del", "coordination", "1"])
        .assert()
        .success();

    rin()
        .args(["--db", &db_path, "list", "--report", "coordination"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 coordination request(s)"));
}

#[test]
fn test_list_coordination_with_range() {
    let db_path = setup_test_db("list_coordination_with_range");
    init_db_with_data(&db_path);

    // Seeded requests are dated 2024-03-01..03.
    rin()
        .args([
            "--db", &db_path, "list", "--report", "coordination", "--range", "2024-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 coordination request(s)"));

    rin()
        .args([
            "--db", &db_path, "list", "--report", "coordination", "--range", "2024-04",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 coordination request(s)"));
}

#[test]
fn test_config_dir_override_is_honored() {
    let db_path = setup_test_db("config_dir_override");
    init_db_with_data(&db_path);

    // A private config dir whose font points at a file that does not exist.
    // The binary must read this config, not the invoking user's real one.
    let mut dir = env::temp_dir();
    dir.push("config_dir_override_rinventory_cfg");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(
        dir.join("rinventory.conf"),
        format!("database: {db_path}\nreport_font: /nonexistent/font.ttf\n"),
    )
    .expect("write config");

    let out = env::temp_dir().join("config_dir_override_out");
    fs::create_dir_all(&out).expect("create out dir");
    let out = out.to_string_lossy().to_string();

    rin()
        .env("RINVENTORY_CONFIG_DIR", &dir)
        .args([
            "--db",
            &db_path,
            "export",
            "--report",
            "contracts",
            "--format",
            "pdf",
            "--out",
            &out,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read report font"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");
    init_db_with_data(&db_path);

    rin()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed"));
}
