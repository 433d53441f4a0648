#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rin() -> Command {
    let mut cmd = cargo_bin_cmd!("rinventory");
    // Keep the binary away from the invoking user's real configuration, the
    // same way --db keeps it away from the real database.
    cmd.env("RINVENTORY_CONFIG_DIR", test_config_dir());
    cmd
}

/// Shared empty configuration directory for tests.
pub fn test_config_dir() -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push("rinventory_test_config");
    fs::create_dir_all(&path).expect("create test config dir");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rinventory.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a fresh output directory inside tempdir for generated export files
pub fn temp_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rinventory_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create out dir");
    path.to_string_lossy().to_string()
}

/// Initialize DB and load the sample dataset
pub fn init_db_with_data(db_path: &str) {
    rin()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rin()
        .args(["--db", db_path, "--test", "seed"])
        .assert()
        .success();
}

/// Export filenames carry a timestamp, so tests locate the generated file by
/// scanning the output directory for the expected prefix and extension.
pub fn find_export(dir: &str, ext: &str) -> PathBuf {
    let entries: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read out dir")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or("");
            name.starts_with("export_") && name.ends_with(&format!(".{ext}"))
        })
        .collect();
    assert_eq!(entries.len(), 1, "expected exactly one exported .{ext} file");
    entries.into_iter().next().unwrap()
}
