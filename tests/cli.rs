use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use yaml_structure::yaml::testing::samples;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("fixture to be written");
    path
}

fn yaml_structure(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("yaml-structure");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn dump_prints_structure_tree() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "simple.yml", samples::SIMPLE);

    yaml_structure(&dir)
        .arg("dump")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(
            "ROOT(0): \n  KEY(0): hello:\n    KEY(2): world:\n      RAW(4): message\n      RAW(-1): \n",
        );
}

#[test]
fn dump_treeviz_format() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "world.yml", samples::WORLD);

    yaml_structure(&dir)
        .arg("dump")
        .arg(&fixture)
        .arg("--format")
        .arg("treeviz")
        .assert()
        .success()
        .stdout(predicate::str::contains("└─ Key: moon").and(predicate::str::contains("Raw: beer")));
}

#[test]
fn dump_json_format() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "simple.yml", samples::SIMPLE);

    let output = yaml_structure(&dir)
        .arg("dump")
        .arg(&fixture)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["children"][0]["key"], "hello");
}

#[test]
fn dump_reads_project_config() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "simple.yml", samples::SIMPLE);
    write_fixture(&dir, "yaml-structure.toml", "[inspect]\nshow_offsets = true\n");

    yaml_structure(&dir)
        .arg("dump")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("KEY(0)[0..28]: hello:"));
}

#[test]
fn dump_format_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "simple.yml", samples::SIMPLE);
    let config = write_fixture(&dir, "custom.toml", "[inspect]\nformat = \"json\"\n");

    yaml_structure(&dir)
        .arg("dump")
        .arg(&fixture)
        .arg("--config")
        .arg(&config)
        .arg("--format")
        .arg("treeviz")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("└─ Key: hello"));
}

#[test]
fn dump_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "simple.yml", samples::SIMPLE);

    yaml_structure(&dir)
        .arg("dump")
        .arg(&fixture)
        .arg("--config")
        .arg("nope.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn find_by_line_and_column() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "world.yml", samples::WORLD);

    yaml_structure(&dir)
        .arg("find")
        .arg(&fixture)
        .arg("7:6")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("key: montreal")
                .and(predicate::str::contains("path: world.canada.montreal"))
                .and(predicate::str::contains("in-key: true")),
        );
}

#[test]
fn find_by_offset_with_stack() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "simple.yml", samples::SIMPLE);

    yaml_structure(&dir)
        .arg("find")
        .arg(&fixture)
        .arg("20")
        .arg("--stack")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("node: RAW(4)")
                .and(predicate::str::contains("path: hello.world"))
                .and(predicate::str::contains("- ROOT(0) [0..28]: ")),
        );
}

#[test]
fn find_rejects_bad_positions() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "simple.yml", samples::SIMPLE);

    yaml_structure(&dir)
        .arg("find")
        .arg(&fixture)
        .arg("99:0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside of the document"));
}

#[test]
fn get_prints_subtree_text() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "world.yml", samples::WORLD);

    yaml_structure(&dir)
        .arg("get")
        .arg(&fixture)
        .arg("world.canada")
        .assert()
        .success()
        .stdout("  canada:\n    montreal: poutine\n    vancouver:\n      salmon\n");
}

#[test]
fn get_quoted_key_path() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "application.yml", samples::APPLICATION);

    yaml_structure(&dir)
        .arg("get")
        .arg(&fixture)
        .arg(r#"logging.level."org.example""#)
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG"));
}

#[test]
fn get_missing_path_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "world.yml", samples::WORLD);

    yaml_structure(&dir)
        .arg("get")
        .arg(&fixture)
        .arg("world.atlantis")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No node at path 'world.atlantis'"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();

    yaml_structure(&dir)
        .arg("dump")
        .arg("does-not-exist.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}
