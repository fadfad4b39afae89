//! End-to-end tests for the `recipebox` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn recipebox() -> Command {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn write_doc(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

const CAKE_JSON: &str = r#"{
    "name": "Cake",
    "Ingredients": ["Flour", "Sugar", "Eggs", "Butter"],
    "Cooking Time": 75
}"#;

#[test]
fn show_json_document_prints_card() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "cake.json", CAKE_JSON);

    recipebox()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("🍽 Recipe: Cake"))
        .stdout(predicate::str::contains("🥄 Ingredients: Flour, Sugar, Eggs, Butter"))
        .stdout(predicate::str::contains("⏳ Cooking Time: 75 mins"))
        .stdout(predicate::str::contains("🔥 Difficulty: Hard"));
}

#[test]
fn show_toml_document_prints_card() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        "eggs.toml",
        "name = \"Boiled Eggs\"\nIngredients = [\"Eggs\", \"Water\", \"Pot\"]\n\"Cooking Time\" = 12\n",
    );

    recipebox()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Eggs, Water, Pot"))
        .stdout(predicate::str::contains("🔥 Difficulty: Easy"));
}

#[test]
fn show_reads_stdin() {
    recipebox()
        .args(["show", "-"])
        .write_stdin(r#"{"name": "Stew", "Cooking Time": 45}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("🍽 Recipe: Stew"))
        .stdout(predicate::str::contains("🔥 Difficulty: Medium"));
}

#[test]
fn show_empty_document_uses_defaults() {
    recipebox()
        .args(["show", "-"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::contains("🍽 Recipe: null"))
        .stdout(predicate::str::contains("⏳ Cooking Time: 0 mins"))
        .stdout(predicate::str::contains("🔥 Difficulty: Easy"));
}

#[test]
fn show_json_output_format() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "cake.json", CAKE_JSON);

    recipebox()
        .args(["--output-format", "json", "show"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Cooking Time\": 75"))
        .stdout(predicate::str::contains("\"Difficulty\": \"Hard\""));
}

#[test]
fn new_prints_card() {
    recipebox()
        .args([
            "new", "--name", "Boiled Eggs", "-i", "Eggs", "-i", "Water", "-i", "Pot", "--time", "12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("🥄 Ingredients: Eggs, Water, Pot"))
        .stdout(predicate::str::contains("⏳ Cooking Time: 12 mins"))
        .stdout(predicate::str::contains("🔥 Difficulty: Easy"));
}

#[test]
fn new_keeps_ingredients_verbatim() {
    recipebox()
        .args(["new", "-n", "Soup", "-i", "Leek", "-i", "Salt, to taste", "-t", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🥄 Ingredients: Leek, Salt, to taste"))
        .stdout(predicate::str::contains("Hard"));
}

#[test]
fn validate_accepts_text_ingredients() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "cake.json", CAKE_JSON);

    recipebox()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("4 ingredients"));
}

#[test]
fn demo_prints_both_samples() {
    recipebox()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("🍽 Recipe: Boiled Eggs"))
        .stdout(predicate::str::contains("Cooking Time: 12 minutes"))
        .stdout(predicate::str::contains("Difficulty Level: Easy"))
        .stdout(predicate::str::contains("🍽 Recipe: Cake"))
        .stdout(predicate::str::contains("🔥 Difficulty: Hard"));
}

#[test]
fn demo_json_output_is_one_document() {
    let out = recipebox()
        .args(["--output-format", "json", "demo"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let recipes = json.as_array().unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0]["name"], "Boiled Eggs");
    assert_eq!(recipes[0]["Cooking Time"], 12);
    assert_eq!(recipes[1]["Difficulty"], "Hard");
}

#[test]
fn validate_json_output_is_one_document() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "cake.json", CAKE_JSON);

    let out = recipebox()
        .args(["--output-format", "json", "validate"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["valid"], true);
    assert_eq!(report["ingredients"], 4);
    assert_eq!(report["difficulty"], "Hard");
}

#[test]
fn config_get_reads_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "config.toml", "[validation]\nstrict_ingredients = true\n");

    recipebox()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "validation.strict_ingredients"])
        .assert()
        .success()
        .stdout(predicate::str::contains("validation.strict_ingredients = true"));
}

#[test]
fn completions_generate_for_bash() {
    recipebox()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recipebox"));
}

#[test]
fn version_flag_succeeds() {
    recipebox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
