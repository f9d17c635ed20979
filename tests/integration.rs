use predicates::prelude::*;
use serde_json::{json, Value};
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_yadop")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&output).unwrap()
}

fn expected_app() -> Value {
    json!([{
        "name": "myModule",
        "description": "A module is a collection of entities",
        "deprecated": "An entire module can be made deprecated",
        "entities": [{
            "name": "myComponent",
            "description": "A component entity has bindings",
            "deprecated": "Do not use this component anymore",
            "type": "component",
            "attributes": [{
                "name": "parameter",
                "description": "An optional parameter",
                "optional": true,
                "type": "boolean",
                "defaultValue": "true",
                "binding": "@"
            }, {
                "name": "list",
                "description": "A required list to use",
                "optional": false,
                "type": "string[]",
                "binding": "<"
            }, {
                "name": "onChange",
                "description": "Callback function to signal change. Called with `{parameter:<boolean>}`",
                "optional": false,
                "type": "function",
                "binding": "&"
            }],
            "requires": [],
            "methods": [{
                "name": "myControllerMethod",
                "description": "A method of a controller belonging to a component",
                "params": [{
                    "name": "parameter",
                    "description": "A parameter of the method",
                    "optional": true,
                    "type": "boolean",
                    "defaultValue": "true"
                }],
                "returns": {
                    "name": "true if the parameter is true, false otherwise",
                    "type": "boolean"
                }
            }]
        }, {
            "name": "myDirective",
            "description": "An attribute directive, used as validator",
            "deprecated": "Old code which has been replaced",
            "type": "directive",
            "attributes": [],
            "requires": [],
            "methods": []
        }, {
            "name": "myService",
            "description": "A service or factory or provider can have configuration",
            "type": "service",
            "attributes": [],
            "requires": ["$http", "myDirective"],
            "methods": [{
                "name": "myServiceMethod",
                "description": "A service method",
                "deprecated": "Old code which has been replaced",
                "params": [{
                    "name": "items",
                    "description": "Items to process",
                    "optional": true,
                    "type": "Object[]"
                }],
                "returns": {
                    "name": "true if the parameter is true, false otherwise",
                    "type": "boolean"
                }
            }]
        }]
    }])
}

// -- scan mode --

#[test]
fn scan_mode_maps_fixture_tree() {
    let assert = cmd()
        .args(["--cwd", &fixture_path("app"), "--ignore", "vendor/**"])
        .assert()
        .success();
    assert_eq!(stdout_json(&assert), expected_app());
}

#[test]
fn scan_mode_without_ignore_sees_vendor() {
    let assert = cmd()
        .args(["--cwd", &fixture_path("app")])
        .assert()
        .success();
    let value = stdout_json(&assert);
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["myModule", "vendorModule"]);
}

#[test]
fn scan_mode_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("yadop.json");
    std::fs::write(
        &config,
        json!({"cwd": fixture_path("app"), "ignore": ["vendor/**"]}).to_string(),
    )
    .unwrap();

    let assert = cmd()
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(stdout_json(&assert), expected_app());
}

#[test]
fn scan_mode_empty_tree() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["--cwd", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn scan_mode_markdown_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("docs/api.md");

    cmd()
        .args(["--cwd", &fixture_path("app"), "--ignore", "vendor/**"])
        .args(["-f", "markdown", "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout("");

    let markdown = std::fs::read_to_string(&out).unwrap();
    assert!(markdown.starts_with("# myModule\n"));
    assert!(markdown.contains("* [myComponent](#mycomponent) (component)"));
    assert!(markdown.contains("### Bindings"));
    assert!(markdown.contains("#### myServiceMethod(items)"));
}

#[test]
fn output_directory_uses_renderer_extension() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["--records", &fixture_path("records.json")])
        .args(["-f", "markdown", "-o", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let markdown = std::fs::read_to_string(dir.path().join("api.md")).unwrap();
    assert!(markdown.starts_with("# another-module\n"));
}

#[test]
fn missing_name_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("broken.js"),
        "/**\n * @ngdoc module\n * @description Nameless module\n */\n",
    )
    .unwrap();

    cmd()
        .args(["--cwd", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("module record is missing required @name tag"));
}

// -- records mode --

#[test]
fn records_mode_from_file() {
    let assert = cmd()
        .args(["--records", &fixture_path("records.json")])
        .assert()
        .success();
    assert_eq!(
        stdout_json(&assert),
        json!([{
            "name": "another-module",
            "entities": [{
                "name": "SomeService",
                "type": "service",
                "attributes": [],
                "requires": ["X", "Y"],
                "methods": [{
                    "name": "sayWhat",
                    "params": [{
                        "name": "items",
                        "description": "Items",
                        "optional": true,
                        "type": "Object[]"
                    }],
                    "returns": {"name": "message The message", "type": "object"}
                }]
            }]
        }])
    );
}

#[test]
fn records_mode_from_stdin() {
    let input = std::fs::read_to_string(fixture_path("records.json")).unwrap();
    let from_stdin = cmd()
        .args(["--records", "-"])
        .write_stdin(input)
        .assert()
        .success();
    let from_file = cmd()
        .args(["--records", &fixture_path("records.json")])
        .assert()
        .success();
    assert_eq!(stdout_json(&from_stdin), stdout_json(&from_file));
}

#[test]
fn records_mode_rejects_malformed_json() {
    cmd()
        .args(["--records", "-"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid annotation records in stdin"));
}

#[test]
fn records_mode_missing_file() {
    cmd()
        .args(["--records", "/nonexistent/records.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// -- argument errors --

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["--records", &fixture_path("records.json"), "-f", "html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: html"));
}

#[test]
fn invalid_pattern_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["--cwd", dir.path().to_str().unwrap(), "--pattern", "***/x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid glob pattern"));
}
