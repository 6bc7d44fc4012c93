//! Runs the genspecials binary against a throwaway engine checkout.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

const ACTIONS: &str = r#"
//
// EV_ActionDoorClose
//
// Implements Door_Close(tag, speed, lighttag)
// * ExtraData: 300
// * Hexen:     10
//
static bool EV_ActionDoorClose(ev_action_t *action, ev_instance_t *instance)
{
   return false;
}

//
// EV_ActionPolyobjStartLine
//
// Implements Polyobj_StartLine(po, mirror, sound)
// * ExtraData: 401
// * Hexen:     1
//
"#;

const BINDINGS: &str = r#"
ev_binding_t HexenBindings[] =
{
   LINESPECNAMED(  1, EV_ActionPolyobjStartLine, "Polyobj_StartLine")
   LINESPECNAMED( 10, EV_ActionDoorClose,        "Door_Close")
};
"#;

fn checkout() -> TempDir {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("ev_actions.cpp"), ACTIONS).unwrap();
    fs::write(source.join("ev_bindings.cpp"), BINDINGS).unwrap();
    temp
}

fn genspecials(root: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_genspecials"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run genspecials")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_table_command() {
    let root = checkout();
    let output = genspecials(root.path(), &["table"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "specials\n\t  1:Polyobj_StartLine(3),\n\t 10:Door_Close(3);\n"
    );
}

#[test]
fn test_xref_command() {
    let root = checkout();
    let output = genspecials(root.path(), &["xref"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1 EV_ActionPolyobjStartLine Polyobj_StartLine\n\
         10 EV_ActionDoorClose Door_Close\n\
         special\n\
         \t10:Door_Close(3)\n\
         \t1:Polyobj_StartLine(3)\n"
    );
}

#[test]
fn test_xref_without_echo() {
    let root = checkout();
    let output = genspecials(root.path(), &["xref", "--no-echo"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "special\n\t10:Door_Close(3)\n\t1:Polyobj_StartLine(3)\n"
    );
}

#[test]
fn test_config_file_paths() {
    let root = checkout();
    fs::rename(
        root.path().join("source/ev_actions.cpp"),
        root.path().join("actions.cpp"),
    )
    .unwrap();
    fs::write(
        root.path().join("genspecials.toml"),
        "[paths]\nactions = \"actions.cpp\"\n",
    )
    .unwrap();

    let output = genspecials(root.path(), &["table"]);
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("\t 10:Door_Close(3);\n"));
}

#[test]
fn test_missing_input_fails() {
    let root = TempDir::new().unwrap();
    let output = genspecials(root.path(), &["table"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"));
}

#[test]
fn test_empty_table() {
    let root = checkout();
    fs::write(root.path().join("source/ev_actions.cpp"), "int x;\n").unwrap();

    let output = genspecials(root.path(), &["table"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "specials\n");

    let output = genspecials(root.path(), &["table", "--deny-empty"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no specials found"));
}

#[test]
fn test_check_json() {
    let root = checkout();
    let output = genspecials(root.path(), &["check", "--mode", "cross-reference", "--json"]);

    assert!(output.status.success());
    let json = stdout(&output);
    assert!(json.contains("\"style\": \"streamed\""));
    assert!(json.contains("\"binding_count\": 2"));
}
