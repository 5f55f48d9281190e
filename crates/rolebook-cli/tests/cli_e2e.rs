use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn rolebook_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rolebook"))
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(rolebook_bin())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("run rolebook")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

const ROLES_TSV: &str = "\
1\tMr Tickle\tTown Support\tTickle someone // Arms reach\tWin with the Town
2\tLittle Miss Bossy\tMafia Killing\tOrder a kill\tOutnumber the Town
header row that is too short
3\tLittle Miss Chaos\tNeutral Chaos\tCause trouble // Survive\tSee the world burn
";

const ROLELISTS_TSV: &str = "\
Town Any\tTown Any
Mafia Any\tMafia Killing
\tNeutral Any
";

#[test]
fn roles_uses_default_file_names() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("roles.tsv"), ROLES_TSV).unwrap();

    let output = run(dir.path(), &["roles"]);
    assert!(output.status.success(), "{output:?}");

    let json = fs::read_to_string(dir.path().join("roles.json")).unwrap();
    let roles: serde_json::Value = serde_json::from_str(&json).unwrap();
    let roles = roles.as_array().unwrap();
    assert_eq!(roles.len(), 3);
    assert_eq!(roles[0]["name"], "Mr. Tickle");
    assert_eq!(roles[1]["name"], "Little Miss<br>Bossy");
    assert_eq!(roles[2]["image"], "/images/Artboard 3.svg");
    assert!(json.starts_with("[\n    {\n        \"id\": 1,"));
}

#[test]
fn roles_fails_fast_on_bad_id() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.tsv"), "one\tA\tTown Any\tx\tw\n").unwrap();

    let output = run(dir.path(), &["roles", "in.tsv", "--out", "out.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid role id"));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn rolelists_missing_input_is_soft() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &["rolelists"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Error: rolelists.tsv file not found"));
    assert!(!dir.path().join("rolelists.json").exists());

    let strict = run(dir.path(), &["rolelists", "--strict"]);
    assert!(!strict.status.success());
}

#[test]
fn rolelists_reports_keys() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rolelists.tsv"), ROLELISTS_TSV).unwrap();

    let output = run(dir.path(), &["rolelists"]);
    assert!(output.status.success());
    let text = stdout(&output);
    // column 0 has 2 entries, column 1 has 3
    assert!(text.contains("Successfully processed 2 columns"), "{text}");
    assert!(text.contains("Column lengths found: ['2', '3']"), "{text}");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("rolelists.json")).unwrap())
            .unwrap();
    assert_eq!(json["3"][2], "Neutral Any");
}

#[test]
fn assign_is_reproducible_with_seed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("roles.tsv"), ROLES_TSV).unwrap();
    assert!(run(dir.path(), &["roles"]).status.success());
    fs::write(dir.path().join("slots.txt"), "Town Any\nMafia Any\nNeutral Non-Evil\nCoven Any\n").unwrap();
    fs::write(dir.path().join("players.txt"), "Ann\nBob\nCat\n").unwrap();

    let args = [
        "assign",
        "--slots",
        "slots.txt",
        "--players",
        "players.txt",
        "--seed",
        "friday",
        "--json",
    ];
    let first = run(dir.path(), &args);
    let second = run(dir.path(), &args);
    assert!(first.status.success(), "{first:?}");
    assert_eq!(stdout(&first), stdout(&second));

    let table: serde_json::Value = serde_json::from_str(&stdout(&first)).unwrap();
    let table = table.as_array().unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table[0]["role"]["id"], 1);
    assert_eq!(table[1]["role"]["id"], 2);
    assert_eq!(table[2]["role"]["id"], 3);
    assert_eq!(table[3]["error"], "No roles found for alignment: Coven");
    assert!(table[3]["playerName"].is_null());
}

#[test]
fn explore_plain_prints_default_list() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rolelists.tsv"), ROLELISTS_TSV).unwrap();
    assert!(run(dir.path(), &["rolelists"]).status.success());

    // No 12 and nothing >= 8: the smallest count (2) is shown.
    let output = run(dir.path(), &["explore", "--plain"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Town Any\nMafia Any\n");
}

#[test]
fn role_detail_wraps_and_strips_tags() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("roles.tsv"),
        "1\tMr Tickle\tTown Support\tTickle someone <night> // Reach\tWin\n\
         2\tLittle Miss Bossy\tMafia Killing\tOrder a kill\tOutnumber\n",
    )
    .unwrap();
    assert!(run(dir.path(), &["roles"]).status.success());

    let output = run(dir.path(), &["role", "1", "--step", "prev", "--json"]);
    assert!(output.status.success(), "{output:?}");
    let detail: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(detail["role"]["id"], 2);
    assert_eq!(detail["gender"], "female");

    let output = run(dir.path(), &["role", "99", "--json"]);
    let detail: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(detail["role"]["id"], 1);
    assert_eq!(detail["abilities"][0]["text"], "Tickle someone");
    assert_eq!(detail["abilities"][0]["tags"][0], "night");
    assert_eq!(detail["nextId"], 2);
}
