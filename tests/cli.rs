use std::fs;
use std::io::Read;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const COA: &str = r#"{
    "name": "Test COA",
    "version": "2.1",
    "accounts": [
        {"code": "1000", "name": "Cash, Bank", "type": "ASSET"},
        {"code": "2000", "name": "Liabilities", "type": "LIABILITY", "normalBalance": "CREDIT"},
        {"code": "5100", "name": "Rent \"Office\"", "type": "EXPENSE", "parentCode": "5000"}
    ]
}"#;

const TEMPLATES: &str = r#"{
    "templates": [
        {
            "name": "Rent",
            "description": "Monthly office rent",
            "lines": [
                {"accountCode": "5100", "position": "DEBIT", "formula": "amount"},
                {"accountCode": "1000", "position": "CREDIT", "formula": "amount"}
            ],
            "tags": ["monthly", "office"]
        }
    ]
}"#;

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seed-export").unwrap();
    cmd.current_dir(dir).env_remove("SEED_EXPORT_DIR");
    cmd
}

fn seeded_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("templates")).unwrap();
    fs::write(temp_dir.path().join("templates/coa.json"), COA).unwrap();
    fs::write(
        temp_dir.path().join("templates/journal-templates.json"),
        TEMPLATES,
    )
    .unwrap();
    temp_dir
}

fn read_entry(archive: &Path, name: &str) -> String {
    let file = fs::File::open(archive).unwrap();
    let mut zip = zip::ZipArchive::new(file).unwrap();
    let mut entry = zip.by_name(name).unwrap();
    let mut text = String::new();
    entry.read_to_string(&mut text).unwrap();
    text
}

#[test]
fn build_without_arguments() {
    let dir = seeded_dir();

    cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("Created artivisi-seed-data.zip"))
        .stdout(contains("  - 3 chart of accounts"))
        .stdout(contains("  - 1 journal templates"))
        .stdout(contains(
            "Import via: Settings > Import Data > Upload artivisi-seed-data.zip",
        ));

    let archive = dir.path().join("artivisi-seed-data.zip");
    let zip = zip::ZipArchive::new(fs::File::open(&archive).unwrap()).unwrap();
    assert_eq!(zip.len(), 35);

    let coa = read_entry(&archive, "02_chart_of_accounts.csv");
    assert!(coa.contains("1000,\"Cash, Bank\",ASSET,,DEBIT,true,\n"));
    assert!(coa.contains("5100,\"Rent \"\"Office\"\"\",EXPENSE,5000,DEBIT,true,\n"));

    let lines = read_entry(&archive, "05_journal_template_lines.csv");
    assert!(lines.contains("Rent,1,5100,,DEBIT,amount,\n"));
    assert!(lines.contains("Rent,2,1000,,CREDIT,amount,\n"));

    let manifest = read_entry(&archive, "MANIFEST.md");
    assert!(manifest.contains("- Chart of Accounts: 3 records"));
}

#[test]
fn build_subcommand_with_output_override() {
    let dir = seeded_dir();

    cmd(dir.path())
        .args(["build", "--output", "seed.zip"])
        .assert()
        .success()
        .stdout(contains("Created seed.zip"));

    assert!(dir.path().join("seed.zip").exists());
    assert!(!dir.path().join("artivisi-seed-data.zip").exists());
}

#[test]
fn missing_seed_file_fails() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .assert()
        .failure()
        .stderr(contains("Seed file not found"));

    assert!(!dir.path().join("artivisi-seed-data.zip").exists());
}

#[test]
fn malformed_seed_file_fails() {
    let dir = seeded_dir();
    fs::write(dir.path().join("templates/coa.json"), "{\"accounts\": [").unwrap();

    cmd(dir.path())
        .assert()
        .failure()
        .stderr(contains("coa.json"));
}

#[test]
fn strict_mode_rejects_unknown_account() {
    let dir = seeded_dir();

    // 5000 is referenced as a parent but never defined
    cmd(dir.path())
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("unknown parent code '5000'"));

    assert!(!dir.path().join("artivisi-seed-data.zip").exists());
}

#[test]
fn strict_flag_on_build_subcommand_is_enforced() {
    let dir = seeded_dir();

    cmd(dir.path())
        .args(["build", "--strict"])
        .assert()
        .failure()
        .stderr(contains("unknown parent code '5000'"));

    assert!(!dir.path().join("artivisi-seed-data.zip").exists());
}

#[test]
fn top_level_flags_before_subcommand_are_rejected() {
    let dir = seeded_dir();

    // Usage error: --strict must follow `build`, not precede it
    cmd(dir.path())
        .args(["--strict", "build"])
        .assert()
        .failure()
        .code(2);

    cmd(dir.path())
        .args(["--output", "other.zip", "inspect"])
        .assert()
        .failure()
        .code(2);

    assert!(!dir.path().join("artivisi-seed-data.zip").exists());
    assert!(!dir.path().join("other.zip").exists());
}

#[test]
fn hand_edited_values_reach_the_archive() {
    let dir = seeded_dir();
    fs::write(
        dir.path().join("templates/coa.json"),
        r#"{"accounts": [
            {"code": 1000, "name": "Cash", "type": "Asset", "normalBalance": "debit"},
            {"code": "5100", "name": "Rent", "type": "EXPENSE"}
        ]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("templates/journal-templates.json"),
        r#"{"templates": [{
            "name": "Rent",
            "category": null,
            "cashFlowCategory": null,
            "lines": [
                {"accountCode": 5100, "formula": 1500000},
                {"accountCode": 1000, "position": "CREDIT", "formula": 1500000}
            ],
            "tags": [2025]
        }]}"#,
    )
    .unwrap();

    cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("  - 2 chart of accounts"));

    let archive = dir.path().join("artivisi-seed-data.zip");
    let coa = read_entry(&archive, "02_chart_of_accounts.csv");
    assert!(coa.contains("\n1000,Cash,Asset,,debit,true,\n"));

    let templates = read_entry(&archive, "04_journal_templates.csv");
    assert!(templates.contains("\nRent,EXPENSE,OPERATING,SIMPLE,,"));

    let lines = read_entry(&archive, "05_journal_template_lines.csv");
    assert!(lines.contains("\nRent,1,5100,,DEBIT,1500000,\n"));
    assert!(lines.contains("\nRent,2,1000,,CREDIT,1500000,\n"));

    let tags = read_entry(&archive, "06_journal_template_tags.csv");
    assert_eq!(tags, "template_name,tag\nRent,2025\n");
}

#[test]
fn inspect_reports_layout() {
    let dir = seeded_dir();
    cmd(dir.path()).assert().success();

    cmd(dir.path())
        .arg("inspect")
        .assert()
        .success()
        .stdout(contains("02_chart_of_accounts.csv"))
        .stdout(contains("documents/index.csv"))
        .stdout(contains("Layout OK: 35 entries"));
}

#[test]
fn settings_file_changes_manifest_and_output() {
    let dir = seeded_dir();
    fs::write(
        dir.path().join("seed-export.json"),
        r#"{"companyName": "PT Contoh", "outputFile": "contoh.zip"}"#,
    )
    .unwrap();

    cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("Created contoh.zip"));

    let manifest = read_entry(&dir.path().join("contoh.zip"), "MANIFEST.md");
    assert!(manifest.contains("Name: PT Contoh"));
}
