use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const SCHEMA: &str = r#"-- MySQL dump
CREATE TABLE `wo_users` (
  `user_id` int(11) NOT NULL AUTO_INCREMENT,
  PRIMARY KEY (`user_id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;

CREATE TABLE `Wo_Users` (
  `user_id` int(11) NOT NULL AUTO_INCREMENT,
  PRIMARY KEY (`user_id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;

CREATE TABLE `posts` (
  `id` int(11) NOT NULL
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;
"#;

const SCHEMA_FILE: &str = "socialhub-01-structure.sql";

const APP_SCHEMA: &str = "CREATE TABLE `App_Log` (x int);\nCREATE TABLE `app_log` (x int);";

#[test]
fn test_analyze_writes_report_and_script() -> Result<()> {
    let test = CliTest::with_file(SCHEMA_FILE, SCHEMA)?;

    assert_cmd_snapshot!(test.analyze_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Analyzing database structure...
       Tables found: 3

    Searching for duplicates...
       Duplicate groups found: 1
       ✓ Report written: duplicates_report.txt

    Generating SQL script...
       ✓ Created: cleanup_duplicates.sql
       Tables to drop: 1

    ================================================================================
    DONE
    ================================================================================

       3 tables, 1 duplicate groups, 1 tables to drop

    Files created:
       1. duplicates_report.txt - detailed report
       2. cleanup_duplicates.sql - SQL cleanup script

    IMPORTANT:
       1. Review duplicates_report.txt
       2. Back up the database before running the script!
       3. Run: mysql -u social -p socialhub < cleanup_duplicates.sql


    ----- stderr -----
    ");

    assert_snapshot!(test.read_file("duplicates_report.txt")?, @r"
    ================================================================================
    DUPLICATE TABLES REPORT
    ================================================================================

    Group: wo_users
      Variants:
        - wo_users [KEEP]
        - Wo_Users [REMOVE]


    Total duplicate groups: 1
    ");

    assert_snapshot!(test.read_file("cleanup_duplicates.sql")?, @r"
    -- ============================================
    -- Duplicate table cleanup script
    -- Generated automatically
    -- ============================================

    -- IMPORTANT: back up the database before running this script!
    -- mysqldump -u social -p socialhub > backup_$(date +%Y%m%d_%H%M%S).sql

    USE socialhub;

    -- Group: wo_users
    -- Keep: wo_users
    -- Drop: Wo_Users

    -- ============================================
    -- DROP TABLE statements
    -- ============================================

    DROP TABLE IF EXISTS `Wo_Users`;

    -- Total tables to drop: 1
    ");

    Ok(())
}

#[test]
fn test_analyze_verbose_lists_decisions() -> Result<()> {
    let test = CliTest::with_file(SCHEMA_FILE, SCHEMA)?;

    assert_cmd_snapshot!(test.analyze_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    Analyzing database structure...
       Tables found: 3

    Searching for duplicates...
       Duplicate groups found: 1
       wo_users
         ✓ keep   wo_users
         ✘ remove Wo_Users
       ✓ Report written: duplicates_report.txt

    Generating SQL script...
       ✓ Created: cleanup_duplicates.sql
       Tables to drop: 1

    ================================================================================
    DONE
    ================================================================================

       3 tables, 1 duplicate groups, 1 tables to drop

    Files created:
       1. duplicates_report.txt - detailed report
       2. cleanup_duplicates.sql - SQL cleanup script

    IMPORTANT:
       1. Review duplicates_report.txt
       2. Back up the database before running the script!
       3. Run: mysql -u social -p socialhub < cleanup_duplicates.sql


    ----- stderr -----
    No .casedup.json found, using defaults
    ");

    Ok(())
}

#[test]
fn test_analyze_missing_schema_fails() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.analyze_command().args(["--schema", "missing.sql"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    Analyzing database structure...

    ----- stderr -----
    Error: Failed to read schema file: missing.sql: No such file or directory (os error 2)
    ");

    assert!(!test.root().join("duplicates_report.txt").exists());
    assert!(!test.root().join("cleanup_duplicates.sql").exists());

    Ok(())
}

#[test]
fn test_analyze_is_deterministic() -> Result<()> {
    let test = CliTest::with_file(SCHEMA_FILE, SCHEMA)?;

    test.analyze_command().output()?;
    let first_report = test.read_file("duplicates_report.txt")?;
    let first_sql = test.read_file("cleanup_duplicates.sql")?;

    test.analyze_command().output()?;
    assert_eq!(test.read_file("duplicates_report.txt")?, first_report);
    assert_eq!(test.read_file("cleanup_duplicates.sql")?, first_sql);

    Ok(())
}

#[test]
fn test_analyze_without_duplicates() -> Result<()> {
    let test = CliTest::with_file(SCHEMA_FILE, "CREATE TABLE `posts` (`id` int);")?;
    let output = test.analyze_command().output()?;

    assert!(output.status.success());
    let report = test.read_file("duplicates_report.txt")?;
    assert!(report.ends_with("\n\nTotal duplicate groups: 0\n"));
    let sql = test.read_file("cleanup_duplicates.sql")?;
    assert!(!sql.contains("DROP TABLE IF EXISTS"));

    Ok(())
}

#[test]
fn test_analyze_cli_overrides() -> Result<()> {
    let test = CliTest::with_file("dumps/schema.sql", SCHEMA)?;
    let mut cmd = test.analyze_command();
    cmd.args([
        "--schema",
        "dumps/schema.sql",
        "--report",
        "out.txt",
        "--output",
        "drop.sql",
        "--database",
        "staging",
    ]);
    let output = cmd.output()?;

    assert!(output.status.success());
    assert!(test.read_file("out.txt")?.contains("Group: wo_users"));
    assert!(test.read_file("drop.sql")?.contains("USE staging;"));

    Ok(())
}

#[test]
fn test_analyze_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("dump.sql", APP_SCHEMA)?;
    test.write_file(
        ".casedup.json",
        r#"{
            "schemaFile": "dump.sql",
            "outputFile": "cleanup.sql",
            "keepPrefix": "app_"
        }"#,
    )?;
    let output = test.analyze_command().output()?;

    assert!(output.status.success());
    let sql = test.read_file("cleanup.sql")?;
    assert!(sql.contains("-- Keep: app_log"));
    assert!(sql.contains("DROP TABLE IF EXISTS `App_Log`;"));

    Ok(())
}

#[test]
fn test_analyze_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(SCHEMA_FILE, SCHEMA)?;
    test.write_file(".casedup.json", r#"{ "database": "bad name" }"#)?;

    assert_cmd_snapshot!(test.analyze_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid database name in 'database': "bad name"
    "#);

    Ok(())
}
