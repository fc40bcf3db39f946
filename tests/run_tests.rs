//! Run command integration tests using the real depremap binary

mod common;

use predicates::prelude::*;

#[test]
fn test_zero_args_copies_remapped_dependency() {
    let project = common::TestProject::new();
    project.install_file("@openzeppelin/contracts/token/ERC20/ERC20.sol", "contract ERC20 {}");
    project.install_file("@openzeppelin/contracts/.npmignore", "test/");
    project.write_config(&[(
        "@openzeppelin/contracts",
        "OpenZeppelin/openzeppelin-contracts@4.3.2/contracts",
    )]);

    project
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Copy @openzeppelin/contracts to OpenZeppelin/openzeppelin-contracts@4.3.2/contracts",
        ))
        .stdout(predicate::str::contains("Remapped 1 entry"));

    assert_eq!(
        project.read_file(
            "node_modules/OpenZeppelin/openzeppelin-contracts@4.3.2/contracts/token/ERC20/ERC20.sol"
        ),
        "contract ERC20 {}"
    );
    assert!(project.file_exists(
        "node_modules/OpenZeppelin/openzeppelin-contracts@4.3.2/contracts/.npmignore"
    ));
}

#[test]
fn test_scenario_second_entry_missing_exits_nonzero() {
    let project = common::TestProject::new();
    project.install_file("pkgA/lib/x.txt", "hello");
    project.write_config(&[
        ("pkgA/lib", "vendor/pkgA@1.0/lib"),
        ("pkgB/lib", "vendor/pkgB@2.0/lib"),
    ]);

    project
        .cmd()
        .arg("run")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Copy pkgA/lib to vendor/pkgA@1.0/lib"))
        .stdout(predicate::str::contains("Copy pkgB/lib to vendor/pkgB@2.0/lib"))
        .stderr(predicate::str::contains("pkgB/lib"))
        .stderr(predicate::str::contains("Source directory not found"));

    assert_eq!(
        project.read_file("node_modules/vendor/pkgA@1.0/lib/x.txt"),
        "hello"
    );
    assert!(!project.file_exists("node_modules/vendor/pkgB@2.0"));
}

#[test]
fn test_first_failure_stops_later_entries() {
    let project = common::TestProject::new();
    project.install_file("one/a.txt", "1");
    project.install_file("three/c.txt", "3");
    project.write_config(&[
        ("one", "vendor/one"),
        ("two", "vendor/two"),
        ("three", "vendor/three"),
    ]);

    project
        .cmd()
        .assert()
        .failure()
        .stdout(predicate::str::contains("Copy three").not());

    assert!(project.file_exists("node_modules/vendor/one/a.txt"));
    assert!(!project.file_exists("node_modules/vendor/three"));
}

#[test]
fn test_rerun_is_idempotent() {
    let project = common::TestProject::new();
    project.install_file("pkgA/lib/x.txt", "hello");
    project.install_file("pkgA/lib/nested/y.txt", "world");
    project.write_config(&[("pkgA/lib", "vendor/pkgA@1.0/lib")]);

    project.cmd().assert().success();
    let first = project.read_file("node_modules/vendor/pkgA@1.0/lib/nested/y.txt");
    project.cmd().assert().success();
    let second = project.read_file("node_modules/vendor/pkgA@1.0/lib/nested/y.txt");

    assert_eq!(first, second);
    assert_eq!(
        project.read_file("node_modules/vendor/pkgA@1.0/lib/x.txt"),
        "hello"
    );
}

#[test]
fn test_existing_destination_is_merged() {
    let project = common::TestProject::new();
    project.install_file("pkgA/lib/x.txt", "new");
    project.install_file("vendor/lib/x.txt", "old");
    project.install_file("vendor/lib/extra.txt", "keep");
    project.write_config(&[("pkgA/lib", "vendor/lib")]);

    project.cmd().assert().success();

    assert_eq!(project.read_file("node_modules/vendor/lib/x.txt"), "new");
    assert_eq!(project.read_file("node_modules/vendor/lib/extra.txt"), "keep");
}

#[test]
fn test_junk_files_are_not_copied() {
    let project = common::TestProject::new();
    project.install_file("pkgA/x.txt", "x");
    project.install_file("pkgA/.DS_Store", "junk");
    project.install_file("pkgA/Thumbs.db", "junk");
    project.write_config(&[("pkgA", "vendor/a")]);

    project
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("2 skipped"));

    assert!(project.file_exists("node_modules/vendor/a/x.txt"));
    assert!(!project.file_exists("node_modules/vendor/a/.DS_Store"));
    assert!(!project.file_exists("node_modules/vendor/a/Thumbs.db"));
}

#[test]
fn test_verbose_lists_each_file() {
    let project = common::TestProject::new();
    project.install_file("pkgA/lib/x.txt", "x");
    project.install_file("pkgA/lib/sub/y.txt", "y");
    project.write_config(&[("pkgA/lib", "vendor/lib")]);

    project
        .cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("x.txt"))
        .stdout(predicate::str::contains("sub/y.txt"));
}

#[test]
fn test_empty_table_succeeds() {
    let project = common::TestProject::new();
    project.write_file("depremap.yaml", "remappings: []\n");

    project
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No remappings configured"));
}

#[test]
fn test_json_config_and_custom_root() {
    let project = common::TestProject::new();
    project.write_file("deps/pkgA/x.txt", "hello");
    project.write_file(
        "depremap.json",
        r#"{ "root": "deps", "remappings": [ { "from": "pkgA", "to": "vendor/pkgA@1.0" } ] }"#,
    );

    project.cmd().assert().success();

    assert_eq!(project.read_file("deps/vendor/pkgA@1.0/x.txt"), "hello");
}

#[test]
fn test_config_and_root_flags() {
    let project = common::TestProject::new();
    project.write_file("elsewhere/pkgA/x.txt", "hello");
    project.write_file(
        "ci/remap.yaml",
        "remappings:\n  - from: pkgA\n    to: vendor/pkgA\n",
    );

    project
        .cmd()
        .args(["--config", "ci/remap.yaml", "--root", "elsewhere"])
        .assert()
        .success();

    assert_eq!(project.read_file("elsewhere/vendor/pkgA/x.txt"), "hello");
}

#[test]
fn test_env_vars_select_config_and_root() {
    let project = common::TestProject::new();
    project.write_file("elsewhere/pkgA/x.txt", "hello");
    project.write_file(
        "ci/remap.yaml",
        "remappings:\n  - from: pkgA\n    to: vendor/pkgA\n",
    );

    project
        .cmd()
        .env("DEPREMAP_CONFIG", "ci/remap.yaml")
        .env("DEPREMAP_ROOT", "elsewhere")
        .assert()
        .success();

    assert!(project.file_exists("elsewhere/vendor/pkgA/x.txt"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_package_is_materialized() {
    let project = common::TestProject::new();
    project.write_file("workspace-pkg/lib/x.txt", "linked");
    std::os::unix::fs::symlink(
        project.path.join("workspace-pkg"),
        project.path.join("node_modules/pkgA"),
    )
    .expect("Failed to create symlink");
    project.write_config(&[("pkgA/lib", "vendor/lib")]);

    project.cmd().assert().success();

    let meta = std::fs::symlink_metadata(project.path.join("node_modules/vendor/lib/x.txt"))
        .expect("Missing copied file");
    assert!(meta.file_type().is_file());
    assert_eq!(project.read_file("node_modules/vendor/lib/x.txt"), "linked");
}
