/// End-to-end tests: golden matrix scenarios on disk and the CLI
use dep_matrix::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HOST: &str = "fake.git";
const OWNER: &str = "acme";

fn fixture(scenario: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(scenario)
}

/// Temporary repository with an empty `dependency-matrix` directory.
fn empty_repo() -> TempDir {
    let repo = TempDir::new().unwrap();
    fs::create_dir(repo.path().join("dependency-matrix")).unwrap();
    repo
}

/// Temporary repository seeded with the scenario's `matrix.yaml`.
fn repo_from_fixture(scenario: &str) -> TempDir {
    let repo = empty_repo();
    fs::copy(
        fixture(scenario).join("dependency-matrix/matrix.yaml"),
        matrix_yaml(repo.path()),
    )
    .unwrap();
    repo
}

fn matrix_yaml(repo: &Path) -> PathBuf {
    repo.join("dependency-matrix/matrix.yaml")
}

/// The written matrix must equal the golden file byte for byte.
fn assert_matches_golden(scenario: &str, repo: &Path) {
    let expected = fs::read_to_string(fixture(scenario).join("matrix.golden.yaml")).unwrap();
    let actual = fs::read_to_string(matrix_yaml(repo)).unwrap();
    assert_eq!(actual, expected, "matrix.yaml differs from {} golden", scenario);
}

fn hop(repo: &str) -> DependencyUpdateDetails {
    let to_version = "0.0.2";
    let from_version = "0.0.1";
    DependencyUpdateDetails {
        host: HOST.to_string(),
        owner: OWNER.to_string(),
        repo: repo.to_string(),
        url: format!("https://{}/{}/{}.git", HOST, OWNER, repo),
        to_release_html_url: format!("https://{}/{}/{}/releases/v{}", HOST, OWNER, repo, to_version),
        to_version: to_version.to_string(),
        to_release_name: to_version.to_string(),
        from_release_html_url: format!("https://{}/{}/{}/releases/v{}", HOST, OWNER, repo, from_version),
        from_release_name: from_version.to_string(),
        from_version: from_version.to_string(),
        ..Default::default()
    }
}

fn roadrunner_with_cheese() -> DependencyUpdate {
    let mut details = hop("roadrunner");
    details.component = "cheese".to_string();
    DependencyUpdate::direct(details)
}

mod golden_tests {
    use super::*;

    #[test]
    fn test_update_simple_matrix() {
        let repo = repo_from_fixture("simple_matrix");
        update_dependency_matrix(repo.path(), &roadrunner_with_cheese()).unwrap();
        assert_matches_golden("simple_matrix", repo.path());
    }

    #[test]
    fn test_update_one_degree_matrix() {
        let repo = repo_from_fixture("one_degree_matrix");
        let update = DependencyUpdate::with_paths(hop("roadrunner"), vec![vec![hop("wiley")]]);
        update_dependency_matrix(repo.path(), &update).unwrap();
        assert_matches_golden("one_degree_matrix", repo.path());
    }

    #[test]
    fn test_update_two_paths_matrix() {
        let repo = repo_from_fixture("two_paths_matrix");
        let update = DependencyUpdate::with_paths(hop("roadrunner"), vec![vec![hop("wiley")]]);
        update_dependency_matrix(repo.path(), &update).unwrap();
        assert_matches_golden("two_paths_matrix", repo.path());
    }

    #[test]
    fn test_update_two_degree_matrix() {
        let repo = repo_from_fixture("two_degree_matrix");
        let update = DependencyUpdate::with_paths(
            hop("roadrunner"),
            vec![vec![hop("wiley"), hop("coyote")]],
        );
        update_dependency_matrix(repo.path(), &update).unwrap();
        assert_matches_golden("two_degree_matrix", repo.path());
    }

    #[test]
    fn test_create_new_matrix() {
        let repo = empty_repo();
        update_dependency_matrix(repo.path(), &roadrunner_with_cheese()).unwrap();
        assert_matches_golden("new_matrix", repo.path());
        assert!(repo.path().join("dependency-matrix/matrix.md").is_file());
    }

    #[test]
    fn test_update_is_idempotent() {
        let repo = repo_from_fixture("one_degree_matrix");
        let update = DependencyUpdate::with_paths(hop("roadrunner"), vec![vec![hop("wiley")]]);
        update_dependency_matrix(repo.path(), &update).unwrap();
        let first = fs::read_to_string(matrix_yaml(repo.path())).unwrap();

        update_dependency_matrix(repo.path(), &update).unwrap();
        let second = fs::read_to_string(matrix_yaml(repo.path())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_update_without_matrix_dir_is_noop() {
        let repo = TempDir::new().unwrap();
        let response = update_dependency_matrix(repo.path(), &roadrunner_with_cheese()).unwrap();

        assert!(!response.applied);
        assert!(fs::read_dir(repo.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_update_leaves_only_matrix_files_in_matrix_dir() {
        for scenario in [
            "simple_matrix",
            "one_degree_matrix",
            "two_paths_matrix",
            "two_degree_matrix",
        ] {
            let repo = repo_from_fixture(scenario);
            update_dependency_matrix(repo.path(), &roadrunner_with_cheese()).unwrap();

            let mut names: Vec<String> = fs::read_dir(repo.path().join("dependency-matrix"))
                .unwrap()
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            assert_eq!(names, vec!["matrix.md", "matrix.yaml"], "{}", scenario);
        }
    }

    #[test]
    fn test_find_version_for_dependency() {
        let matrix = FileSystemMatrixStore::new()
            .load_matrix(&fixture("two_degree_matrix"))
            .unwrap()
            .unwrap();

        assert_eq!(
            matrix.find_version_for_dependency("fake.git", "acme", "roadrunner").unwrap(),
            "0.0.1"
        );

        let err = matrix
            .find_version_for_dependency("doesnotexist", "doesnotexist", "doesnotexist")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not find a dependency on host doesnotexist, owner doesnotexist, repo doesnotexist in the dependency matrix"
        );
    }

    #[test]
    fn test_verify_after_partial_update_detects_drift() {
        let repo = repo_from_fixture("two_paths_matrix");
        let update = DependencyUpdate::with_paths(hop("roadrunner"), vec![vec![hop("wiley")]]);
        update_dependency_matrix(repo.path(), &update).unwrap();

        let err = verify_dependency_matrix_has_consistent_versions(repo.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("0.0.1: fake.git/acme/coyote"));
        assert!(message.contains("0.0.2: fake.git/acme/wiley"));
    }

    #[test]
    fn test_verify_golden_scenarios_are_consistent() {
        for scenario in ["simple_matrix", "one_degree_matrix", "two_degree_matrix"] {
            let repo = repo_from_fixture(scenario);
            verify_dependency_matrix_has_consistent_versions(repo.path()).unwrap();
        }
    }

    #[test]
    fn test_generate_markdown_for_fixture() {
        let matrix = FileSystemMatrixStore::new()
            .load_matrix(&fixture("two_paths_matrix"))
            .unwrap()
            .unwrap();
        let out = TempDir::new().unwrap();
        let path = out.path().join("matrix.md");

        generate_markdown_dependency_matrix(&path, &matrix).unwrap();

        let markdown = fs::read_to_string(path).unwrap();
        assert!(markdown.contains("[acme/roadrunner](https://fake.git/acme/roadrunner.git)"));
        assert!(markdown.contains("[0.0.1](https://fake.git/acme/roadrunner/releases/v0.0.1)"));
        assert!(markdown.contains("[fake.git/acme/coyote](https://fake.git/acme/coyote.git)"));
    }
}

// Exit code and command tests for the CLI
mod cli_tests {
    use super::*;
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("dep-matrix").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("dep-matrix")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("dep-matrix")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: update without an update
    #[test]
    fn test_exit_code_update_missing_flags() {
        cargo_bin_cmd!("dep-matrix")
            .args(["update", "--owner", "acme"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent repository path
    #[test]
    fn test_exit_code_application_error_nonexistent_path() {
        cargo_bin_cmd!("dep-matrix")
            .args(["verify", "--dir", "/nonexistent/path/that/does/not/exist"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Directory does not exist"));
    }

    #[test]
    fn test_parse_dependency_message() {
        cargo_bin_cmd!("dep-matrix")
            .args(["parse", "chore(deps): bump acme/roadrunner:cheese from 0.0.1 to 0.0.2"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("owner: acme"))
            .stdout(predicate::str::contains("repo: roadrunner"))
            .stdout(predicate::str::contains("component: cheese"))
            .stdout(predicate::str::contains("toVersion: 0.0.2"));
    }

    #[test]
    fn test_parse_dependency_message_as_json() {
        cargo_bin_cmd!("dep-matrix")
            .args([
                "parse",
                "chore(deps): bump https://fake.git/acme/roadrunner.git from 0.0.1 to 0.0.2",
                "--format",
                "json",
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"host\": \"fake.git\""))
            .stdout(predicate::str::contains("\"fromVersion\": \"0.0.1\""));
    }

    #[test]
    fn test_parse_other_message() {
        cargo_bin_cmd!("dep-matrix")
            .args(["parse", "fix: correct typo"])
            .assert()
            .code(0)
            .stdout("not a dependency update message\n");
    }

    #[test]
    fn test_parse_malformed_message() {
        cargo_bin_cmd!("dep-matrix")
            .args(["parse", "chore(deps): bump acme/roadrunner to 0.0.2"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("failed to parse dependency update message"));
    }

    #[test]
    fn test_update_from_flags_matches_golden() {
        let repo = repo_from_fixture("simple_matrix");
        cargo_bin_cmd!("dep-matrix")
            .args(["update", "--no-color", "--dir"])
            .arg(repo.path())
            .args([
                "--host",
                "fake.git",
                "--owner",
                "acme",
                "--repo",
                "roadrunner",
                "--component",
                "cheese",
                "--url",
                "https://fake.git/acme/roadrunner.git",
                "--from-version",
                "0.0.1",
                "--to-version",
                "0.0.2",
                "--to-release-url",
                "https://fake.git/acme/roadrunner/releases/v0.0.2",
            ])
            .assert()
            .code(0);

        assert_matches_golden("simple_matrix", repo.path());
    }

    #[test]
    fn test_update_from_file_matches_golden() {
        let repo = repo_from_fixture("two_degree_matrix");
        let update = DependencyUpdate::with_paths(
            hop("roadrunner"),
            vec![vec![hop("wiley"), hop("coyote")]],
        );
        let update_file = repo.path().join("update.yaml");
        fs::write(&update_file, serde_yaml_ng::to_string(&update).unwrap()).unwrap();

        cargo_bin_cmd!("dep-matrix")
            .args(["update", "--dir"])
            .arg(repo.path())
            .arg("--update-file")
            .arg(&update_file)
            .assert()
            .code(0);

        assert_matches_golden("two_degree_matrix", repo.path());
    }

    #[test]
    fn test_update_with_upstream_then_find() {
        let repo = empty_repo();
        let upstream = fixture("upstream").join("dependency-updates.yaml");

        cargo_bin_cmd!("dep-matrix")
            .args(["update", "--dir"])
            .arg(repo.path())
            .args([
                "--host",
                "fake.git",
                "--owner",
                "acme",
                "--repo",
                "wiley",
                "--to-version",
                "0.0.2",
                "--upstream",
            ])
            .arg(&upstream)
            .assert()
            .code(0);

        cargo_bin_cmd!("dep-matrix")
            .args(["find", "--dir"])
            .arg(repo.path())
            .args(["--host", "fake.git", "--owner", "acme", "--repo", "roadrunner"])
            .assert()
            .code(0)
            .stdout("0.0.2\n");

        let matrix: DependencyMatrix =
            serde_yaml_ng::from_str(&fs::read_to_string(matrix_yaml(repo.path())).unwrap()).unwrap();
        let roadrunner = matrix
            .dependencies
            .iter()
            .find(|d| d.repo == "roadrunner")
            .unwrap();
        assert_eq!(roadrunner.sources[0].path.to_string(), "fake.git/acme/wiley");
    }

    #[test]
    fn test_update_without_matrix_dir_records_nothing() {
        let repo = TempDir::new().unwrap();
        cargo_bin_cmd!("dep-matrix")
            .args(["update", "--dir"])
            .arg(repo.path())
            .args(["--owner", "acme", "--repo", "roadrunner", "--to-version", "0.0.2"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("not enabled"));

        assert!(!repo.path().join("dependency-matrix").exists());
    }

    #[test]
    fn test_verify_consistent_fixture() {
        cargo_bin_cmd!("dep-matrix")
            .args(["verify", "--dir"])
            .arg(fixture("two_degree_matrix"))
            .assert()
            .code(0)
            .stderr(predicate::str::contains("consistent"));
    }

    #[test]
    fn test_verify_missing_matrix_succeeds_with_warning() {
        let repo = TempDir::new().unwrap();
        cargo_bin_cmd!("dep-matrix")
            .args(["verify", "--dir"])
            .arg(repo.path())
            .assert()
            .code(0)
            .stderr(predicate::str::contains("no dependency matrix found"));
    }

    #[test]
    fn test_verify_with_file_in_place_of_matrix_dir_succeeds() {
        let repo = TempDir::new().unwrap();
        fs::write(repo.path().join("dependency-matrix"), "").unwrap();

        cargo_bin_cmd!("dep-matrix")
            .args(["verify", "--dir"])
            .arg(repo.path())
            .assert()
            .code(0)
            .stderr(predicate::str::contains("no dependency matrix found"));
    }

    #[test]
    fn test_verify_drift_exits_with_one() {
        let repo = repo_from_fixture("two_paths_matrix");
        let update = DependencyUpdate::with_paths(hop("roadrunner"), vec![vec![hop("wiley")]]);
        update_dependency_matrix(repo.path(), &update).unwrap();

        cargo_bin_cmd!("dep-matrix")
            .args(["verify", "--dir"])
            .arg(repo.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("drift detected"))
            .stderr(predicate::str::contains("0.0.1: fake.git/acme/coyote"));
    }

    #[test]
    fn test_verify_unreadable_matrix_exits_with_three() {
        let repo = empty_repo();
        fs::create_dir(matrix_yaml(repo.path())).unwrap();

        cargo_bin_cmd!("dep-matrix")
            .args(["verify", "--dir"])
            .arg(repo.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("is a directory"));
    }

    #[test]
    fn test_render_writes_markdown() {
        let repo = repo_from_fixture("two_paths_matrix");
        cargo_bin_cmd!("dep-matrix")
            .args(["render", "--dir"])
            .arg(repo.path())
            .assert()
            .code(0);

        let markdown = fs::read_to_string(repo.path().join("dependency-matrix/matrix.md")).unwrap();
        assert!(markdown.starts_with("# Dependency Matrix\n"));
        assert!(markdown.contains("acme/roadrunner"));
    }

    #[test]
    fn test_find_unknown_dependency() {
        cargo_bin_cmd!("dep-matrix")
            .args(["find", "--dir"])
            .arg(fixture("two_degree_matrix"))
            .args(["--host", "doesnotexist", "--owner", "doesnotexist", "--repo", "doesnotexist"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "could not find a dependency on host doesnotexist, owner doesnotexist, repo doesnotexist in the dependency matrix",
            ));
    }

    #[test]
    fn test_collect_writes_updates_file() {
        let dir = TempDir::new().unwrap();
        let messages = dir.path().join("messages.txt");
        fs::write(
            &messages,
            "chore(deps): bump acme/roadrunner from 0.0.1 to 0.0.2\n---\nfeat: new flag\n---\nchore(dependencies): update acme/wiley:chart from 1.0.0 to 1.1.0\n",
        )
        .unwrap();
        let output = dir.path().join("dependency-updates.yaml");

        cargo_bin_cmd!("dep-matrix")
            .args(["collect", "--default-host", "fake.git", "--messages"])
            .arg(&messages)
            .arg("--output")
            .arg(&output)
            .assert()
            .code(0);

        let updates: DependencyUpdates =
            serde_yaml_ng::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(updates.updates.len(), 2);
        assert_eq!(updates.updates[0].details.host, "fake.git");
        assert_eq!(updates.updates[0].details.repo, "roadrunner");
        assert_eq!(updates.updates[1].details.component, "chart");
        assert_eq!(updates.updates[1].details.to_version, "1.1.0");
    }
}
