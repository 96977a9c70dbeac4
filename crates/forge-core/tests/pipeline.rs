//! End-to-end generation runs against a fake toolchain

use forge_core::error::{ProcessError, ProcessFailure};
use forge_core::{
    generate, AdvancedFeature, Database, ForgeError, Framework, Notice, ProjectConfig, Toolchain,
    ValidationError,
};
use std::cell::RefCell;
use std::fs;
use std::path::Path;

/// Records every call and writes the `go.mod` a real `go mod init` would
#[derive(Default)]
struct FakeToolchain {
    calls: RefCell<Vec<String>>,
    fail_format: bool,
    fail_tidy: bool,
}

impl FakeToolchain {
    fn failure(command: &str, dir: &Path) -> ProcessError {
        ProcessError {
            command: command.to_string(),
            dir: dir.to_path_buf(),
            reason: ProcessFailure::Status {
                code: Some(1),
                stderr: "boom".to_string(),
            },
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Toolchain for FakeToolchain {
    fn init_module(&self, name: &str, dir: &Path) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push(format!("go mod init {}", name));
        fs::write(dir.join("go.mod"), format!("module {}\n\ngo 1.22\n", name))
            .map_err(|e| ProcessError {
                command: "go mod init".to_string(),
                dir: dir.to_path_buf(),
                reason: ProcessFailure::Spawn(e),
            })
    }

    fn fetch_dependency(&self, package: &str, _dir: &Path) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push(format!("go get -u {}", package));
        Ok(())
    }

    fn format_source(&self, dir: &Path) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push("gofmt -s -w .".to_string());
        if self.fail_format {
            return Err(Self::failure("gofmt -s -w .", dir));
        }
        Ok(())
    }

    fn tidy_dependencies(&self, dir: &Path) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push("go mod tidy".to_string());
        if self.fail_tidy {
            return Err(Self::failure("go mod tidy", dir));
        }
        Ok(())
    }

    fn init_version_control(&self, dir: &Path) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push("git init".to_string());
        fs::create_dir_all(dir.join(".git")).map_err(|e| ProcessError {
            command: "git init".to_string(),
            dir: dir.to_path_buf(),
            reason: ProcessFailure::Spawn(e),
        })
    }
}

fn config(root: &Path, framework: Framework, database: Database) -> ProjectConfig {
    ProjectConfig::new(root)
        .with_project_name("demo")
        .with_framework(framework)
        .with_database(database)
        .with_features(&[])
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("could not read {}: {}", relative, e))
}

#[test]
fn test_minimal_project_tree() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path(), Framework::Chi, Database::None);
    let toolchain = FakeToolchain::default();

    let report = generate(&mut config, &toolchain).unwrap();
    let root = dir.path().join("demo");
    assert_eq!(report.project_root, root);

    for file in [
        "go.mod",
        "cmd/api/main.go",
        "Makefile",
        "README.md",
        "internal/server/server.go",
        "internal/server/routes.go",
        ".env",
        ".gitignore",
        ".air.toml",
    ] {
        assert!(report.contains(file), "missing {}", file);
    }
    assert!(!report.contains("docker-compose.yml"));
    assert!(!report.contains(".env.example"));
    assert!(!root.join("internal/database").exists());
    assert!(report.files.iter().all(|f| !f.starts_with(".git/")));
    assert!(report.notices.is_empty());

    assert!(read(&root, "cmd/api/main.go").contains("\"demo/internal/server\""));
    assert!(read(&root, "internal/server/routes.go").contains("github.com/go-chi/chi/v5"));
    assert_eq!(read(&root, ".env"), "PORT=8080\nAPP_ENV=local\n");

    assert_eq!(
        toolchain.calls(),
        vec![
            "go mod init demo",
            "go get -u github.com/go-chi/chi/v5",
            "go get -u github.com/joho/godotenv",
            "git init",
            "gofmt -s -w .",
            "go mod tidy",
        ]
    );
}

#[test]
fn test_standard_library_fetches_no_framework() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path(), Framework::StandardLibrary, Database::None);
    let toolchain = FakeToolchain::default();

    generate(&mut config, &toolchain).unwrap();
    let fetched: Vec<String> = toolchain
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("go get"))
        .collect();
    assert_eq!(fetched, vec!["go get -u github.com/joho/godotenv"]);
}

#[test]
fn test_database_project_uses_db_server_and_routes() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path(), Framework::Fiber, Database::Postgres);

    let report = generate(&mut config, &FakeToolchain::default()).unwrap();
    let root = dir.path().join("demo");

    assert!(report.contains("internal/database/database.go"));
    assert!(report.contains(".env.example"));
    assert!(read(&root, "internal/server/routes.go").contains("s.db.Health()"));
    assert!(read(&root, "internal/server/server.go").contains("\"demo/internal/database\""));

    // baseline first, then the driver fragment after a blank line
    let env = read(&root, ".env");
    assert!(env.starts_with("PORT=8080\nAPP_ENV=local\n\n"));
    assert!(env.contains("DB_PORT=5432"));

    let compose: serde_yaml::Value =
        serde_yaml::from_str(&read(&root, "docker-compose.yml")).unwrap();
    assert_eq!(
        compose["services"]["psql"]["image"].as_str(),
        Some("postgres:latest")
    );

    assert!(read(&root, "Makefile").contains("docker-run:"));
}

#[test]
fn test_server_without_database_has_no_db_handle() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path(), Framework::Gin, Database::None);

    generate(&mut config, &FakeToolchain::default()).unwrap();
    let root = dir.path().join("demo");
    assert!(!read(&root, "internal/server/server.go").contains("database"));
    assert!(!read(&root, "internal/server/routes.go").contains("s.db"));
    assert!(!read(&root, "Makefile").contains("docker-run:"));
}

#[test]
fn test_sqlite_skips_compose_with_notice() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path(), Framework::Echo, Database::Sqlite);

    let report = generate(&mut config, &FakeToolchain::default()).unwrap();
    assert!(report.contains("internal/database/database.go"));
    assert!(!report.contains("docker-compose.yml"));
    assert_eq!(
        report.notices,
        vec![Notice::ComposeSkipped {
            database: Database::Sqlite
        }]
    );
    assert!(read(&dir.path().join("demo"), ".env").contains("DB_URL=./test.db"));
}

#[test]
fn test_advanced_features_write_their_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ProjectConfig::new(dir.path())
        .with_project_name("demo")
        .with_framework(Framework::HttpRouter)
        .with_database(Database::Mongo)
        .with_features(&[AdvancedFeature::Htmx, AdvancedFeature::GithubAction]);
    let toolchain = FakeToolchain::default();

    let report = generate(&mut config, &toolchain).unwrap();
    let root = dir.path().join("demo");

    for file in [
        "cmd/web/hello.templ",
        "cmd/web/base.templ",
        "cmd/web/efs.go",
        "cmd/web/hello.go",
        "cmd/web/assets/js/htmx.min.js",
        ".github/workflows/release.yml",
        ".github/workflows/go-test.yml",
        ".goreleaser.yml",
    ] {
        assert!(report.contains(file), "missing {}", file);
    }
    assert!(toolchain
        .calls()
        .contains(&"go get -u github.com/a-h/templ".to_string()));

    let routes = read(&root, "internal/server/routes.go");
    assert!(routes.contains("\"demo/cmd/web\""));
    assert!(routes.contains("s.db.Health()"));

    let workflow: serde_yaml::Value =
        serde_yaml::from_str(&read(&root, ".github/workflows/go-test.yml")).unwrap();
    assert_eq!(workflow["name"].as_str(), Some("Go-test"));
    let raw = read(&root, ".github/workflows/go-test.yml");
    assert!(raw.contains("${{ matrix.go-version }}"));
    assert!(raw.contains("templ generate"));

    let release: serde_yaml::Value =
        serde_yaml::from_str(&read(&root, ".github/workflows/release.yml")).unwrap();
    assert_eq!(release["name"].as_str(), Some("goreleaser"));

    let goreleaser = read(&root, ".goreleaser.yml");
    assert!(goreleaser.contains("\"{{ .ProjectName }}\""));
    assert!(goreleaser.contains("PACKAGE_PATH=demo/cmd"));
    serde_yaml::from_str::<serde_yaml::Value>(&goreleaser).unwrap();
}

#[test]
fn test_populated_directory_is_rejected_before_any_call() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("demo")).unwrap();
    fs::write(dir.path().join("demo/keep.txt"), "mine").unwrap();

    let mut config = config(dir.path(), Framework::Chi, Database::None);
    let toolchain = FakeToolchain::default();
    let err = generate(&mut config, &toolchain).unwrap_err();

    assert!(matches!(
        err,
        ForgeError::Validation(ValidationError::DirectoryNotEmpty(_))
    ));
    assert!(toolchain.calls().is_empty());
    assert_eq!(read(&dir.path().join("demo"), "keep.txt"), "mine");
}

#[test]
fn test_existing_empty_directory_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("demo")).unwrap();

    let mut config = config(dir.path(), Framework::Chi, Database::None);
    assert!(generate(&mut config, &FakeToolchain::default()).is_ok());
}

#[test]
fn test_format_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path(), Framework::Gin, Database::None);
    let toolchain = FakeToolchain {
        fail_format: true,
        ..FakeToolchain::default()
    };

    let err = generate(&mut config, &toolchain).unwrap_err();
    assert!(matches!(err, ForgeError::Process(_)));
    // nothing runs after the failed step, and nothing is rolled back
    assert_eq!(toolchain.calls().last().map(String::as_str), Some("gofmt -s -w ."));
    assert!(dir.path().join("demo/.air.toml").exists());
}

#[test]
fn test_tidy_failure_becomes_a_notice() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path(), Framework::Gin, Database::None);
    let toolchain = FakeToolchain {
        fail_tidy: true,
        ..FakeToolchain::default()
    };

    let report = generate(&mut config, &toolchain).unwrap();
    assert!(matches!(
        report.notices.as_slice(),
        [Notice::TidyFailed { message }] if message.contains("go mod tidy")
    ));
}

#[test]
fn test_missing_fields_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ProjectConfig::new(dir.path()).with_project_name("demo");

    let err = generate(&mut config, &FakeToolchain::default()).unwrap_err();
    assert!(matches!(
        err,
        ForgeError::Validation(ValidationError::MissingField(_))
    ));
    assert!(!dir.path().join("demo").exists());
}

#[test]
fn test_project_root_stays_under_target_root() {
    let dir = tempfile::tempdir().unwrap();
    let escape = dir.path().with_extension("escaped");
    let mut config = ProjectConfig::new(dir.path())
        .with_project_name(escape.to_string_lossy().into_owned())
        .with_framework(Framework::Chi)
        .with_database(Database::None)
        .with_features(&[]);
    let toolchain = FakeToolchain::default();

    let err = generate(&mut config, &toolchain).unwrap_err();
    assert!(matches!(
        err,
        ForgeError::Validation(ValidationError::AbsoluteName(_))
    ));
    assert!(toolchain.calls().is_empty());
    assert!(!escape.exists());

    let mut config = ProjectConfig::new(dir.path())
        .with_project_name("org/service")
        .with_framework(Framework::Chi)
        .with_database(Database::None)
        .with_features(&[]);
    let report = generate(&mut config, &FakeToolchain::default()).unwrap();
    assert!(report.project_root.starts_with(dir.path()));
    assert_eq!(report.project_root, dir.path().join("org/service"));
    assert!(report.contains("cmd/api/main.go"));
}
