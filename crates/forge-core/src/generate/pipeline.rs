//! The ordered, conditional sequence that turns a configuration into a project tree
//!
//! Every step blocks until it completes and the first error aborts the run.
//! Nothing is rolled back: a failed run leaves whatever was already written.

use super::report::{GenerationReport, Notice};
use crate::catalog::{AdvancedFeature, Framework};
use crate::error::{ForgeError, ValidationError};
use crate::project::{is_directory_non_empty, AdvancedTemplates, ProjectConfig, ResolvedProject};
use crate::registry::{GeneratorRegistry, BASELINE_DEPENDENCY, TEMPL_DEPENDENCY};
use crate::runtime::Toolchain;
use crate::templates::{
    fixed, hello_handler, render, Capability, StarterFile, HTMX_STARTER_FILES, WORKFLOW_FILES,
};
use std::fs;
use std::path::Path;

const DATABASE_DIR: &str = "internal/database";
const SERVER_DIR: &str = "internal/server";
const API_DIR: &str = "cmd/api";
const WEB_ASSETS_DIR: &str = "cmd/web/assets/js";
const WORKFLOW_DIR: &str = ".github/workflows";
const ROUTES_FILE: &str = "internal/server/routes.go";

/// Generate a project with a freshly built registry
pub fn generate(
    config: &mut ProjectConfig,
    toolchain: &dyn Toolchain,
) -> Result<GenerationReport, ForgeError> {
    let mut registry = GeneratorRegistry::new();
    Pipeline::new(&mut registry, toolchain).run(config)
}

pub struct Pipeline<'a> {
    registry: &'a mut GeneratorRegistry,
    toolchain: &'a dyn Toolchain,
    notices: Vec<Notice>,
}

impl<'a> Pipeline<'a> {
    pub fn new(registry: &'a mut GeneratorRegistry, toolchain: &'a dyn Toolchain) -> Self {
        Self {
            registry,
            toolchain,
            notices: Vec::new(),
        }
    }

    /// Run every step against the configuration
    ///
    /// The configuration is updated with the HTMX fragments when that feature is on.
    pub fn run(mut self, config: &mut ProjectConfig) -> Result<GenerationReport, ForgeError> {
        if config.is_cancelled() {
            return Err(ForgeError::Cancelled);
        }
        let project = config.resolve()?;
        let root = project.root().to_path_buf();
        if is_directory_non_empty(&root)? {
            return Err(ValidationError::DirectoryNotEmpty(root).into());
        }
        let with_database = project.database.is_driver();

        tracing::debug!(root = %root.display(), "creating project directory");
        create_dir(&config.target_root)?;
        create_dir(&root)?;

        self.registry.populate_frameworks();
        let framework = *self.registry.framework(project.framework.key())?;

        self.toolchain.init_module(&project.name, &root)?;

        if project.framework != Framework::StandardLibrary {
            self.fetch_all(framework.dependencies, &root)?;
        }

        if with_database {
            self.write_database_layer(config, &project)?;
        }

        self.toolchain.fetch_dependency(BASELINE_DEPENDENCY, &root)?;

        tracing::debug!("writing entry point");
        create_dir(&root.join(API_DIR))?;
        write_rendered(
            config,
            &project,
            "cmd/api/main.go",
            framework.generator.template(Capability::Main)?,
        )?;

        write_rendered(config, &project, "Makefile", fixed::MAKEFILE)?;
        write_rendered(config, &project, "README.md", fixed::README)?;

        // Same file names, different capabilities depending on the database choice
        tracing::debug!(with_database, "writing server and routes");
        let (server, routes) = Capability::server_pair(with_database);
        create_dir(&root.join(SERVER_DIR))?;
        write_rendered(
            config,
            &project,
            "internal/server/server.go",
            framework.generator.template(server)?,
        )?;
        write_rendered(
            config,
            &project,
            ROUTES_FILE,
            framework.generator.template(routes)?,
        )?;

        if config.has_feature(AdvancedFeature::Htmx) {
            tracing::debug!("writing htmx starter");
            create_dir(&root.join(WEB_ASSETS_DIR))?;
            for file in &HTMX_STARTER_FILES {
                write_starter(config, &project, file)?;
            }
            self.toolchain.fetch_dependency(TEMPL_DEPENDENCY, &root)?;
            write_rendered(
                config,
                &project,
                "cmd/web/hello.go",
                hello_handler(project.framework),
            )?;

            let fragments = {
                let data = config.template_data(&project);
                AdvancedTemplates {
                    routes: render(
                        Capability::HtmxRoutes.name(),
                        framework.generator.template(Capability::HtmxRoutes)?,
                        &data,
                    )?,
                    imports: render(
                        Capability::HtmxImports.name(),
                        framework.generator.template(Capability::HtmxImports)?,
                        &data,
                    )?,
                }
            };
            config.advanced_templates = fragments;

            // routes.go was written before the fragments existed
            write_rendered(
                config,
                &project,
                ROUTES_FILE,
                framework.generator.template(routes)?,
            )?;
        }

        if config.has_feature(AdvancedFeature::GithubAction) {
            tracing::debug!("writing workflows");
            create_dir(&root.join(WORKFLOW_DIR))?;
            for file in &WORKFLOW_FILES {
                write_starter(config, &project, file)?;
            }
        }

        self.write_env(config, &project)?;

        self.toolchain.init_version_control(&root)?;

        write_rendered(config, &project, ".gitignore", fixed::GITIGNORE)?;
        write_rendered(config, &project, ".air.toml", fixed::AIR_TOML)?;

        tracing::debug!("formatting");
        self.toolchain.format_source(&root)?;
        if let Err(e) = self.toolchain.tidy_dependencies(&root) {
            tracing::warn!(error = %e, "go mod tidy failed");
            self.notices.push(Notice::TidyFailed {
                message: e.to_string(),
            });
        }

        GenerationReport::collect(&root, self.notices)
    }

    fn fetch_all(&self, dependencies: &[&str], root: &Path) -> Result<(), ForgeError> {
        for dependency in dependencies {
            self.toolchain.fetch_dependency(dependency, root)?;
        }
        Ok(())
    }

    fn write_database_layer(
        &mut self,
        config: &ProjectConfig,
        project: &ResolvedProject,
    ) -> Result<(), ForgeError> {
        let root = project.root();
        let key = project.database.key();
        tracing::debug!(database = key, "writing database layer");

        self.registry.populate_databases();
        let database = *self.registry.database(key)?;
        self.fetch_all(database.dependencies, root)?;

        create_dir(&root.join(DATABASE_DIR))?;
        write_rendered(
            config,
            project,
            "internal/database/database.go",
            database.generator.template(Capability::Service)?,
        )?;
        write_rendered(
            config,
            project,
            ".env.example",
            database.generator.template(Capability::EnvExample)?,
        )?;

        if project.database.supports_compose() {
            self.registry.populate_docker();
            let docker = *self.registry.docker(key)?;
            self.fetch_all(docker.dependencies, root)?;
            write_rendered(
                config,
                project,
                "docker-compose.yml",
                docker.generator.template(Capability::Compose)?,
            )?;
        } else {
            tracing::warn!(database = key, "skipping docker-compose.yml");
            self.notices.push(Notice::ComposeSkipped {
                database: project.database,
            });
        }
        Ok(())
    }

    /// Baseline `.env`, followed by the driver's fragment when a database was chosen
    fn write_env(&self, config: &ProjectConfig, project: &ResolvedProject) -> Result<(), ForgeError> {
        let data = config.template_data(project);
        let baseline = render(Capability::Env.name(), fixed::ENV, &data)?;

        let fragment = if project.database.is_driver() {
            let database = self.registry.database(project.database.key())?;
            Some(render(
                Capability::Env.name(),
                database.generator.template(Capability::Env)?,
                &data,
            )?)
        } else {
            None
        };

        write_file(&project.root().join(".env"), &join_env(baseline, fragment))
    }
}

fn join_env(baseline: String, fragment: Option<String>) -> String {
    match fragment {
        Some(fragment) => [baseline, fragment].join("\n"),
        None => baseline,
    }
}

fn write_rendered(
    config: &ProjectConfig,
    project: &ResolvedProject,
    relative: &str,
    template: &str,
) -> Result<(), ForgeError> {
    let contents = render(relative, template, &config.template_data(project))?;
    write_file(&project.root().join(relative), &contents)
}

fn write_starter(
    config: &ProjectConfig,
    project: &ResolvedProject,
    file: &StarterFile,
) -> Result<(), ForgeError> {
    if file.render {
        write_rendered(config, project, file.path, file.template)
    } else {
        write_file(&project.root().join(file.path), file.template)
    }
}

fn create_dir(path: &Path) -> Result<(), ForgeError> {
    fs::create_dir_all(path)
        .map_err(|e| ForgeError::io(format!("Failed to create {}", path.display()), e))
}

fn write_file(path: &Path, contents: &str) -> Result<(), ForgeError> {
    tracing::debug!(path = %path.display(), "write");
    fs::write(path, contents)
        .map_err(|e| ForgeError::io(format!("Failed to write {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Database;
    use crate::error::ProcessError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CallLog(RefCell<Vec<String>>);

    impl Toolchain for CallLog {
        fn init_module(&self, name: &str, _dir: &Path) -> Result<(), ProcessError> {
            self.0.borrow_mut().push(format!("init {name}"));
            Ok(())
        }

        fn fetch_dependency(&self, package: &str, _dir: &Path) -> Result<(), ProcessError> {
            self.0.borrow_mut().push(format!("get {package}"));
            Ok(())
        }

        fn format_source(&self, _dir: &Path) -> Result<(), ProcessError> {
            self.0.borrow_mut().push("fmt".to_string());
            Ok(())
        }

        fn tidy_dependencies(&self, _dir: &Path) -> Result<(), ProcessError> {
            self.0.borrow_mut().push("tidy".to_string());
            Ok(())
        }

        fn init_version_control(&self, _dir: &Path) -> Result<(), ProcessError> {
            self.0.borrow_mut().push("git".to_string());
            Ok(())
        }
    }

    #[test]
    fn test_join_env_separates_with_blank_line() {
        let joined = join_env("PORT=8080\n".to_string(), Some("DB_URL=./test.db\n".to_string()));
        assert_eq!(joined, "PORT=8080\n\nDB_URL=./test.db\n");
        assert_eq!(join_env("PORT=8080\n".to_string(), None), "PORT=8080\n");
    }

    #[test]
    fn test_cancelled_config_never_touches_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ProjectConfig::new(dir.path())
            .with_project_name("demo")
            .with_framework(Framework::Chi)
            .with_database(Database::None);
        config.cancel_flag().cancel();

        let toolchain = CallLog::default();
        let err = generate(&mut config, &toolchain).unwrap_err();
        assert!(matches!(err, ForgeError::Cancelled));
        assert!(toolchain.0.borrow().is_empty());
        assert!(!dir.path().join("demo").exists());
    }

    #[test]
    fn test_toolchain_call_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ProjectConfig::new(dir.path())
            .with_project_name("demo")
            .with_framework(Framework::Echo)
            .with_database(Database::Mysql)
            .with_features(&[AdvancedFeature::Htmx]);

        let toolchain = CallLog::default();
        generate(&mut config, &toolchain).unwrap();
        assert_eq!(
            *toolchain.0.borrow(),
            vec![
                "init demo",
                "get github.com/labstack/echo/v4",
                "get github.com/labstack/echo/v4/middleware",
                "get github.com/go-sql-driver/mysql",
                "get github.com/joho/godotenv",
                "get github.com/a-h/templ",
                "git",
                "fmt",
                "tidy",
            ]
        );
    }

    #[test]
    fn test_htmx_fragments_reach_routes() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ProjectConfig::new(dir.path())
            .with_project_name("demo")
            .with_framework(Framework::Gin)
            .with_database(Database::None)
            .with_features(&[AdvancedFeature::Htmx]);

        generate(&mut config, &CallLog::default()).unwrap();

        assert!(config.advanced_templates.imports.contains("\"demo/cmd/web\""));
        let routes = fs::read_to_string(dir.path().join("demo").join(ROUTES_FILE)).unwrap();
        assert!(routes.contains("r.StaticFS(\"/assets\", http.FS(web.Files))"));
        assert!(routes.contains("\"github.com/a-h/templ\""));
    }
}
