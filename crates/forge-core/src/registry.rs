//! Generator registry: option key -> dependencies plus content-producing capabilities
//!
//! The registry is an explicit value filled in layers. The framework layer is
//! always populated; the database and docker layers only when the project
//! actually uses a driver. Once a layer is populated it is only read.

use crate::catalog::{Database, Framework};
use crate::error::ForgeError;
use crate::templates::{DatabaseGenerator, DockerGenerator, FrameworkGenerator};
use std::collections::BTreeMap;

/// Environment-variable loader every generated project depends on
pub const BASELINE_DEPENDENCY: &str = "github.com/joho/godotenv";

/// Templating dependency pulled in by the HTMX feature
pub const TEMPL_DEPENDENCY: &str = "github.com/a-h/templ";

/// Go modules a framework needs, in fetch order
pub fn framework_dependencies(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::StandardLibrary => &[],
        Framework::Chi => &["github.com/go-chi/chi/v5"],
        Framework::Gin => &["github.com/gin-gonic/gin"],
        Framework::Fiber => &["github.com/gofiber/fiber/v2"],
        Framework::GorillaMux => &["github.com/gorilla/mux"],
        Framework::HttpRouter => &["github.com/julienschmidt/httprouter"],
        Framework::Echo => &[
            "github.com/labstack/echo/v4",
            "github.com/labstack/echo/v4/middleware",
        ],
    }
}

/// Go modules a database driver needs, in fetch order
pub fn database_dependencies(database: Database) -> &'static [&'static str] {
    match database {
        Database::Mysql => &["github.com/go-sql-driver/mysql"],
        Database::Postgres => &["github.com/jackc/pgx/v5"],
        Database::Sqlite => &["github.com/mattn/go-sqlite3"],
        Database::Mongo => &["go.mongodb.org/mongo-driver"],
        Database::None => &[],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FrameworkDescriptor {
    pub dependencies: &'static [&'static str],
    pub generator: FrameworkGenerator,
}

#[derive(Debug, Clone, Copy)]
pub struct DatabaseDescriptor {
    pub dependencies: &'static [&'static str],
    pub generator: DatabaseGenerator,
}

#[derive(Debug, Clone, Copy)]
pub struct DockerDescriptor {
    pub dependencies: &'static [&'static str],
    pub generator: DockerGenerator,
}

/// Lookup table built once per run and passed by reference into the pipeline
#[derive(Debug, Default)]
pub struct GeneratorRegistry {
    frameworks: BTreeMap<&'static str, FrameworkDescriptor>,
    databases: BTreeMap<&'static str, DatabaseDescriptor>,
    docker: BTreeMap<&'static str, DockerDescriptor>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every supported framework
    pub fn populate_frameworks(&mut self) {
        if !self.frameworks.is_empty() {
            return;
        }
        for framework in Framework::ALL {
            self.frameworks.insert(
                framework.key(),
                FrameworkDescriptor {
                    dependencies: framework_dependencies(framework),
                    generator: FrameworkGenerator::for_framework(framework),
                },
            );
        }
        tracing::debug!(count = self.frameworks.len(), "framework layer populated");
    }

    /// Register every database driver; the `none` sentinel has no descriptor
    pub fn populate_databases(&mut self) {
        if !self.databases.is_empty() {
            return;
        }
        for database in Database::ALL {
            if let Some(generator) = DatabaseGenerator::for_database(database) {
                self.databases.insert(
                    database.key(),
                    DatabaseDescriptor {
                        dependencies: database_dependencies(database),
                        generator,
                    },
                );
            }
        }
        tracing::debug!(count = self.databases.len(), "database layer populated");
    }

    /// Register compose generators for the drivers that support them
    pub fn populate_docker(&mut self) {
        if !self.docker.is_empty() {
            return;
        }
        for database in Database::ALL {
            if let Some(generator) = DockerGenerator::for_database(database) {
                self.docker.insert(
                    database.key(),
                    DockerDescriptor {
                        dependencies: &[],
                        generator,
                    },
                );
            }
        }
        tracing::debug!(count = self.docker.len(), "docker layer populated");
    }

    pub fn framework(&self, key: &str) -> Result<&FrameworkDescriptor, ForgeError> {
        self.frameworks
            .get(key)
            .ok_or_else(|| ForgeError::Unregistered(format!("framework '{}'", key)))
    }

    pub fn database(&self, key: &str) -> Result<&DatabaseDescriptor, ForgeError> {
        self.databases
            .get(key)
            .ok_or_else(|| ForgeError::Unregistered(format!("database '{}'", key)))
    }

    pub fn docker(&self, key: &str) -> Result<&DockerDescriptor, ForgeError> {
        self.docker
            .get(key)
            .ok_or_else(|| ForgeError::Unregistered(format!("docker '{}'", key)))
    }
}
