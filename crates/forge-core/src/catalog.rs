//! Static catalog of the choices the wizard offers
//!
//! Keys are the exact strings accepted on the command line and stored in the
//! project configuration. Matching is case-sensitive.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Supported web frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Framework {
    StandardLibrary,
    Chi,
    Gin,
    Fiber,
    GorillaMux,
    HttpRouter,
    Echo,
}

impl Framework {
    /// Every framework, in the order the wizard presents them
    pub const ALL: [Framework; 7] = [
        Framework::StandardLibrary,
        Framework::Chi,
        Framework::Gin,
        Framework::Fiber,
        Framework::GorillaMux,
        Framework::HttpRouter,
        Framework::Echo,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Framework::StandardLibrary => "standard-library",
            Framework::Chi => "chi",
            Framework::Gin => "gin",
            Framework::Fiber => "fiber",
            Framework::GorillaMux => "gorilla/mux",
            Framework::HttpRouter => "httprouter",
            Framework::Echo => "echo",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Framework::StandardLibrary => "Standard-library",
            Framework::Chi => "Chi",
            Framework::Gin => "Gin",
            Framework::Fiber => "Fiber",
            Framework::GorillaMux => "Gorilla/mux",
            Framework::HttpRouter => "Httprouter",
            Framework::Echo => "Echo",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Framework::StandardLibrary => "Built in standard golang library",
            Framework::Chi => "use go-chi from: https://github.com/go-chi/chi",
            Framework::Gin => "use gin-gonic from: https://github.com/gin-gonic/gin",
            Framework::Fiber => "use gofiber from: https://github.com/gofiber/fiber",
            Framework::GorillaMux => "use gorilla/mux from: https://github.com/gorilla/mux",
            Framework::HttpRouter => {
                "use julienschmidt/httprouter from: https://github.com/julienschmidt/httprouter"
            }
            Framework::Echo => "use echo from: https://github.com/labstack/echo",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Comma-separated list of keys, for help text and error messages
    pub fn supported_keys() -> String {
        Self::ALL.map(|f| f.key()).join(", ")
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Framework {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ValidationError::UnsupportedFramework {
            key: s.to_string(),
            supported: Self::supported_keys(),
        })
    }
}

/// Supported database drivers, including the `none` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Database {
    Mysql,
    Postgres,
    Sqlite,
    Mongo,
    None,
}

impl Database {
    pub const ALL: [Database; 5] = [
        Database::Mysql,
        Database::Postgres,
        Database::Sqlite,
        Database::Mongo,
        Database::None,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Database::Mysql => "mysql",
            Database::Postgres => "postgres",
            Database::Sqlite => "sqlite",
            Database::Mongo => "mongo",
            Database::None => "none",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Database::Mysql => "Mysql",
            Database::Postgres => "Postgres",
            Database::Sqlite => "Sqlite",
            Database::Mongo => "Mongo",
            Database::None => "None",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Database::Mysql => "Use go-mysql-driver from: https://github.com/go-sql-driver/mysql",
            Database::Postgres => {
                "Use pgx, PostgreSQL driver and toolkit from: https://github.com/jackc/pgx"
            }
            Database::Sqlite => {
                "Use go-sqlite3, SQLite driver for go that using database/sql from: https://github.com/mattn/go-sqlite3"
            }
            Database::Mongo => {
                "Use mongo-driver, the Go driver for MongoDB from: https://github.com/mongodb/mongo-go-driver"
            }
            Database::None => "Project with no Database setup!",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    pub fn supported_keys() -> String {
        Self::ALL.map(|d| d.key()).join(", ")
    }

    /// True for every real driver, false for the `none` sentinel
    pub fn is_driver(&self) -> bool {
        !matches!(self, Database::None)
    }

    /// SQLite is file based and gets no docker-compose service
    pub fn supports_compose(&self) -> bool {
        matches!(self, Database::Mysql | Database::Postgres | Database::Mongo)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Database {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ValidationError::UnsupportedDatabase {
            key: s.to_string(),
            supported: Self::supported_keys(),
        })
    }
}

/// Optional extras offered by the advanced step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AdvancedFeature {
    Htmx,
    GithubAction,
}

impl AdvancedFeature {
    pub const ALL: [AdvancedFeature; 2] = [AdvancedFeature::Htmx, AdvancedFeature::GithubAction];

    pub fn key(&self) -> &'static str {
        match self {
            AdvancedFeature::Htmx => "htmx",
            AdvancedFeature::GithubAction => "githubaction",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdvancedFeature::Htmx => "HTMX/Templ",
            AdvancedFeature::GithubAction => "Go Project Workflow",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AdvancedFeature::Htmx => "Add starter HTMX and Templ files.",
            AdvancedFeature::GithubAction => {
                "Workflow templates for testing, cross-compiling and releasing Go projects"
            }
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for AdvancedFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Check if the input is a supported framework key
pub fn is_valid_framework(input: &str) -> bool {
    Framework::from_key(input).is_some()
}

/// Check if the input is a supported database driver key (`none` included)
pub fn is_valid_database(input: &str) -> bool {
    Database::from_key(input).is_some()
}
