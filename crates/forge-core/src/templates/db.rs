//! Database service layer and env templates

use super::Capability;
use crate::catalog::Database;
use crate::error::ForgeError;

#[derive(Debug, Clone, Copy)]
pub struct DatabaseGenerator {
    pub service: fn() -> &'static str,
    /// Fragment appended to the baseline `.env`
    pub env: fn() -> &'static str,
    pub env_example: fn() -> &'static str,
}

impl DatabaseGenerator {
    /// Generator for a driver, `None` for the `none` sentinel
    pub fn for_database(database: Database) -> Option<Self> {
        let generator = match database {
            Database::Mysql => Self {
                service: || embedded!("db/service/mysql.go.tmpl"),
                env: || embedded!("db/env/mysql.tmpl"),
                env_example: || embedded!("db/env/example/mysql.tmpl"),
            },
            Database::Postgres => Self {
                service: || embedded!("db/service/postgres.go.tmpl"),
                env: || embedded!("db/env/postgres.tmpl"),
                env_example: || embedded!("db/env/example/postgres.tmpl"),
            },
            Database::Sqlite => Self {
                service: || embedded!("db/service/sqlite.go.tmpl"),
                env: || embedded!("db/env/sqlite.tmpl"),
                env_example: || embedded!("db/env/example/sqlite.tmpl"),
            },
            Database::Mongo => Self {
                service: || embedded!("db/service/mongo.go.tmpl"),
                env: || embedded!("db/env/mongo.tmpl"),
                env_example: || embedded!("db/env/example/mongo.tmpl"),
            },
            Database::None => return None,
        };
        Some(generator)
    }

    pub fn template(&self, capability: Capability) -> Result<&'static str, ForgeError> {
        let produce = match capability {
            Capability::Service => self.service,
            Capability::Env => self.env,
            Capability::EnvExample => self.env_example,
            other => {
                return Err(ForgeError::Unregistered(format!(
                    "database capability {}",
                    other
                )))
            }
        };
        Ok(produce())
    }
}
