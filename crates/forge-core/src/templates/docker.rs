//! docker-compose templates for the drivers that run as a service

use super::Capability;
use crate::catalog::Database;
use crate::error::ForgeError;

#[derive(Debug, Clone, Copy)]
pub struct DockerGenerator {
    pub compose: fn() -> &'static str,
}

impl DockerGenerator {
    pub fn for_database(database: Database) -> Option<Self> {
        let compose: fn() -> &'static str = match database {
            Database::Mysql => || embedded!("docker/mysql.yml.tmpl"),
            Database::Postgres => || embedded!("docker/postgres.yml.tmpl"),
            Database::Mongo => || embedded!("docker/mongo.yml.tmpl"),
            Database::Sqlite | Database::None => return None,
        };
        Some(Self { compose })
    }

    pub fn template(&self, capability: Capability) -> Result<&'static str, ForgeError> {
        match capability {
            Capability::Compose => Ok((self.compose)()),
            other => Err(ForgeError::Unregistered(format!(
                "docker capability {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_compose_eligible_drivers_have_templates() {
        for database in Database::ALL {
            assert_eq!(
                DockerGenerator::for_database(database).is_some(),
                database.supports_compose(),
                "{database}"
            );
        }
    }
}
