//! Entry point, server and routes templates for each web framework

use super::Capability;
use crate::catalog::Framework;
use crate::error::ForgeError;

const MAIN: &str = embedded!("web/main.go.tmpl");
const FIBER_MAIN: &str = embedded!("web/fiber/main.go.tmpl");
const SERVER: &str = embedded!("web/server/standard.go.tmpl");
const SERVER_WITH_DB: &str = embedded!("web/server/standard_db.go.tmpl");
const FIBER_SERVER: &str = embedded!("web/server/fiber.go.tmpl");
const FIBER_SERVER_WITH_DB: &str = embedded!("web/server/fiber_db.go.tmpl");
const HTMX_IMPORTS: &str = embedded!("htmx/imports/standard.tmpl");
const FIBER_HTMX_IMPORTS: &str = embedded!("htmx/imports/fiber.tmpl");

/// Content-producing capabilities of one web framework
///
/// Every field returns the raw template; rendering happens in the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkGenerator {
    pub main: fn() -> &'static str,
    pub server: fn() -> &'static str,
    pub routes: fn() -> &'static str,
    pub server_with_db: fn() -> &'static str,
    pub routes_with_db: fn() -> &'static str,
    pub htmx_routes: fn() -> &'static str,
    pub htmx_imports: fn() -> &'static str,
}

impl FrameworkGenerator {
    /// Build the generator for a framework
    ///
    /// Everything but fiber shares the `net/http` entry point and server; fiber
    /// wraps its own app type.
    pub fn for_framework(framework: Framework) -> Self {
        match framework {
            Framework::StandardLibrary => Self::net_http(
                || embedded!("web/routes/standard.go.tmpl"),
                || embedded!("web/routes/db/standard.go.tmpl"),
                || embedded!("htmx/routes/standard.tmpl"),
            ),
            Framework::Chi => Self::net_http(
                || embedded!("web/routes/chi.go.tmpl"),
                || embedded!("web/routes/db/chi.go.tmpl"),
                || embedded!("htmx/routes/chi.tmpl"),
            ),
            Framework::Gin => Self::net_http(
                || embedded!("web/routes/gin.go.tmpl"),
                || embedded!("web/routes/db/gin.go.tmpl"),
                || embedded!("htmx/routes/gin.tmpl"),
            ),
            Framework::GorillaMux => Self::net_http(
                || embedded!("web/routes/gorilla.go.tmpl"),
                || embedded!("web/routes/db/gorilla.go.tmpl"),
                || embedded!("htmx/routes/gorilla.tmpl"),
            ),
            Framework::HttpRouter => Self::net_http(
                || embedded!("web/routes/httprouter.go.tmpl"),
                || embedded!("web/routes/db/httprouter.go.tmpl"),
                || embedded!("htmx/routes/httprouter.tmpl"),
            ),
            Framework::Echo => Self::net_http(
                || embedded!("web/routes/echo.go.tmpl"),
                || embedded!("web/routes/db/echo.go.tmpl"),
                || embedded!("htmx/routes/echo.tmpl"),
            ),
            Framework::Fiber => Self {
                main: || FIBER_MAIN,
                server: || FIBER_SERVER,
                routes: || embedded!("web/routes/fiber.go.tmpl"),
                server_with_db: || FIBER_SERVER_WITH_DB,
                routes_with_db: || embedded!("web/routes/db/fiber.go.tmpl"),
                htmx_routes: || embedded!("htmx/routes/fiber.tmpl"),
                htmx_imports: || FIBER_HTMX_IMPORTS,
            },
        }
    }

    fn net_http(
        routes: fn() -> &'static str,
        routes_with_db: fn() -> &'static str,
        htmx_routes: fn() -> &'static str,
    ) -> Self {
        Self {
            main: || MAIN,
            server: || SERVER,
            routes,
            server_with_db: || SERVER_WITH_DB,
            routes_with_db,
            htmx_routes,
            htmx_imports: || HTMX_IMPORTS,
        }
    }

    /// Dispatch a named capability; database and docker capabilities are not offered
    pub fn template(&self, capability: Capability) -> Result<&'static str, ForgeError> {
        let produce = match capability {
            Capability::Main => self.main,
            Capability::Server => self.server,
            Capability::Routes => self.routes,
            Capability::ServerWithDb => self.server_with_db,
            Capability::RoutesWithDb => self.routes_with_db,
            Capability::HtmxRoutes => self.htmx_routes,
            Capability::HtmxImports => self.htmx_imports,
            other => {
                return Err(ForgeError::Unregistered(format!(
                    "framework capability {}",
                    other
                )))
            }
        };
        Ok(produce())
    }
}
