//! Starter files for the advanced features (HTMX/Templ, GitHub workflows)

use crate::catalog::Framework;

/// A file written verbatim or through the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterFile {
    /// Path relative to the project root
    pub path: &'static str,
    pub template: &'static str,
    /// Assets are copied byte for byte
    pub render: bool,
}

/// Fixed HTMX/Templ files under `cmd/web`
pub const HTMX_STARTER_FILES: [StarterFile; 4] = [
    StarterFile {
        path: "cmd/web/hello.templ",
        template: embedded!("htmx/hello.templ.tmpl"),
        render: true,
    },
    StarterFile {
        path: "cmd/web/base.templ",
        template: embedded!("htmx/base.templ.tmpl"),
        render: true,
    },
    StarterFile {
        path: "cmd/web/assets/js/htmx.min.js",
        template: embedded!("htmx/htmx.min.js"),
        render: false,
    },
    StarterFile {
        path: "cmd/web/efs.go",
        template: embedded!("htmx/efs.go.tmpl"),
        render: true,
    },
];

/// Release and test workflows plus the goreleaser config
pub const WORKFLOW_FILES: [StarterFile; 3] = [
    StarterFile {
        path: ".github/workflows/release.yml",
        template: embedded!("workflow/release.yml.tmpl"),
        render: true,
    },
    StarterFile {
        path: ".github/workflows/go-test.yml",
        template: embedded!("workflow/go-test.yml.tmpl"),
        render: true,
    },
    StarterFile {
        path: ".goreleaser.yml",
        template: embedded!("workflow/goreleaser.yml.tmpl"),
        render: true,
    },
];

/// `cmd/web/hello.go`; fiber handlers take a `*fiber.Ctx` instead of `net/http` types
pub fn hello_handler(framework: Framework) -> &'static str {
    match framework {
        Framework::Fiber => embedded!("htmx/hello_fiber.go.tmpl"),
        _ => embedded!("htmx/hello.go.tmpl"),
    }
}
