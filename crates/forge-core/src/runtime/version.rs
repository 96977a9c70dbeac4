//! Go version parsing and the minimum-version check

use semver::Version;

/// Oldest Go release the generated projects are tested against
pub const MIN_GO_VERSION: &str = "1.21.0";

/// Extract the version from `go version` output
///
/// `go version go1.22.3 linux/amd64` -> `1.22.3`. Release candidates and short
/// forms (`go1.22`, `go1.23rc1`) are padded to a full semver triple.
pub fn parse_go_version(output: &str) -> Option<Version> {
    let token = output.split_whitespace().find_map(|word| {
        word.strip_prefix("go")
            .filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
    })?;

    let numeric: String = token
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let mut parts: Vec<&str> = numeric.split('.').filter(|p| !p.is_empty()).collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }
    while parts.len() < 3 {
        parts.push("0");
    }
    Version::parse(&parts.join(".")).ok()
}

/// Warning text if the installed Go is older than [`MIN_GO_VERSION`]
pub fn check_go_version(go_version_output: &str) -> Option<String> {
    let found = parse_go_version(go_version_output)?;
    let minimum = Version::parse(MIN_GO_VERSION).ok()?;

    if found < minimum {
        Some(format!(
            "Go {} is older than {}.\n\
             The generated project may not build; consider upgrading from https://go.dev/dl",
            found, MIN_GO_VERSION
        ))
    } else {
        None
    }
}
