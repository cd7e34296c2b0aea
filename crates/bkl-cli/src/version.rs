//! Version string.

/// Version reported by `--version`, with the revision baked in at build time
/// through `BKL_REVISION` when available.
pub fn version() -> String {
    format_version(env!("CARGO_PKG_VERSION"), option_env!("BKL_REVISION"))
}

fn format_version(version: &str, revision: Option<&str>) -> String {
    match revision {
        Some(revision) if !revision.is_empty() => format!("{version} (revision: {revision})"),
        _ => version.to_string(),
    }
}
