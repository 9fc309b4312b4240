use git_version::git_version;

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

/// One-line build description logged at startup.
pub fn get_system_info() -> String {
    let profile = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    let latest = option_env!("LATEST_TAG").unwrap_or("");
    let ahead = option_env!("COMMITS_AHEAD").unwrap_or("");
    let version = match option_env!("RELEASE_VERSION") {
        Some(tag) if !tag.is_empty() => format!("release {tag}"),
        _ if !latest.is_empty() && !ahead.is_empty() => {
            format!("{ahead} commits ahead of {latest}")
        }
        _ => format!("version {}", env!("CARGO_PKG_VERSION")),
    };

    format!(
        "{} {} (commit {}, {} build)",
        env!("CARGO_PKG_NAME"),
        version,
        COMMIT,
        profile
    )
}
