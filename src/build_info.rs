//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner for `--version`.
pub fn version_string() -> String {
    format!(
        "dragonflap {} ({}, {}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT,
        BUILD_PROFILE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        // 7-char short hash or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_build_date_format() {
        // YYYY-MM-DD
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }

    #[test]
    fn test_version_string_mentions_package() {
        let banner = version_string();
        assert!(banner.starts_with("dragonflap "));
        assert!(banner.contains(BUILD_COMMIT));
        assert!(banner.ends_with(&format!("{})", BUILD_PROFILE)));
    }

    #[test]
    fn test_build_profile_is_cargo_profile() {
        assert!(["debug", "release", "unknown"].contains(&BUILD_PROFILE));
    }
}
