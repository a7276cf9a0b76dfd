//! Compile-time build metadata produced by `build.rs`.

#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

/// Text shown by `tabsplit --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TABSPLIT_BUILD_HASH"),
    " ",
    env!("TABSPLIT_BUILD_STATUS"),
    ", built ",
    env!("TABSPLIT_BUILD_TIMESTAMP"),
    " for ",
    env!("TABSPLIT_BUILD_TARGET"),
    " [",
    env!("TABSPLIT_BUILD_PROFILE"),
    "])"
);

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("TABSPLIT_BUILD_HASH"),
        git_status: env!("TABSPLIT_BUILD_STATUS"),
        timestamp: env!("TABSPLIT_BUILD_TIMESTAMP"),
        target: env!("TABSPLIT_BUILD_TARGET"),
        profile: env!("TABSPLIT_BUILD_PROFILE"),
    }
}
