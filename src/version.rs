//! Build provenance embedded by `build.rs`.

use std::fmt;

/// Where and from what this binary was built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub version: &'static str,
    pub target: &'static str,
    pub commit: Option<&'static str>,
    pub rustc: Option<&'static str>,
    pub built_at: Option<&'static str>,
}

impl Provenance {
    /// Provenance of the running binary
    pub fn current() -> Self {
        Provenance {
            version: env!("CARGO_PKG_VERSION"),
            target: env!("CARD_CHECK_TARGET"),
            commit: option_env!("CARD_CHECK_GIT_HASH"),
            rustc: option_env!("CARD_CHECK_RUSTC_VERSION"),
            built_at: option_env!("CARD_CHECK_BUILD_DATE"),
        }
    }

    /// Details shown in parentheses after the version; unknown ones are skipped
    fn details(&self) -> Vec<String> {
        let mut details = Vec::with_capacity(4);
        details.extend(self.commit.map(|c| format!("commit {c}")));
        details.push(self.target.to_string());
        details.extend(self.rustc.map(|r| format!("rustc {r}")));
        details.extend(self.built_at.map(|d| format!("built {d}")));
        details
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-check {} ({})", self.version, self.details().join(", "))
    }
}
