//! Engine compatibility profiles.
//!
//! Two resolution rules diverge between engines: the legacy Trident engine
//! anchors fixed-position elements to the viewport unconditionally, and
//! Gecko lets `filter` (and `will-change: filter`) establish containing
//! blocks. Rather than sniffing an identification string inline at each
//! decision point, the divergences are carried by an explicit
//! [`EnvironmentProfile`] value the host derives once (or constructs
//! directly in tests), so resolution stays deterministic.

use serde::{Deserialize, Serialize};

/// Engine divergence flags consumed during resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
  /// Trident (IE 9-11): fixed-position containing blocks are always
  /// established by the viewport.
  pub legacy_trident: bool,

  /// Gecko: `filter` and `will-change: filter` establish containing blocks.
  pub gecko: bool,
}

impl EnvironmentProfile {
  /// Baseline profile with no engine divergences enabled.
  pub const STANDARDS: Self = Self {
    legacy_trident: false,
    gecko: false,
  };

  /// Derives a profile from a user-agent identification string.
  ///
  /// `Trident` is matched case-sensitively and `firefox` case-insensitively,
  /// matching how those engines advertise themselves.
  ///
  /// # Examples
  ///
  /// ```
  /// use fastanchor::EnvironmentProfile;
  ///
  /// let trident = EnvironmentProfile::from_user_agent(
  ///   "Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko",
  /// );
  /// assert!(trident.legacy_trident);
  /// assert!(!trident.gecko);
  ///
  /// let gecko = EnvironmentProfile::from_user_agent(
  ///   "Mozilla/5.0 (X11; Linux x86_64; rv:126.0) Gecko/20100101 Firefox/126.0",
  /// );
  /// assert!(gecko.gecko);
  /// ```
  pub fn from_user_agent(user_agent: &str) -> Self {
    Self {
      legacy_trident: user_agent.contains("Trident"),
      gecko: user_agent.to_ascii_lowercase().contains("firefox"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trident_probe_is_case_sensitive() {
    assert!(EnvironmentProfile::from_user_agent("compatible; Trident/6.0").legacy_trident);
    assert!(!EnvironmentProfile::from_user_agent("compatible; trident/6.0").legacy_trident);
  }

  #[test]
  fn firefox_probe_is_case_insensitive() {
    assert!(EnvironmentProfile::from_user_agent("Gecko/20100101 Firefox/126.0").gecko);
    assert!(EnvironmentProfile::from_user_agent("gecko/20100101 FIREFOX/126.0").gecko);
  }

  #[test]
  fn gecko_token_alone_does_not_mark_the_gecko_engine() {
    // WebKit and Trident UAs both carry "like Gecko".
    let profile = EnvironmentProfile::from_user_agent("AppleWebKit/537.36 (KHTML, like Gecko)");
    assert!(!profile.gecko);
    assert!(!profile.legacy_trident);
  }

  #[test]
  fn unrecognized_string_yields_the_baseline_profile() {
    let profile = EnvironmentProfile::from_user_agent("curl/8.5.0");
    assert_eq!(profile, EnvironmentProfile::STANDARDS);
    assert_eq!(profile, EnvironmentProfile::default());
  }
}
