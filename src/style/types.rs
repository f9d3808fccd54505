//! Resolved style value types
//!
//! Keyword-list values the containing-block predicate inspects:
//! containment flags and will-change hints. Hosts with typed style systems
//! construct these directly; hosts with string-valued computed styles go
//! through the `parse` constructors.

use crate::error::{Error, Result};

/// CSS containment model
///
/// CSS: `contain`
/// Reference: CSS Containment Module Level 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Containment {
  pub size: bool,
  pub inline_size: bool,
  pub layout: bool,
  pub style: bool,
  pub paint: bool,
}

impl Containment {
  pub const fn none() -> Self {
    Self {
      size: false,
      inline_size: false,
      layout: false,
      style: false,
      paint: false,
    }
  }

  pub const fn strict() -> Self {
    Self {
      size: true,
      inline_size: false,
      layout: true,
      style: true,
      paint: true,
    }
  }

  pub const fn content() -> Self {
    Self {
      size: false,
      inline_size: false,
      layout: true,
      style: true,
      paint: true,
    }
  }

  /// Parse a `contain` value: a shorthand keyword or a space-separated
  /// list of containment types.
  ///
  /// # Examples
  ///
  /// ```
  /// use fastanchor::Containment;
  ///
  /// assert!(Containment::parse("paint").unwrap().paint);
  /// assert!(Containment::parse("layout style").unwrap().layout);
  /// assert!(!Containment::parse("none").unwrap().paint);
  /// assert!(Containment::parse("visible").is_err());
  /// ```
  pub fn parse(s: &str) -> Result<Self> {
    let text = s.trim().to_ascii_lowercase();
    match text.as_str() {
      "" | "none" => return Ok(Self::none()),
      "strict" => return Ok(Self::strict()),
      "content" => return Ok(Self::content()),
      _ => {}
    }

    let mut contain = Self::none();
    for token in text.split_ascii_whitespace() {
      match token {
        "size" => contain.size = true,
        "inline-size" => contain.inline_size = true,
        "layout" => contain.layout = true,
        "style" => contain.style = true,
        "paint" => contain.paint = true,
        _ => return Err(Error::InvalidContain(s.trim().to_string())),
      }
    }
    Ok(contain)
  }
}

impl Default for Containment {
  fn default() -> Self {
    Self::none()
  }
}

/// CSS will-change hints
///
/// CSS: `will-change`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WillChange {
  /// Default value - no proactive optimizations
  Auto,
  /// Explicit list of features the author expects to change
  Hints(Vec<WillChangeHint>),
}

impl Default for WillChange {
  fn default() -> Self {
    Self::Auto
  }
}

/// Individual will-change hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WillChangeHint {
  ScrollPosition,
  Contents,
  /// A property name (lowercased)
  Property(String),
}

impl WillChange {
  /// Parse a `will-change` value: `auto` or a comma-separated hint list.
  ///
  /// Parsing is infallible; unknown animateable features are carried
  /// verbatim as [`WillChangeHint::Property`] hints.
  ///
  /// # Examples
  ///
  /// ```
  /// use fastanchor::WillChange;
  ///
  /// assert_eq!(WillChange::parse("auto"), WillChange::Auto);
  /// assert!(WillChange::parse("transform, opacity").hints_property("transform"));
  /// ```
  pub fn parse(text: &str) -> Self {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
      return WillChange::Auto;
    }

    let mut hints = Vec::new();
    for part in trimmed.split(',') {
      let part = part.trim().to_ascii_lowercase();
      if part.is_empty() {
        continue;
      }
      match part.as_str() {
        "scroll-position" => hints.push(WillChangeHint::ScrollPosition),
        "contents" => hints.push(WillChangeHint::Contents),
        _ => hints.push(WillChangeHint::Property(part)),
      }
    }

    if hints.is_empty() {
      WillChange::Auto
    } else {
      WillChange::Hints(hints)
    }
  }

  /// Returns true if the hint list names `property` explicitly.
  pub fn hints_property(&self, property: &str) -> bool {
    match self {
      WillChange::Auto => false,
      WillChange::Hints(hints) => hints
        .iter()
        .any(|hint| matches!(hint, WillChangeHint::Property(name) if name == property)),
    }
  }
}
