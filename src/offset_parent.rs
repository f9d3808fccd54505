//! Offset-parent resolution.
//!
//! The environment's native offset-parent lookup is unreliable in exactly
//! the cases positioning code cares about: fixed-position elements, static
//! table ancestors, `html`/`body` answers, and ancestors that establish
//! containing blocks through `transform` and related properties.
//! [`offset_parent`] reconciles the native answer with a containing-block
//! walk and resolves to the owning window when no closer positioned
//! ancestor exists.
//!
//! Everything here is a synchronous pure read over the host tree; no state
//! is retained between calls and no input raises an error (anomalous
//! inputs resolve to the window).

use crate::compat::EnvironmentProfile;
use crate::dom::DomTree;
use crate::shell::{DocumentShellLocator, ShellContentLocator, ShellLookup, SHELL_CONTAINER_TAGS};

/// Resolution result: the reference element, or the owning window when no
/// closer positioned ancestor exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetParent<N, W> {
  /// Offsets are relative to this element.
  Element(N),

  /// No closer positioned ancestor; offsets are relative to the viewport.
  Window(W),
}

impl<N, W> OffsetParent<N, W> {
  /// The resolved element, if the result is not the window.
  pub fn element(self) -> Option<N> {
    match self {
      OffsetParent::Element(node) => Some(node),
      OffsetParent::Window(_) => None,
    }
  }

  /// Returns true when resolution fell back to the window.
  pub fn is_window(&self) -> bool {
    matches!(self, OffsetParent::Window(_))
  }
}

/// Native offset parent of `element`, normalized for fixed positioning.
///
/// Native lookups disagree across engines for fixed-position elements, so
/// those report `None` here unconditionally; callers can then trust that
/// `None` means "no native offset parent" rather than an engine quirk.
/// Non-HTML elements report `None` as well, regardless of style.
pub fn true_offset_parent<D: DomTree>(dom: &D, element: D::Node) -> Option<D::Node> {
  if !dom.is_html_element(element) || dom.computed_style(element).position.is_fixed() {
    return None;
  }
  dom.native_offset_parent(element)
}

/// Closest ancestor of `element` whose style establishes a containing
/// block, per [`ComputedStyle::establishes_containing_block`].
///
/// The walk starts at the logical (shadow-aware) parent and then advances
/// through raw tree parents only. It ends without a match at `html`,
/// `body`, the first non-HTML ancestor, or the end of the ancestor chain.
///
/// Under [`EnvironmentProfile::legacy_trident`], fixed-position elements
/// anchor to the viewport unconditionally, so the walk is skipped for them.
///
/// [`ComputedStyle::establishes_containing_block`]: crate::style::ComputedStyle::establishes_containing_block
pub fn containing_block<D: DomTree>(
  dom: &D,
  profile: EnvironmentProfile,
  element: D::Node,
) -> Option<D::Node> {
  if profile.legacy_trident
    && dom.is_html_element(element)
    && dom.computed_style(element).position.is_fixed()
  {
    return None;
  }

  let mut current = dom.logical_parent(element);
  while let Some(candidate) = current {
    if !dom.is_html_element(candidate) {
      break;
    }
    let name = dom.tag_name(candidate);
    if name == "html" || name == "body" {
      break;
    }
    if dom
      .computed_style(candidate)
      .establishes_containing_block(profile)
    {
      return Some(candidate);
    }
    current = dom.raw_parent(candidate);
  }
  None
}

/// Closest ancestor positioned element of `element`, or the owning window.
///
/// The public entry point. Uses [`DocumentShellLocator`] for the
/// framework-shell correction; embed [`offset_parent_with_locator`] to
/// supply a different locator.
pub fn offset_parent<D: DomTree>(
  dom: &D,
  profile: EnvironmentProfile,
  element: D::Node,
) -> OffsetParent<D::Node, D::Window> {
  offset_parent_with_locator(dom, profile, &DocumentShellLocator::new(dom), element)
}

/// [`offset_parent`] with an explicit shell-content locator.
pub fn offset_parent_with_locator<D: DomTree>(
  dom: &D,
  profile: EnvironmentProfile,
  locator: &dyn ShellContentLocator<D::Node>,
  element: D::Node,
) -> OffsetParent<D::Node, D::Window> {
  let window = dom.containing_window(element);

  let mut offset_parent = true_offset_parent(dom, element);

  // The geometrically relevant ancestor of a shell content container lives
  // inside a shadow tree the native lookup never reports. An Absent lookup
  // leaves the native answer in place.
  if let Some(parent) = offset_parent {
    if SHELL_CONTAINER_TAGS.contains(&dom.tag_name(parent)) {
      match locator.locate() {
        ShellLookup::Absent => {}
        ShellLookup::Found(content) => offset_parent = content,
      }
    }
  }

  // Static table elements are never valid offset parents; keep walking
  // outward. Each step moves strictly rootward, so the loop terminates.
  while let Some(parent) = offset_parent {
    if dom.is_table_element(parent) && dom.computed_style(parent).position.is_static() {
      offset_parent = true_offset_parent(dom, parent);
    } else {
      break;
    }
  }

  // `html` and a static `body` are not meaningful positioning references.
  if let Some(parent) = offset_parent {
    let name = dom.tag_name(parent);
    if name == "html" || (name == "body" && dom.computed_style(parent).position.is_static()) {
      return OffsetParent::Window(window);
    }
  }

  match offset_parent.or_else(|| containing_block(dom, profile, element)) {
    Some(node) => OffsetParent::Element(node),
    None => OffsetParent::Window(window),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn element_accessor() {
    let result: OffsetParent<u32, u32> = OffsetParent::Element(7);
    assert_eq!(result.element(), Some(7));
    assert!(!result.is_window());

    let result: OffsetParent<u32, u32> = OffsetParent::Window(0);
    assert_eq!(result.element(), None);
    assert!(result.is_window());
  }
}
