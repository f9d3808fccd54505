//! Host tree contract.
//!
//! The rendered tree is owned by the hosting environment; this crate never
//! creates, mutates, or destroys nodes. [`DomTree`] collects the read-only
//! lookups resolution performs: tag names, resolved style snapshots, node
//! classification, ancestry, the environment's native offset-parent value,
//! and the document queries the shell correction needs.
//!
//! Two parent accessors exist deliberately. [`DomTree::logical_parent`]
//! crosses shadow boundaries to the host element; [`DomTree::raw_parent`]
//! never leaves the plain tree. The containing-block walk takes one logical
//! step and then advances through raw parents only, so the distinction must
//! stay visible in the contract rather than hiding behind one ambiguous
//! accessor.

use crate::style::ComputedStyle;
use std::fmt::Debug;

/// Read-only queries over a host-owned rendered tree.
///
/// Handles are small copyable identifiers; what they index is up to the
/// host (slab indices, arena ids, tagged pointers). A `Node` handle may
/// also identify a shadow-root scope, which resolution only ever uses as a
/// query scope, never as a result.
///
/// Implementations must answer against current layout state; resolution
/// assumes the tree and styles are stable for the duration of one call and
/// recomputes from scratch on the next.
pub trait DomTree {
  /// Handle identifying a node (element or shadow-root scope).
  type Node: Copy + Eq + Debug;

  /// Handle identifying a top-level viewport/document context.
  type Window: Copy + Eq + Debug;

  /// Window owning `node`'s document.
  fn containing_window(&self, node: Self::Node) -> Self::Window;

  /// ASCII-lowercased tag name of `node`.
  fn tag_name(&self, node: Self::Node) -> &str;

  /// Resolved style snapshot for `node`.
  fn computed_style(&self, node: Self::Node) -> ComputedStyle;

  /// Whether `node` is an HTML element (as opposed to SVG, text, or any
  /// other node kind).
  fn is_html_element(&self, node: Self::Node) -> bool;

  /// Whether `node` is a table-related element.
  fn is_table_element(&self, node: Self::Node) -> bool;

  /// Shadow-aware parent: the shadow host when stepping out of a shadow
  /// tree, otherwise the tree parent.
  fn logical_parent(&self, node: Self::Node) -> Option<Self::Node>;

  /// Plain tree parent. Never crosses a shadow boundary.
  fn raw_parent(&self, node: Self::Node) -> Option<Self::Node>;

  /// The environment's native offset-parent value for `node`.
  ///
  /// `None` is the expected answer for detached nodes, `display: none`
  /// subtrees, and whenever the environment reports no offset parent.
  fn native_offset_parent(&self, node: Self::Node) -> Option<Self::Node>;

  /// Shadow-root scope attached to `node`, if it is a shadow host.
  fn shadow_root(&self, node: Self::Node) -> Option<Self::Node>;

  /// All elements in the document carrying `class`, in document order.
  ///
  /// Consumed only by the shell correction (see [`crate::shell`]).
  fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

  /// First descendant of `scope` whose tag name is `name`, in document
  /// order. `scope` may be a shadow-root scope.
  ///
  /// Consumed only by the shell correction.
  fn first_descendant_with_tag(&self, scope: Self::Node, name: &str) -> Option<Self::Node>;
}
