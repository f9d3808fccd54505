//! Framework-shell shadow correction.
//!
//! One component-shell pattern stacks "page" containers in the document and
//! nests each page's real scroll root inside a shadow tree. The native
//! offset-parent lookup stops at the light-tree container, so when it
//! reports one, resolution asks a [`ShellContentLocator`] for the
//! geometrically relevant shadow content element instead.
//!
//! The locator is an injected capability. [`DocumentShellLocator`] performs
//! the document-wide query against a [`DomTree`]; hosts can substitute a
//! lookup of their own, or one that always answers
//! [`ShellLookup::Absent`] where the shell pattern cannot occur. Keeping
//! the query behind the trait keeps the orchestration logic free of ambient
//! document state.

use crate::dom::DomTree;

/// Tag names whose native offset parent may be superseded by shell shadow
/// content.
pub const SHELL_CONTAINER_TAGS: [&str; 2] = ["ion-content", "main"];

/// Class marking stacked shell page containers.
const SHELL_PAGE_CLASS: &str = "ion-page";

/// Tag of the content container nested in each shell page.
const SHELL_CONTENT_TAG: &str = "ion-content";

/// Tag of the content element inside the container's shadow tree.
const SHELL_SHADOW_CONTENT_TAG: &str = "main";

/// Outcome of a shell-content lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellLookup<N> {
  /// No shell structure is present; the current offset parent stands.
  Absent,

  /// A shell shadow tree was located; its content element, if it has one.
  ///
  /// `Found(None)` clears the offset parent, so resolution falls through
  /// to the containing-block walk.
  Found(Option<N>),
}

/// Locates the highest-priority shell content container.
pub trait ShellContentLocator<N> {
  /// Single lookup, no arguments: the shell content element the document's
  /// topmost shell page exposes, or [`ShellLookup::Absent`] when the
  /// pattern is not present.
  fn locate(&self) -> ShellLookup<N>;
}

/// Document-query-backed [`ShellContentLocator`].
///
/// Ranks shell pages by resolved `z-index`; pages without a numeric value
/// rank lowest, and ties resolve to the last page in document order. Every
/// step checks for emptiness before continuing, so a document without the
/// pattern is a no-op, not a fault.
#[derive(Debug, Clone, Copy)]
pub struct DocumentShellLocator<'a, D> {
  dom: &'a D,
}

impl<'a, D: DomTree> DocumentShellLocator<'a, D> {
  pub fn new(dom: &'a D) -> Self {
    Self { dom }
  }
}

impl<'a, D: DomTree> ShellContentLocator<D::Node> for DocumentShellLocator<'a, D> {
  fn locate(&self) -> ShellLookup<D::Node> {
    let pages = self.dom.elements_by_class(SHELL_PAGE_CLASS);
    let top_page = pages
      .into_iter()
      .max_by_key(|&page| self.dom.computed_style(page).z_index.unwrap_or(i32::MIN));
    let Some(top_page) = top_page else {
      return ShellLookup::Absent;
    };

    let Some(content) = self.dom.first_descendant_with_tag(top_page, SHELL_CONTENT_TAG) else {
      return ShellLookup::Absent;
    };
    let Some(shadow) = self.dom.shadow_root(content) else {
      return ShellLookup::Absent;
    };

    ShellLookup::Found(self.dom.first_descendant_with_tag(shadow, SHELL_SHADOW_CONTENT_TAG))
  }
}
