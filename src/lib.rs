pub mod compat;
pub mod dom;
pub mod error;
pub mod offset_parent;
pub mod shell;
pub mod style;

pub use compat::EnvironmentProfile;
pub use dom::DomTree;
pub use error::{Error, Result};
pub use offset_parent::{
  containing_block, offset_parent, offset_parent_with_locator, true_offset_parent, OffsetParent,
};
pub use shell::{DocumentShellLocator, ShellContentLocator, ShellLookup, SHELL_CONTAINER_TAGS};
pub use style::{ComputedStyle, Containment, Position, WillChange, WillChangeHint};
