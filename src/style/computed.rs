//! Resolved style snapshots
//!
//! This module provides the ComputedStyle struct: the resolved values of
//! the properties offset resolution inspects, for a single element.
//!
//! Hosts produce one snapshot per queried node. Values are resolved the way
//! the environment reports computed style: keywords normalized, `none`
//! collapsed to `None`, lengths in CSS pixels. The struct deliberately
//! carries only the properties resolution reads; it is a query contract,
//! not a general style storage.

use crate::compat::EnvironmentProfile;
use crate::style::position::Position;
use crate::style::types::{Containment, WillChange};

/// Resolved CSS property values consumed by offset resolution
///
/// # Examples
///
/// ```
/// use fastanchor::{ComputedStyle, Position};
///
/// let style = ComputedStyle {
///     position: Position::Relative,
///     ..ComputedStyle::default()
/// };
/// assert!(style.position.is_positioned());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    /// Positioning scheme
    ///
    /// CSS: `position`
    /// Initial: static
    pub position: Position,

    /// Serialized transform list
    ///
    /// CSS: `transform`
    /// Initial: none (represented as `None`)
    pub transform: Option<String>,

    /// Perspective distance in CSS pixels
    ///
    /// CSS: `perspective`
    /// Initial: none (represented as `None`)
    pub perspective: Option<f32>,

    /// Containment flags
    ///
    /// CSS: `contain`
    /// Initial: none
    pub contain: Containment,

    /// Will-change hints
    ///
    /// CSS: `will-change`
    /// Initial: auto
    pub will_change: WillChange,

    /// Serialized filter list
    ///
    /// CSS: `filter`
    /// Initial: none (represented as `None`)
    pub filter: Option<String>,

    /// Stacking order override
    ///
    /// CSS: `z-index`
    /// Initial: auto (represented as `None`)
    ///
    /// Read only when ranking framework-shell page containers.
    pub z_index: Option<i32>,
}

impl ComputedStyle {
    /// Returns true if an element with this style establishes a containing
    /// block for absolutely and fixed positioned descendants.
    ///
    /// Non-exhaustive: covers the common properties that create containing
    /// blocks (transform, perspective, paint containment, will-change
    /// hints), not the full rule set. Gecko additionally lets `filter` and
    /// `will-change: filter` establish one; those branches apply only when
    /// `profile.gecko` is set.
    pub fn establishes_containing_block(&self, profile: EnvironmentProfile) -> bool {
        if self.transform.is_some() || self.perspective.is_some() || self.contain.paint {
            return true;
        }
        if self.will_change.hints_property("transform")
            || self.will_change.hints_property("perspective")
        {
            return true;
        }
        profile.gecko && (self.will_change.hints_property("filter") || self.filter.is_some())
    }
}
