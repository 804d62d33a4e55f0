//! Chains of contiguous same-colored stones.

use std::fmt;

use crate::stone::Color;

/// Stable handle of a group in the board's arena. Never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub(crate) usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cell indices of one connected chain of stones of a single color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Color,
    members: Vec<usize>,
}

impl Group {
    pub(crate) fn singleton(color: Color, index: usize) -> Self {
        Self {
            color,
            members: vec![index],
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Move every member of `other` into this group.
    pub(crate) fn absorb(&mut self, other: Group) {
        debug_assert_eq!(self.color, other.color);
        self.members.extend(other.members);
    }
}
