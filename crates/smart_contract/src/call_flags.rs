//! Call rights carried by each call frame.

use std::fmt;

/// Bit set of the rights a call frame holds.
///
/// A nested call runs with the intersection of the caller's flags and the
/// flags it asked for, so rights can only shrink down the call stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallFlags(pub u8);

impl CallFlags {
    /// No rights.
    pub const NONE: Self = Self(0);
    /// May read contract storage.
    pub const READ_STATES: Self = Self(0x01);
    /// May write contract storage.
    pub const WRITE_STATES: Self = Self(0x02);
    /// May call other contracts.
    pub const ALLOW_CALL: Self = Self(0x04);
    /// Read and write storage.
    pub const STATES: Self = Self(Self::READ_STATES.0 | Self::WRITE_STATES.0);
    /// Read storage and call other contracts.
    pub const READ_ONLY: Self = Self(Self::READ_STATES.0 | Self::ALLOW_CALL.0);
    /// Every right.
    pub const ALL: Self = Self(Self::STATES.0 | Self::ALLOW_CALL.0);

    /// Checks if all bits of `flag` are set.
    pub const fn contains(&self, flag: Self) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// Rights held by both sets.
    pub const fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl Default for CallFlags {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::ops::BitOr for CallFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for CallFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl fmt::Display for CallFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("None");
        }

        let mut names = Vec::new();
        if self.contains(Self::READ_STATES) {
            names.push("ReadStates");
        }
        if self.contains(Self::WRITE_STATES) {
            names.push("WriteStates");
        }
        if self.contains(Self::ALLOW_CALL) {
            names.push("AllowCall");
        }
        f.write_str(&names.join("|"))
    }
}

impl fmt::Debug for CallFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallFlags({self})")
    }
}
