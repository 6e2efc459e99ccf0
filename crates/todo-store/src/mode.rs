//! Open-mode capability flags.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// The set of capabilities a [`LineStore`](crate::LineStore) handle was
/// opened with.
///
/// Flags combine with `|`:
///
/// ```
/// use todo_store::OpenMode;
///
/// let mode = OpenMode::READ | OpenMode::APPEND;
/// assert!(mode.can_read());
/// assert!(mode.can_write());
/// assert!(!mode.contains(OpenMode::WRITE));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenMode(u8);

impl OpenMode {
    /// Open for reading.
    pub const READ: Self = Self(1 << 0);
    /// Open for writing at the cursor.
    pub const WRITE: Self = Self(1 << 1);
    /// Every write lands at end of file.
    pub const APPEND: Self = Self(1 << 2);
    /// Erase contents when opening.
    pub const TRUNCATE: Self = Self(1 << 3);
    /// Place the cursor at end of file after opening.
    pub const SEEK_END: Self = Self(1 << 4);
    /// No newline conversion. Recorded and carried through `clear`.
    pub const BINARY: Self = Self(1 << 5);

    /// The mode used when none is given.
    pub const DEFAULT: Self = Self::READ.union(Self::WRITE).union(Self::APPEND);

    const NAMES: [(Self, &'static str); 6] = [
        (Self::READ, "read"),
        (Self::WRITE, "write"),
        (Self::APPEND, "append"),
        (Self::TRUNCATE, "truncate"),
        (Self::SEEK_END, "seek_end"),
        (Self::BINARY, "binary"),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns true if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if any flag in `other` is set.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn can_read(self) -> bool {
        self.contains(Self::READ)
    }

    /// Write or append.
    pub const fn can_write(self) -> bool {
        self.intersects(Self::WRITE.union(Self::APPEND))
    }

    /// Append only; plain write does not satisfy it.
    pub const fn can_append(self) -> bool {
        self.contains(Self::APPEND)
    }

    /// True if the underlying file needs a writable OS handle.
    pub(crate) const fn opens_for_write(self) -> bool {
        self.intersects(Self::WRITE.union(Self::APPEND).union(Self::TRUNCATE))
    }
}

impl Default for OpenMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for OpenMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for OpenMode {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for OpenMode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpenMode({})", self)
    }
}
