//! Index identifiers into a [`Contest`](super::Contest).

use std::fmt;

macro_rules! contest_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(usize);

        impl $name {
            /// Creates an id from a raw index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the raw index.
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

contest_id!(
    /// Identifies a [`Period`](super::Period).
    PeriodId,
    "P"
);
contest_id!(
    /// Identifies a [`Room`](super::Room).
    RoomId,
    "R"
);
contest_id!(
    /// Identifies a [`School`](super::School).
    SchoolId,
    "S"
);
contest_id!(
    /// Identifies a [`Category`](super::Category).
    CategoryId,
    "C"
);
contest_id!(
    /// Identifies a [`Person`](super::Person) of any role.
    PersonId,
    "#"
);
