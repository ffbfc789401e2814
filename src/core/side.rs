//! Match sides and per-side data storage.
//!
//! ## Side
//!
//! A hand cricket match always has exactly two sides: the user and the
//! computer opponent.
//!
//! ## SideMap
//!
//! Per-side data storage with O(1) access. Supports iteration and
//! indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    User,
    Computer,
}

impl Side {
    /// Get the opposing side.
    ///
    /// ```
    /// use hand_cricket::core::Side;
    ///
    /// assert_eq!(Side::User.opponent(), Side::Computer);
    /// assert_eq!(Side::Computer.opponent(), Side::User);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }

    /// Iterate over both sides, user first.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::User, Side::Computer].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::User => write!(f, "User"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// Holds one `T` per side. Use `SideMap::with_value()` to initialize both
/// entries to the same value.
///
/// ## Example
///
/// ```
/// use hand_cricket::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::with_value(0);
///
/// scores[Side::User] += 4;
/// assert_eq!(scores[Side::User], 4);
/// assert_eq!(scores[Side::Computer], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    user: T,
    computer: T,
}

impl<T> SideMap<T> {
    /// Create a new SideMap from explicit per-side values.
    #[must_use]
    pub fn new(user: T, computer: T) -> Self {
        Self { user, computer }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            user: value.clone(),
            computer: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::User => &self.user,
            Side::Computer => &self.computer,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::User => &mut self.user,
            Side::Computer => &mut self.computer,
        }
    }

    /// Iterate over (Side, &T) pairs, user first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::User, &self.user), (Side::Computer, &self.computer)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::User.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::User);
        assert_eq!(Side::User.opponent().opponent(), Side::User);
    }

    #[test]
    fn test_both() {
        let sides: Vec<_> = Side::both().collect();
        assert_eq!(sides, vec![Side::User, Side::Computer]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::User), "User");
        assert_eq!(format!("{}", Side::Computer), "Computer");
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(10, 20);
        assert_eq!(map[Side::User], 10);
        assert_eq!(map[Side::Computer], 20);
    }

    #[test]
    fn test_side_map_with_value() {
        let map: SideMap<u32> = SideMap::with_value(7);
        assert_eq!(map[Side::User], 7);
        assert_eq!(map[Side::Computer], 7);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<u32> = SideMap::with_value(0);

        map[Side::User] = 11;
        map[Side::Computer] += 3;

        assert_eq!(map[Side::User], 11);
        assert_eq!(map[Side::Computer], 3);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(1, 2);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::User, &1), (Side::Computer, &2)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(4u32, 9u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
