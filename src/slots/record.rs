//! Mapped records produced by classification

use serde::Serialize;
use std::fmt;

/// Result of classifying one item: its slot plus two pass-through attributes
///
/// For files the attributes are (thickness, width); for tasks they are
/// (layer, duration). Neither is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MappedRecord<A, B> {
    /// Slot index of the item's category
    pub slot: usize,
    /// First attribute (thickness / layer)
    pub attr1: A,
    /// Second attribute (width / duration)
    pub attr2: B,
}

impl<A, B> MappedRecord<A, B> {
    pub fn new(slot: usize, attr1: A, attr2: B) -> Self {
        Self { slot, attr1, attr2 }
    }

    pub fn into_tuple(self) -> (usize, A, B) {
        (self.slot, self.attr1, self.attr2)
    }
}

impl<A, B> From<MappedRecord<A, B>> for (usize, A, B) {
    fn from(record: MappedRecord<A, B>) -> Self {
        record.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for MappedRecord<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.slot, self.attr1, self.attr2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tuple_conversion() {
        let record = MappedRecord::new(3, 0, 4.5);
        assert_eq!(record.into_tuple(), (3, 0, 4.5));

        let tuple: (usize, &str, bool) = MappedRecord::new(1, "x", true).into();
        assert_eq!(tuple, (1, "x", true));
    }

    #[test]
    fn test_record_display() {
        let record = MappedRecord::new(1, 1, 1.5);
        assert_eq!(record.to_string(), "(1, 1, 1.5)");
    }
}
