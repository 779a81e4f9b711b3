//! `serde` support, enabled by the `serde` feature.
//!
//! A [`Sequence`] is represented as a plain serde sequence.

use alloc::vec::Vec;

use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Sequence;

impl<T: Serialize> Serialize for Sequence<T> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Sequence::from)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Sequence;

    #[test]
    fn json_representation() {
        let seq = Sequence::from([67, 23, 45]);
        let text = serde_json::to_string(&seq).unwrap();
        assert_eq!(text, "[67,23,45]");

        let back: Sequence<i32> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, seq);
    }
}
