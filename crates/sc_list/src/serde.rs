//! `serde` support, enabled by the `serde` feature.

use serde_core::de::{SeqAccess, Visitor};
use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use core::fmt;
use core::marker::PhantomData;

use crate::DequeList;

impl<T: Serialize> Serialize for DequeList<T> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
    type Value = DequeList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = DequeList::new();
        while let Some(value) = seq.next_element()? {
            list.push_back(value);
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DequeList<T> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ListVisitor(PhantomData))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::DequeList;

    #[test]
    fn json_representation() {
        let list = DequeList::from([4, 3, 1, 2, 5]);
        let text = serde_json::to_string(&list).unwrap();
        assert_eq!(text, "[4,3,1,2,5]");

        let back: DequeList<i32> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, list);
        assert_ne!(back.id(), list.id());

        assert!(serde_json::from_str::<DequeList<i32>>("{}").is_err());
    }
}
