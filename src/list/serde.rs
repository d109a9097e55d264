//! `serde` support for [`SparseList`](crate::SparseList).
//!
//! - **Serialize**: as a sequence of `len()` logical elements, holes
//!   written out as `T::default()`.
//! - **Deserialize**: from any sequence, appending each element.
//!
//! Holes are not preserved across a round trip: a deserialized list stores
//! every element explicitly.

use std::{fmt, marker::PhantomData};

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use super::sparse_list::SparseList;

impl<T: Default + PartialEq + Clone + Serialize> Serialize for SparseList<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let elems = self.to_vec();
        let mut seq = s.serialize_seq(Some(elems.len()))?;
        for elem in &elems {
            seq.serialize_element(elem)?;
        }
        seq.end()
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for ListVisitor<T>
where
    T: Deserialize<'de> + Default + PartialEq + Clone,
{
    type Value = SparseList<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let out = SparseList::with_capacity(a.size_hint().unwrap_or(0));
        while let Some(elem) = a.next_element::<T>()? {
            out.add(elem);
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for SparseList<T>
where
    T: Deserialize<'de> + Default + PartialEq + Clone,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor::<T>(PhantomData))
    }
}
