use crate::Smalltime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized as the encoded `i64`.
impl Serialize for Smalltime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_bits())
    }
}

impl<'de> Deserialize<'de> for Smalltime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Smalltime::from_bits)
    }
}
