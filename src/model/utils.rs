use serde::de::DeserializeOwned;

use super::prelude::*;
use crate::internal::prelude::*;
use crate::json;

/// A leaf value of the payload, decoded through its serde implementation.
pub(crate) trait FieldType: DeserializeOwned {
    /// Describes the expected shape, for [`DecodeError::TypeMismatch`].
    const EXPECTED: &'static str;
}

macro_rules! field_types {
    ($($ty:ty => $expected:literal,)*) => {
        $(
            impl FieldType for $ty {
                const EXPECTED: &'static str = $expected;
            }
        )*
    };
}

field_types! {
    bool => "a boolean",
    i64 => "an integer",
    u64 => "an unsigned integer",
    String => "a string",
    UserId => "a string",
    MessageId => "a string",
    ReactionType => "a string",
    ChannelType => "a string",
    MemberRole => "a string",
    EventType => "a string",
    ChannelId => "a channel id of the form `type:id`",
    Timestamp => "an RFC 3339 timestamp",
}

/// A record of the payload, decoded from a JSON object field by field.
pub(crate) trait FromFields: Sized {
    fn from_fields(fields: Fields) -> Result<Self>;
}

/// A JSON object being decoded into a payload record.
///
/// Every field read is removed from the object, so whatever remains once a record has read its
/// known fields is data this version of the library does not know about.
#[derive(Debug)]
pub(crate) struct Fields {
    map: JsonMap,
    path: FieldPath,
}

impl Fields {
    pub fn new(map: JsonMap, path: FieldPath) -> Self {
        Self {
            map,
            path,
        }
    }

    /// Takes the value at `key`. Absent keys and `null` both decode to `None`.
    pub fn take<T: FieldType>(&mut self, key: &str) -> Result<Option<T>> {
        self.take_as(key, key)
    }

    /// Same as [`Self::take`], reporting errors under the model field name `field`.
    pub fn take_as<T: FieldType>(&mut self, key: &str, field: &str) -> Result<Option<T>> {
        match self.map.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => json::from_value(value).map(Some).map_err(|_| {
                DecodeError::TypeMismatch {
                    path: self.path.join(field),
                    expected: T::EXPECTED,
                }
            }),
        }
    }

    /// Takes the nested object at `key`, decoding it as a record.
    pub fn take_object<T: FromFields>(&mut self, key: &str, field: &str) -> Result<Option<T>> {
        let path = self.path.join(field);

        match self.map.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode_object(value, path).map(Some),
        }
    }

    /// Takes the list of objects at `key`, decoding each as a record.
    pub fn take_list<T: FromFields>(&mut self, key: &str, field: &str) -> Result<Option<Vec<T>>> {
        let path = self.path.join(field);

        match self.map.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| decode_object(item, path.index(index)))
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(_) => Err(DecodeError::TypeMismatch {
                path,
                expected: "a list",
            }),
        }
    }

    /// A copy of the remaining fields, viewed as the model field `field`.
    ///
    /// Used where one wire object populates more than one record.
    pub fn fork(&self, field: &str) -> Self {
        Self::new(self.map.clone(), self.path.join(field))
    }

    /// The fields that have not been read.
    pub fn into_rest(self) -> JsonMap {
        self.map
    }
}

fn decode_object<T: FromFields>(value: Value, path: FieldPath) -> Result<T> {
    match value {
        Value::Object(map) => T::from_fields(Fields::new(map, path)),
        _ => Err(DecodeError::TypeMismatch {
            path,
            expected: "an object",
        }),
    }
}

/// Returns the value of a field an event kind cannot be built without.
pub(crate) fn required<T>(value: Option<T>, path: &str) -> Result<T> {
    value.ok_or_else(|| DecodeError::missing(path))
}
