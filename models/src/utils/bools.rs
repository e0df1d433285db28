use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

/// A type that can only ever (de)serialize from and to the constant boolean
/// `true`. Used as the `success` discriminant of the success envelope.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct True;

/// A type that can only ever (de)serialize from and to the constant boolean
/// `false`. Used as the `success` discriminant of the error envelope.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct False;

impl<'de> Deserialize<'de> for True {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if bool::deserialize(deserializer)? {
			Ok(True)
		} else {
			Err(D::Error::custom("bool is not true"))
		}
	}
}

impl<'de> Deserialize<'de> for False {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if !bool::deserialize(deserializer)? {
			Ok(False)
		} else {
			Err(D::Error::custom("bool is not false"))
		}
	}
}

impl Serialize for True {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_bool(true)
	}
}

impl Serialize for False {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_bool(false)
	}
}

impl From<True> for bool {
	fn from(_: True) -> Self {
		true
	}
}

impl From<False> for bool {
	fn from(_: False) -> Self {
		false
	}
}
