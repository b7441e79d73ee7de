use super::Bundle;
use serde::{Deserialize, Serialize};

/// The value kinds a [`Bundle`] can hold.
///
/// `CharSequence` and `String` both store owned text; the variant records which typed
/// insertion was used so that typed getters behave like the platform container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleValue {
    Bundle(Bundle),
    Char(char),
    Boolean(bool),
    CharArray(Vec<char>),
    CharSequence(String),
    Float(#[serde(with = "float_repr")] f32),
    FloatArray(#[serde(with = "float_repr::seq")] Vec<f32>),
    Int(i32),
    IntArray(Vec<i32>),
    Short(i16),
    ShortArray(Vec<i16>),
    String(String),
}

impl BundleValue {
    /// Name of the variant, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bundle(_) => "bundle",
            Self::Char(_) => "char",
            Self::Boolean(_) => "boolean",
            Self::CharArray(_) => "char_array",
            Self::CharSequence(_) => "char_sequence",
            Self::Float(_) => "float",
            Self::FloatArray(_) => "float_array",
            Self::Int(_) => "int",
            Self::IntArray(_) => "int_array",
            Self::Short(_) => "short",
            Self::ShortArray(_) => "short_array",
            Self::String(_) => "string",
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for BundleValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    Bundle => Bundle,
    char => Char,
    bool => Boolean,
    Vec<char> => CharArray,
    f32 => Float,
    Vec<f32> => FloatArray,
    i32 => Int,
    Vec<i32> => IntArray,
    i16 => Short,
    Vec<i16> => ShortArray,
    String => String,
}

impl From<&str> for BundleValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<&[char]> for BundleValue {
    fn from(value: &[char]) -> Self {
        Self::CharArray(value.to_vec())
    }
}

impl From<&[f32]> for BundleValue {
    fn from(value: &[f32]) -> Self {
        Self::FloatArray(value.to_vec())
    }
}

impl From<&[i32]> for BundleValue {
    fn from(value: &[i32]) -> Self {
        Self::IntArray(value.to_vec())
    }
}

impl From<&[i16]> for BundleValue {
    fn from(value: &[i16]) -> Self {
        Self::ShortArray(value.to_vec())
    }
}

/// JSON has no NaN or infinity, so non-finite floats travel as the strings `"NaN"`,
/// `"Infinity"` and `"-Infinity"`.
mod float_repr {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    const NAN: &str = "NaN";
    const INFINITY: &str = "Infinity";
    const NEG_INFINITY: &str = "-Infinity";

    struct Repr(f32);

    impl Serialize for Repr {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let v = self.0;
            if v.is_finite() {
                serializer.serialize_f32(v)
            } else if v.is_nan() {
                serializer.serialize_str(NAN)
            } else if v.is_sign_positive() {
                serializer.serialize_str(INFINITY)
            } else {
                serializer.serialize_str(NEG_INFINITY)
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f32),
        Text(String),
    }

    impl Wire {
        fn into_f32<E: Error>(self) -> Result<f32, E> {
            match self {
                Self::Number(v) => Ok(v),
                Self::Text(text) => match text.as_str() {
                    NAN => Ok(f32::NAN),
                    INFINITY => Ok(f32::INFINITY),
                    NEG_INFINITY => Ok(f32::NEG_INFINITY),
                    other => Err(E::custom(format!("invalid float '{other}'"))),
                },
            }
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(super) fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        Repr(*value).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        Wire::deserialize(deserializer)?.into_f32()
    }

    pub(super) mod seq {
        use super::{Repr, Wire};
        use serde::{Deserialize, Deserializer, Serializer};

        pub(in super::super) fn serialize<S: Serializer>(
            values: &[f32],
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(values.iter().copied().map(Repr))
        }

        pub(in super::super) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<f32>, D::Error> {
            Vec::<Wire>::deserialize(deserializer)?.into_iter().map(Wire::into_f32).collect()
        }
    }
}
