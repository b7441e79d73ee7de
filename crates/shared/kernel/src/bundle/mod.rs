//! A typed key-value container modelled on the Android `Bundle`, and converters from
//! string-keyed mappings into it.
//!
//! Statically typed values go through [`to_bundle`], which cannot lose data. Mappings
//! of type-erased values (`Box<dyn Any>`) use [`to_bundle_lossy`], which keeps the
//! platform helper's policy of silently dropping unsupported values, or
//! [`try_to_bundle`], which rejects them.
//!
//! ```rust
//! use droidkit_kernel::bundle::{to_bundle, Bundle};
//!
//! let bundle = to_bundle([("retries", 3), ("timeout", 30)]);
//! assert_eq!(bundle.get_int("retries"), Some(3));
//! assert_eq!(bundle.len(), 2);
//! ```

mod convert;
mod value;

pub use convert::{
    AnyValue, to_bundle, to_bundle_into, to_bundle_lossy, to_bundle_lossy_into, try_to_bundle,
};
pub use value::BundleValue;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[droidkit_derive::droidkit_error]
pub enum BundleError {
    #[error("Unsupported bundle value{}: {message}", format_context(.context))]
    UnsupportedValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// String-keyed container of [`BundleValue`]s. Inserting an existing key replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    entries: FxHashMap<String, BundleValue>,
}

macro_rules! typed_accessors {
    (@put value $put:ident, $variant:ident, $ty:ty) => {
        pub fn $put(&mut self, key: impl Into<String>, value: $ty) -> &mut Self {
            self.entries.insert(key.into(), BundleValue::$variant(value));
            self
        }
    };
    (@put into $put:ident, $variant:ident, $ty:ty) => {
        pub fn $put(&mut self, key: impl Into<String>, value: impl Into<$ty>) -> &mut Self {
            self.entries.insert(key.into(), BundleValue::$variant(value.into()));
            self
        }
    };
    ($($kind:ident $put:ident / $get:ident : $variant:ident($ty:ty) -> $out:ty, |$v:ident| $read:expr;)*) => {
        $(
            typed_accessors!(@put $kind $put, $variant, $ty);

            #[must_use]
            pub fn $get(&self, key: &str) -> Option<$out> {
                match self.entries.get(key) {
                    Some(BundleValue::$variant($v)) => Some($read),
                    _ => None,
                }
            }
        )*
    };
}

impl Bundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BundleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&BundleValue> {
        self.entries.get(key)
    }

    /// Inserts any convertible value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<BundleValue>,
    ) -> Option<BundleValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<BundleValue> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // Scalars take their exact type so bare literals resolve (`put_short("k", 2)`).
    typed_accessors! {
        into put_bundle / get_bundle: Bundle(Bundle) -> &Bundle, |v| v;
        value put_char / get_char: Char(char) -> char, |v| *v;
        value put_boolean / get_boolean: Boolean(bool) -> bool, |v| *v;
        into put_char_array / get_char_array: CharArray(Vec<char>) -> &[char], |v| v.as_slice();
        value put_float / get_float: Float(f32) -> f32, |v| *v;
        into put_float_array / get_float_array: FloatArray(Vec<f32>) -> &[f32], |v| v.as_slice();
        value put_int / get_int: Int(i32) -> i32, |v| *v;
        into put_int_array / get_int_array: IntArray(Vec<i32>) -> &[i32], |v| v.as_slice();
        value put_short / get_short: Short(i16) -> i16, |v| *v;
        into put_short_array / get_short_array: ShortArray(Vec<i16>) -> &[i16], |v| v.as_slice();
        into put_string / get_string: String(String) -> &str, |v| v.as_str();
    }

    pub fn put_char_sequence(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), BundleValue::CharSequence(value.into()));
        self
    }

    /// Text stored either as a char sequence or as a string (a string is a char sequence).
    #[must_use]
    pub fn get_char_sequence(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(BundleValue::CharSequence(v) | BundleValue::String(v)) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl<K, V> Extend<(K, V)> for Bundle
where
    K: Into<String>,
    V: Into<BundleValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Bundle
where
    K: Into<String>,
    V: Into<BundleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        bundle.extend(iter);
        bundle
    }
}

impl IntoIterator for Bundle {
    type Item = (String, BundleValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, BundleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
