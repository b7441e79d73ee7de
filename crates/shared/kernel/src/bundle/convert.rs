use super::{Bundle, BundleError, BundleValue};
use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;

/// A type-erased mapping value, as produced by heterogeneous `Map<String, Any>` callers.
pub type AnyValue = Box<dyn Any>;

/// Builds a new bundle from statically typed entries. Every entry is kept.
pub fn to_bundle<I, K, V>(entries: I) -> Bundle
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<BundleValue>,
{
    entries.into_iter().collect()
}

/// Inserts statically typed entries into an existing bundle and hands it back.
pub fn to_bundle_into<I, K, V>(entries: I, bundle: &mut Bundle) -> &mut Bundle
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<BundleValue>,
{
    bundle.extend(entries);
    bundle
}

/// Builds a new bundle from type-erased entries, silently dropping values of
/// unsupported types.
pub fn to_bundle_lossy<I, K>(entries: I) -> Bundle
where
    I: IntoIterator<Item = (K, AnyValue)>,
    K: Into<String>,
{
    let mut bundle = Bundle::new();
    to_bundle_lossy_into(entries, &mut bundle);
    bundle
}

/// Inserts type-erased entries into `bundle`; entries whose value type is not supported
/// are skipped without an error.
pub fn to_bundle_lossy_into<I, K>(entries: I, bundle: &mut Bundle) -> &mut Bundle
where
    I: IntoIterator<Item = (K, AnyValue)>,
    K: Into<String>,
{
    for (key, value) in entries {
        if let Ok(value) = classify(value) {
            bundle.insert(key, value);
        }
    }
    bundle
}

/// Builds a new bundle from type-erased entries, failing on the first unsupported value.
///
/// # Errors
/// Returns [`BundleError::UnsupportedValue`] naming the offending key.
pub fn try_to_bundle<I, K>(entries: I) -> Result<Bundle, BundleError>
where
    I: IntoIterator<Item = (K, AnyValue)>,
    K: Into<String>,
{
    let mut bundle = Bundle::new();
    for (key, value) in entries {
        let key = key.into();
        let Ok(value) = classify(value) else {
            return Err(BundleError::UnsupportedValue {
                message: format!("value for key '{key}' has no bundle representation").into(),
                context: None,
            });
        };
        bundle.insert(key, value);
    }
    Ok(bundle)
}

macro_rules! downcast_or_continue {
    ($value:ident, $($ty:ty => $wrap:expr),* $(,)?) => {
        $(
            let $value = match $value.downcast::<$ty>() {
                Ok(v) => return Ok(($wrap)(*v)),
                Err(other) => other,
            };
        )*
    };
}

// Match order follows the platform helper: nested bundle first, plain strings last.
// `&str` maps to `String` exactly as `BundleValue::from(&str)` does; `Cow`, `Box<str>`
// and `Arc<str>` map to `CharSequence`.
fn classify(value: AnyValue) -> Result<BundleValue, AnyValue> {
    downcast_or_continue! {
        value,
        BundleValue => |v| v,
        Bundle => BundleValue::Bundle,
        char => BundleValue::Char,
        bool => BundleValue::Boolean,
        Vec<char> => BundleValue::CharArray,
        &'static str => |v: &str| BundleValue::String(v.to_owned()),
        Cow<'static, str> => |v: Cow<'static, str>| BundleValue::CharSequence(v.into_owned()),
        Box<str> => |v: Box<str>| BundleValue::CharSequence(v.into_string()),
        Arc<str> => |v: Arc<str>| BundleValue::CharSequence(v.as_ref().to_owned()),
        f32 => BundleValue::Float,
        Vec<f32> => BundleValue::FloatArray,
        i32 => BundleValue::Int,
        Vec<i32> => BundleValue::IntArray,
        i16 => BundleValue::Short,
        Vec<i16> => BundleValue::ShortArray,
        String => BundleValue::String,
    }
    Err(value)
}
