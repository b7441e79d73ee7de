use anyhow::{Context, Result, bail};
use droidkit::kernel::bundle::{BundleValue, to_bundle};

/// Builds a bundle from `KEY=VALUE` arguments and prints it as JSON.
///
/// Values are typed by shape: `true`/`false` become booleans, integers that fit in
/// 32 bits become ints, other numbers become floats, and everything else a string.
///
/// # Errors
/// Returns an error for an argument without `=` or with an empty key.
pub fn bundle(entries: &[String]) -> Result<()> {
    let pairs = entries.iter().map(|entry| parse_entry(entry)).collect::<Result<Vec<_>>>()?;
    let bundle = to_bundle(pairs);

    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}

fn parse_entry(entry: &str) -> Result<(String, BundleValue)> {
    let (key, raw) =
        entry.split_once('=').with_context(|| format!("Expected KEY=VALUE, got '{entry}'"))?;
    if key.is_empty() {
        bail!("Empty key in '{entry}'");
    }
    Ok((key.to_owned(), parse_value(raw)))
}

fn parse_value(raw: &str) -> BundleValue {
    if let Ok(flag) = raw.parse::<bool>() {
        return BundleValue::Boolean(flag);
    }
    if let Ok(int) = raw.parse::<i32>() {
        return BundleValue::Int(int);
    }
    // `inf` and `NaN` parse as floats; only numerals count here.
    if raw.bytes().any(|b| b.is_ascii_digit())
        && let Ok(float) = raw.parse::<f32>()
    {
        return BundleValue::Float(float);
    }
    BundleValue::String(raw.to_owned())
}
