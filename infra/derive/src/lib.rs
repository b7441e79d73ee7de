#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros used across the `DroidKit` workspace.
//!
//! * [`macro@droidkit_error`] turns an enum into a context-aware error type.
//! * [`macro@IntoBundle`] converts a struct with named fields into a
//!   `droidkit_kernel::bundle::Bundle`.
//!
//! Examples are `ignore`d because the generated code refers to crates this
//! proc-macro crate cannot depend on.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for domain error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[droidkit_derive::droidkit_error]
/// pub enum PersistError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn create(path: &std::path::Path) -> Result<std::fs::File, PersistError> {
///     std::fs::File::create(path).context("Creating destination")
/// }
/// ```
#[proc_macro_attribute]
pub fn droidkit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Derives `From<Struct> for Bundle`.
///
/// Every named field becomes one bundle entry keyed by the field name (or by
/// `#[bundle(rename = "...")]`). Field types must implement
/// `Into<droidkit_kernel::bundle::BundleValue>`; `Option<T>` fields are inserted
/// only when `Some`. Fields marked `#[bundle(skip)]` are left out.
///
/// # Example
///
/// ```rust,ignore
/// use droidkit_kernel::bundle::Bundle;
///
/// #[derive(droidkit_derive::IntoBundle)]
/// struct LaunchArgs {
///     #[bundle(rename = "package")]
///     package_name: String,
///     retries: i32,
///     label: Option<String>,
/// }
///
/// let bundle: Bundle = LaunchArgs { package_name: "a.b".into(), retries: 2, label: None }.into();
/// assert_eq!(bundle.get_int("retries"), Some(2));
/// ```
#[proc_macro_derive(IntoBundle, attributes(bundle))]
pub fn into_bundle(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::bundle::expand(input).into()
}
