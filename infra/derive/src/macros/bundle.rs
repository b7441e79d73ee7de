use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Path, Type};

#[derive(Default)]
struct FieldOptions {
    rename: Option<String>,
    skip: bool,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "IntoBundle expects a struct"));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "IntoBundle requires a struct with named fields",
        ));
    };

    let krate = crate_path(&input.attrs)?;
    let mut inserts = Vec::with_capacity(fields.named.len());

    for field in &fields.named {
        let options = field_options(&field.attrs)?;
        if options.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else { continue };
        let key = options.rename.unwrap_or_else(|| ident.to_string());

        inserts.push(if is_option(&field.ty) {
            quote! {
                if let Some(v) = value.#ident {
                    bundle.insert(#key, v);
                }
            }
        } else {
            quote! { bundle.insert(#key, value.#ident); }
        });
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::core::convert::From<#name #ty_generics> for #krate::bundle::Bundle #where_clause {
            fn from(value: #name #ty_generics) -> Self {
                let mut bundle = Self::new();
                #(#inserts)*
                bundle
            }
        }
    })
}

fn crate_path(attrs: &[Attribute]) -> syn::Result<TokenStream> {
    let mut path = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("bundle")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                path = Some(lit.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported container attribute, expected `crate`"))
            }
        })?;
    }

    Ok(path.map_or_else(|| quote!(::droidkit_kernel), |p| quote!(#p)))
}

fn field_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("bundle")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                options.rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported field attribute, expected `rename` or `skip`"))
            }
        })?;
    }
    Ok(options)
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.qself.is_none() && path.path.segments.last().is_some_and(|seg| seg.ident == "Option")
}
