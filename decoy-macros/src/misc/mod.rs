use proc_macro2::{Ident, Literal};
use quote::format_ident;
use syn::ext::IdentExt;

/// String literal of the method name, without the `r#` prefix of raw identifiers.
pub(crate) fn method_name(method: &Ident) -> Literal {
    Literal::string(&method.unraw().to_string())
}

#[cfg(feature = "force-name")]
pub(crate) fn ident_decoy() -> Ident {
    format_ident!("decoy")
}

#[cfg(not(feature = "force-name"))]
pub(crate) fn ident_decoy() -> Ident {
    use proc_macro_crate::{crate_name, FoundCrate};

    match crate_name("decoy") {
        Ok(FoundCrate::Itself) => format_ident!("crate"),
        Ok(FoundCrate::Name(name)) => format_ident!("{name}"),
        Err(_) => format_ident!("decoy"),
    }
}
