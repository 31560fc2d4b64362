use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    parse2,
    punctuated::Punctuated,
    token::Comma,
    Expr, ExprCall, Result as ParseResult, Token,
};

use crate::misc::{ident_decoy, method_name};

pub(crate) fn exec(input: TokenStream) -> TokenStream {
    let call: Call = match parse2(input) {
        Ok(call) => call,
        Err(err) => {
            return err.to_compile_error();
        }
    };

    call.into_token_stream()
}

struct Call {
    obj: Expr,
    method: Ident,
    args: Punctuated<Expr, Comma>,
    block: Option<Expr>,
}

impl Parse for Call {
    fn parse(input: ParseStream<'_>) -> ParseResult<Self> {
        let obj = input.parse()?;

        input.parse::<Token![,]>()?;

        let call: ExprCall = input.parse()?;

        let method = match *call.func {
            Expr::Path(p) => match p.path.get_ident() {
                Some(method) => method.clone(),
                None => return Err(input.error("Expect method identifier")),
            },
            _ => return Err(input.error("Expect method identifier")),
        };

        let block = if input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty() {
            Some(input.parse()?)
        } else {
            None
        };

        Ok(Self {
            obj,
            method,
            args: call.args,
            block,
        })
    }
}

impl ToTokens for Call {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            obj,
            method,
            args,
            block,
        } = self;

        let decoy = ident_decoy();
        let method = method_name(method);
        let args = args.iter();
        let args = quote!(&[#( #decoy::Value::from(#args) ),*]);

        tokens.extend(match block {
            Some(block) => quote!(#obj.call_with_block(#method, #args, &mut #block)),
            None => quote!(#obj.call(#method, #args)),
        });

        #[cfg(feature = "debug")]
        println!("\ncall!:\n{tokens:#}\n");
    }
}
