//! Generated token streams tagged with the syntax item they must parse as.
//!
//! Generation bugs surface as a panic naming the offending item kind in
//! debug builds; release builds pass the tokens through untouched.

use proc_macro2::TokenStream;
use quote::ToTokens;
use std::{any::type_name, marker::PhantomData, ops::Deref};
use syn::parse2;

pub struct Checked<T: syn::parse::Parse + ToTokens> {
    tks: TokenStream,
    item: PhantomData<T>,
}

/// Tag a generated stream, verifying it parses as `T` in debug builds.
pub fn checked<T: syn::parse::Parse + ToTokens>(tks: TokenStream) -> Checked<T> {
    tks.into()
}

impl<T: syn::parse::Parse + ToTokens> From<TokenStream> for Checked<T> {
    fn from(tks: TokenStream) -> Self {
        #[cfg(debug_assertions)]
        if let Err(err) = parse2::<T>(tks.clone()) {
            panic!(
                "generated tokens do not parse as `{}`: {err}\ntokens: `{tks}`",
                type_name::<T>(),
            )
        }
        Self {
            tks,
            item: PhantomData,
        }
    }
}

impl<T: syn::parse::Parse + ToTokens> Clone for Checked<T> {
    fn clone(&self) -> Self {
        Self {
            tks: self.tks.clone(),
            item: PhantomData,
        }
    }
}

impl<T: syn::parse::Parse + ToTokens> Deref for Checked<T> {
    type Target = TokenStream;

    fn deref(&self) -> &Self::Target {
        &self.tks
    }
}

impl<T: syn::parse::Parse + ToTokens> ToTokens for Checked<T> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.tks.to_tokens(tokens)
    }
}
