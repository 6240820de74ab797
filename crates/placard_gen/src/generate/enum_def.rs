//! The column enum itself: one unit variant per symbol, plus its
//! `Labelled` registration carrying the full member table.

use quote::quote;
use syn::{Ident, ItemEnum, ItemImpl};

use crate::{binding::Binding, members::split, namer::CodeNamer, tokens::Checked};

pub struct EnumDec {
    pub enum_item: Checked<ItemEnum>,
    pub labelled_impl: Checked<ItemImpl>,
}

pub fn generate(binding: &Binding, namer: &CodeNamer) -> EnumDec {
    let placard_path = &namer.placard_path;
    let ty = &binding.variants;

    let variants: Vec<Ident> = binding
        .members
        .iter()
        .map(|member| namer.variant(&member.symbol))
        .collect();
    let tables = split(&binding.members);
    let symbols: Vec<&String> = tables.for_enum.iter().map(|(symbol, _)| symbol).collect();
    let codes: Vec<i64> = tables.for_enum.iter().map(|(_, code)| *code).collect();
    let labels: Vec<&String> = tables.for_display.iter().map(|(_, label)| label).collect();

    EnumDec {
        enum_item: quote! {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            pub enum #ty {
                #(#variants),*
            }
        }
        .into(),
        labelled_impl: quote! {
            impl #placard_path::Labelled for #ty {
                const MEMBERS: &'static [#placard_path::Member] = &[
                    #(#placard_path::Member {
                        symbol: #symbols,
                        code: #codes,
                        label: #labels,
                    }),*
                ];

                fn symbol(&self) -> &'static str {
                    match self {
                        #(Self::#variants => #symbols),*
                    }
                }

                fn code(&self) -> i64 {
                    match self {
                        #(Self::#variants => #codes),*
                    }
                }

                fn from_code(code: i64) -> Option<Self> {
                    match code {
                        #(#codes => Some(Self::#variants),)*
                        _ => None,
                    }
                }

                fn from_symbol(symbol: &str) -> Option<Self> {
                    match symbol {
                        #(#symbols => Some(Self::#variants),)*
                        _ => None,
                    }
                }
            }
        }
        .into(),
    }
}
