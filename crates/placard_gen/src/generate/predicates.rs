//! Per-member predicate helpers on the record type.

use quote::quote;
use syn::ImplItemFn;

use crate::{binding::Binding, namer::CodeNamer, tokens::Checked};

/// One `fn <name>(&self) -> bool` per member, named `active`,
/// `status_active` or `active_status` depending on the prefix/suffix
/// options.
pub fn generate(binding: &Binding, namer: &CodeNamer) -> Vec<Checked<ImplItemFn>> {
    let ty = &binding.variants;
    let column = &binding.column;

    binding
        .members
        .iter()
        .map(|member| {
            let name = namer.fn_predicate(
                column,
                &member.symbol,
                binding.opts.prefix,
                binding.opts.suffix,
            );
            let variant = namer.variant(&member.symbol);
            let pattern = if binding.opts.nullable {
                quote! { Some(#ty::#variant) }
            } else {
                quote! { #ty::#variant }
            };
            quote! {
                pub fn #name(&self) -> bool {
                    matches!(self.#column, #pattern)
                }
            }
            .into()
        })
        .collect()
}
