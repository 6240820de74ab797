//! The instance-level label accessor.

use quote::quote;
use syn::ImplItemFn;

use crate::{binding::Binding, namer::CodeNamer, tokens::Checked};

/// `{column}_{alt}` reads the instance's current column value and resolves
/// it through the type-level display lookup. A null column or an unmapped
/// value yields `None`, never a panic.
pub fn generate(binding: &Binding, namer: &CodeNamer) -> Checked<ImplItemFn> {
    let placard_path = &namer.placard_path;
    let column = &binding.column;
    let fn_label = namer.fn_label_accessor(column, &binding.opts.alt);
    let static_labels = namer.static_labels(binding.record_name(), column);

    let read = if binding.opts.nullable {
        quote! { let value = self.#column?; }
    } else {
        quote! { let value = self.#column; }
    };

    quote! {
        pub fn #fn_label(&self) -> Option<&'static str> {
            #read
            #static_labels.get(#placard_path::Labelled::symbol(&value))
        }
    }
    .into()
}
