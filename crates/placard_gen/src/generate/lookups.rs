//! The two type-level lookups: symbol → label, and label → code.
//!
//! Both are backed by process-wide statics built on first access from the
//! enum's member table, so every instance of the record type shares one
//! read-only copy.

use quote::quote;
use syn::{ImplItemFn, ItemStatic};

use crate::{binding::Binding, namer::CodeNamer, tokens::Checked};

pub struct LookupDec {
    pub statics: Vec<Checked<ItemStatic>>,
    pub getters: Vec<Checked<ImplItemFn>>,
}

pub fn generate(binding: &Binding, namer: &CodeNamer) -> LookupDec {
    let placard_path = &namer.placard_path;
    let ty = &binding.variants;
    let static_labels = namer.static_labels(binding.record_name(), &binding.column);
    let static_codes = namer.static_codes(binding.record_name(), &binding.column);
    let fn_display = namer.fn_display_lookup(&binding.column, &binding.opts.alt);
    let fn_filter = namer.fn_filter_lookup(&binding.column);

    LookupDec {
        statics: vec![
            quote! {
                static #static_labels: #placard_path::lookup::LabelMap =
                    #placard_path::lookup::LabelMap::new(
                        <#ty as #placard_path::Labelled>::MEMBERS,
                    );
            }
            .into(),
            quote! {
                static #static_codes: #placard_path::lookup::CodeMap =
                    #placard_path::lookup::CodeMap::new(
                        <#ty as #placard_path::Labelled>::MEMBERS,
                    );
            }
            .into(),
        ],
        getters: vec![
            quote! {
                pub fn #fn_display() -> &'static #placard_path::lookup::LabelTable {
                    #static_labels.table()
                }
            }
            .into(),
            quote! {
                pub fn #fn_filter() -> &'static #placard_path::lookup::CodeTable {
                    #static_codes.table()
                }
            }
            .into(),
        ],
    }
}
