//! A validated single-column binding and its full expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path};

use crate::{
    generate::{accessors, enum_def, lookups, predicates},
    members::MemberDef,
    namer::CodeNamer,
    options::Opts,
};

/// The outcome of validating one `labelled!` invocation. Immutable once
/// built; generation is a pure function of it.
pub struct Binding {
    pub record: Path,
    pub column: Ident,
    pub variants: Ident,
    pub members: Vec<MemberDef>,
    pub opts: Opts,
}

impl Binding {
    /// Last segment of the record path, used to key generated statics.
    pub fn record_name(&self) -> &Ident {
        &self
            .record
            .segments
            .last()
            .expect("paths have at least one segment")
            .ident
    }

    /// Expand to the column enum, the lookup statics, and one impl block on
    /// the record type holding the lookups, the label accessor and the
    /// per-member predicates.
    pub fn generate(&self, namer: &CodeNamer) -> TokenStream {
        let enum_def::EnumDec {
            enum_item,
            labelled_impl,
        } = enum_def::generate(self, namer);
        let lookups::LookupDec { statics, getters } = lookups::generate(self, namer);
        let accessor = accessors::generate(self, namer);
        let predicates = predicates::generate(self, namer);
        let record = &self.record;

        quote! {
            #enum_item
            #labelled_impl
            #(#statics)*
            impl #record {
                #(#getters)*
                #accessor
                #(#predicates)*
            }
        }
    }
}
