use placard_gen::namer::CodeNamer;
use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;

/// Bind one labelled enum column to a record type. See the `placard` crate
/// docs for the input grammar.
#[proc_macro_error]
#[proc_macro]
pub fn labelled(tokens: TokenStream) -> TokenStream {
    match placard_gen::macros::labelled::labelled(tokens.into()) {
        Ok(binding) => binding.generate(&CodeNamer::placard()).into(),
        Err(es) => {
            for e in es {
                e.emit();
            }
            TokenStream::new()
        }
    }
}
