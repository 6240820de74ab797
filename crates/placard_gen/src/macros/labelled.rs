//! # The declarative interface for binding one labelled column.
//!
//! ```text
//! labelled! {
//!     record: Course,
//!     column: status,
//!     members: {
//!         active: 0 => "LIVE",
//!         inactive: 1,
//!     },
//!     alt: name,
//!     prefix: on,
//! }
//! ```
//!
//! Every shape violation is reported as a spanned diagnostic; on failure
//! nothing is generated.

use std::collections::{HashMap, HashSet, LinkedList};

use proc_macro2::{Span, TokenStream};
use proc_macro_error2::{Diagnostic, Level};
use syn::{
    braced,
    parse::{Parse, ParseStream},
    parse2,
    punctuated::Punctuated,
    token, Ident, LitInt, LitStr, Path, Token,
};

use crate::{
    binding::Binding,
    members::MemberDef,
    namer::CodeNamer,
    options::{Opts, DEFAULT_ALT},
};

struct MemberAst {
    symbol: Ident,
    negative: bool,
    code: LitInt,
    label: Option<LitStr>,
}

impl Parse for MemberAst {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let symbol: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let negative = if input.peek(Token![-]) {
            input.parse::<Token![-]>()?;
            true
        } else {
            false
        };
        if !input.peek(LitInt) {
            return Err(input.error(
                "member values must be an integer code or a `code => \"label\"` pair",
            ));
        }
        let code: LitInt = input.parse()?;
        let label = if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            Some(input.parse::<LitStr>()?)
        } else {
            None
        };
        Ok(Self {
            symbol,
            negative,
            code,
            label,
        })
    }
}

#[derive(Default)]
struct Sections {
    record: Option<Path>,
    column: Option<Ident>,
    variants: Option<Ident>,
    alt: Option<Ident>,
    prefix: Option<bool>,
    suffix: Option<bool>,
    nullable: Option<bool>,
    members: Option<(Span, Vec<MemberAst>)>,
}

fn set<T>(slot: &mut Option<T>, key: &Ident, value: T) -> syn::Result<()> {
    if slot.is_some() {
        Err(syn::Error::new(
            key.span(),
            format!("`{key}` is declared twice"),
        ))
    } else {
        *slot = Some(value);
        Ok(())
    }
}

fn on_off(input: ParseStream) -> syn::Result<bool> {
    let switch: Ident = input.parse()?;
    match switch.to_string().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(syn::Error::new(switch.span(), "Expected `on` or `off`")),
    }
}

fn members_mapping(input: ParseStream) -> syn::Result<(Span, Vec<MemberAst>)> {
    if input.peek(token::Bracket) {
        return Err(input.error(
            "list form enum definitions are not supported, declare members as `symbol: code` pairs",
        ));
    }
    if !input.peek(token::Brace) {
        return Err(input.error("expected a `{ symbol: code, .. }` mapping"));
    }
    let content;
    let brace = braced!(content in input);
    let parsed: Punctuated<MemberAst, Token![,]> =
        content.parse_terminated(MemberAst::parse, Token![,])?;
    Ok((brace.span.join(), parsed.into_iter().collect()))
}

impl Parse for Sections {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut sections = Sections::default();
        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![:]>()?;
            match key.to_string().as_str() {
                "record" => set(&mut sections.record, &key, input.parse()?)?,
                "column" => set(&mut sections.column, &key, input.parse()?)?,
                "variants" => set(&mut sections.variants, &key, input.parse()?)?,
                "alt" => set(&mut sections.alt, &key, input.parse()?)?,
                "prefix" => set(&mut sections.prefix, &key, on_off(input)?)?,
                "suffix" => set(&mut sections.suffix, &key, on_off(input)?)?,
                "nullable" => set(&mut sections.nullable, &key, on_off(input)?)?,
                "members" => set(&mut sections.members, &key, members_mapping(input)?)?,
                _ => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!(
                            "unknown section `{key}`, expected one of `record`, `column`, \
                             `members`, `variants`, `alt`, `prefix`, `suffix`, `nullable`"
                        ),
                    ))
                }
            }
            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(sections)
    }
}

fn extract_syn<T>(
    tks: TokenStream,
    f: impl Fn(TokenStream) -> syn::Result<T>,
) -> Result<T, LinkedList<Diagnostic>> {
    f(tks).map_err(|errs| {
        errs.into_iter()
            .map(|err| Diagnostic::spanned(err.span(), Level::Error, err.to_string()))
            .collect()
    })
}

fn analyse(sections: Sections) -> Result<Binding, LinkedList<Diagnostic>> {
    let Sections {
        record,
        column,
        variants,
        alt,
        prefix,
        suffix,
        nullable,
        members,
    } = sections;
    let mut errors = LinkedList::new();

    fn missing(errors: &mut LinkedList<Diagnostic>, msg: &str) {
        errors.push_back(Diagnostic::spanned(
            Span::call_site(),
            Level::Error,
            msg.to_owned(),
        ));
    }
    if record.is_none() {
        missing(&mut errors, "no record type specified");
    }
    if column.is_none() {
        missing(&mut errors, "no column specified");
    }
    match &members {
        None => missing(&mut errors, "no members mapping specified"),
        Some((span, list)) if list.is_empty() => {
            errors.push_back(Diagnostic::spanned(
                *span,
                Level::Error,
                "the members mapping must not be empty".to_owned(),
            ));
        }
        Some(_) => (),
    }
    if prefix.unwrap_or(false) && suffix.unwrap_or(false) {
        errors.push_back(Diagnostic::spanned(
            Span::call_site(),
            Level::Error,
            "`prefix` and `suffix` cannot both be enabled".to_owned(),
        ));
    }

    let mut seen_symbols: HashSet<Ident> = HashSet::new();
    let mut seen_codes: HashMap<i64, Ident> = HashMap::new();
    let mut member_defs = Vec::new();
    for MemberAst {
        symbol,
        negative,
        code,
        label,
    } in members.map(|(_, list)| list).unwrap_or_default()
    {
        if let Some(prev) = seen_symbols.get(&symbol) {
            errors.push_back(
                Diagnostic::spanned(
                    symbol.span(),
                    Level::Error,
                    format!("member `{symbol}` is declared twice"),
                )
                .span_help(prev.span(), "Originally declared here".to_owned()),
            );
            continue;
        }
        seen_symbols.insert(symbol.clone());

        let code = match code.base10_parse::<i64>() {
            Ok(code) if negative => -code,
            Ok(code) => code,
            Err(err) => {
                errors.push_back(Diagnostic::spanned(
                    code.span(),
                    Level::Error,
                    format!("enum codes must be integers fitting in i64: {err}"),
                ));
                continue;
            }
        };
        if let Some(prev) = seen_codes.get(&code) {
            errors.push_back(
                Diagnostic::spanned(
                    symbol.span(),
                    Level::Error,
                    format!("code {code} is already used by member `{prev}`"),
                )
                .span_help(prev.span(), "Originally declared here".to_owned()),
            );
            continue;
        }
        seen_codes.insert(code, symbol.clone());

        member_defs.push(MemberDef {
            symbol,
            code,
            label: label.map(|lit| lit.value()),
        });
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Unwraps guarded by the checks above.
    let record = record.unwrap();
    let column = column.unwrap();
    let variants = variants.unwrap_or_else(|| {
        let record_name = &record
            .segments
            .last()
            .expect("paths always have at least one segment")
            .ident;
        CodeNamer::placard().type_variants(record_name, &column)
    });

    Ok(Binding {
        record,
        column,
        variants,
        members: member_defs,
        opts: Opts {
            alt: alt.map_or_else(|| DEFAULT_ALT.to_owned(), |ident| ident.to_string()),
            prefix: prefix.unwrap_or(false),
            suffix: suffix.unwrap_or(false),
            nullable: nullable.unwrap_or(false),
        },
    })
}

pub fn labelled(input: TokenStream) -> Result<Binding, LinkedList<Diagnostic>> {
    if input.is_empty() {
        return Err(LinkedList::from([Diagnostic::spanned(
            Span::call_site(),
            Level::Error,
            "no column specified".to_owned(),
        )]));
    }
    analyse(extract_syn(input, parse2::<Sections>)?)
}
