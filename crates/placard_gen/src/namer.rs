//! Single owner of every identifier appearing in generated code.

use quote::quote;
use syn::{Ident, Path};

use crate::tokens::Checked;

pub struct CodeNamer {
    pub placard_path: Checked<Path>,
}

impl CodeNamer {
    /// Names for code expanded in crates depending on `placard`.
    pub fn placard() -> Self {
        Self {
            placard_path: quote! {placard}.into(),
        }
    }

    /// `po_check` → `PoCheck`.
    pub fn variant(&self, symbol: &Ident) -> Ident {
        Ident::new(&camel_case(&symbol.to_string()), symbol.span())
    }

    /// Default name for the generated column enum: record + column in
    /// CamelCase (`Course`/`status` → `CourseStatus`).
    pub fn type_variants(&self, record: &Ident, column: &Ident) -> Ident {
        Ident::new(
            &format!(
                "{}{}",
                camel_case(&record.to_string()),
                camel_case(&column.to_string())
            ),
            column.span(),
        )
    }

    /// Statics are keyed by (record, column): one table pair per binding.
    pub fn static_labels(&self, record: &Ident, column: &Ident) -> Ident {
        Ident::new(
            &format!(
                "{}_{}_LABELS",
                record.to_string().to_uppercase(),
                column.to_string().to_uppercase()
            ),
            column.span(),
        )
    }

    pub fn static_codes(&self, record: &Ident, column: &Ident) -> Ident {
        Ident::new(
            &format!(
                "{}_{}_CODES",
                record.to_string().to_uppercase(),
                column.to_string().to_uppercase()
            ),
            column.span(),
        )
    }

    /// Type-level display lookup: `{column}_{pluralize(alt)}`.
    pub fn fn_display_lookup(&self, column: &Ident, alt: &str) -> Ident {
        Ident::new(&format!("{column}_{}", pluralize(alt)), column.span())
    }

    /// Type-level reverse lookup, fixed name regardless of `alt`.
    pub fn fn_filter_lookup(&self, column: &Ident) -> Ident {
        Ident::new(&format!("{column}_alt_name_to_ids"), column.span())
    }

    /// Instance-level label accessor: `{column}_{alt}`.
    pub fn fn_label_accessor(&self, column: &Ident, alt: &str) -> Ident {
        Ident::new(&format!("{column}_{alt}"), column.span())
    }

    pub fn fn_predicate(
        &self,
        column: &Ident,
        symbol: &Ident,
        prefix: bool,
        suffix: bool,
    ) -> Ident {
        let name = if prefix {
            format!("{column}_{symbol}")
        } else if suffix {
            format!("{symbol}_{column}")
        } else {
            symbol.to_string()
        };
        Ident::new(&name, symbol.span())
    }
}

pub fn camel_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Simple English pluralization, sufficient for accessor family names.
pub fn pluralize(word: &str) -> String {
    let vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u');
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.chars().next_back().map(vowel).unwrap_or(true) {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return format!("{word}es");
    }
    format!("{word}s")
}
