//! Declared members and the lookup tables derived from them.

use syn::Ident;

/// A single declared member: symbol, storage code, optional display label.
pub struct MemberDef {
    pub symbol: Ident,
    pub code: i64,
    pub label: Option<String>,
}

impl MemberDef {
    /// Labels default to the symbol's own string form.
    pub fn label_or_symbol(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.symbol.to_string())
    }
}

/// The three tables derived from one member list, in declaration order.
///
/// Built once per binding and never mutated afterwards: `for_enum` drives
/// the generated enum, `for_display` the symbol → label lookup, and
/// `for_filter` the label → code reverse lookup.
pub struct DerivedTables {
    pub for_enum: Vec<(String, i64)>,
    pub for_display: Vec<(String, String)>,
    pub for_filter: Vec<(String, i64)>,
}

pub fn split(members: &[MemberDef]) -> DerivedTables {
    let mut for_enum = Vec::with_capacity(members.len());
    let mut for_display = Vec::with_capacity(members.len());
    let mut for_filter: Vec<(String, i64)> = Vec::with_capacity(members.len());

    for member in members {
        let symbol = member.symbol.to_string();
        let label = member.label_or_symbol();
        for_enum.push((symbol.clone(), member.code));
        for_display.push((symbol, label.clone()));
        // Members sharing a label overwrite: the later declaration wins.
        match for_filter.iter_mut().find(|(prev, _)| *prev == label) {
            Some((_, code)) => *code = member.code,
            None => for_filter.push((label, member.code)),
        }
    }

    DerivedTables {
        for_enum,
        for_display,
        for_filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    fn member(symbol: &str, code: i64, label: Option<&str>) -> MemberDef {
        MemberDef {
            symbol: Ident::new(symbol, Span::call_site()),
            code,
            label: label.map(str::to_owned),
        }
    }

    #[test]
    fn codes_keep_the_declared_key_set() {
        let tables = split(&[
            member("active", 0, Some("LIVE")),
            member("inactive", 1, None),
        ]);
        assert_eq!(
            tables.for_enum,
            vec![("active".to_owned(), 0), ("inactive".to_owned(), 1)]
        );
    }

    #[test]
    fn labels_default_to_the_symbol() {
        let tables = split(&[member("active", 0, None), member("po_check", 40, None)]);
        assert_eq!(
            tables.for_display,
            vec![
                ("active".to_owned(), "active".to_owned()),
                ("po_check".to_owned(), "po_check".to_owned()),
            ]
        );
    }

    #[test]
    fn explicit_labels_are_kept() {
        let tables = split(&[
            member("active", 0, Some("LIVE")),
            member("inactive", 1, Some("NOT_LIVE")),
        ]);
        assert_eq!(
            tables.for_display,
            vec![
                ("active".to_owned(), "LIVE".to_owned()),
                ("inactive".to_owned(), "NOT_LIVE".to_owned()),
            ]
        );
        assert_eq!(
            tables.for_filter,
            vec![("LIVE".to_owned(), 0), ("NOT_LIVE".to_owned(), 1)]
        );
    }

    #[test]
    fn shared_labels_keep_the_later_code() {
        let tables = split(&[
            member("card", 0, Some("Prepaid")),
            member("voucher", 1, Some("Prepaid")),
            member("invoice", 2, None),
        ]);
        assert_eq!(
            tables.for_filter,
            vec![("Prepaid".to_owned(), 1), ("invoice".to_owned(), 2)]
        );
        // The display table still lists both symbols.
        assert_eq!(tables.for_display.len(), 3);
    }
}
