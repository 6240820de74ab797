//! Type-level lookup tables, built once and shared read-only.
//!
//! Each generated column owns one [`LabelMap`] and one [`CodeMap`] as
//! process-wide statics. The underlying hash tables are materialised on
//! first access and never mutated afterwards, so unsynchronised concurrent
//! reads are safe.

use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;

use crate::member::Member;

pub type LabelTable = FxHashMap<&'static str, &'static str>;
pub type CodeTable = FxHashMap<&'static str, i64>;

/// Symbol → display label for one column.
pub struct LabelMap {
    members: &'static [Member],
    table: OnceCell<LabelTable>,
}

impl LabelMap {
    pub const fn new(members: &'static [Member]) -> Self {
        Self {
            members,
            table: OnceCell::new(),
        }
    }

    pub fn table(&self) -> &LabelTable {
        self.table.get_or_init(|| {
            self.members
                .iter()
                .map(|member| (member.symbol, member.label))
                .collect()
        })
    }

    pub fn get(&self, symbol: &str) -> Option<&'static str> {
        self.table().get(symbol).copied()
    }
}

/// Display label → storage code for one column. Members sharing a label
/// overwrite in declaration order, so the last declared member's code is
/// kept.
pub struct CodeMap {
    members: &'static [Member],
    table: OnceCell<CodeTable>,
}

impl CodeMap {
    pub const fn new(members: &'static [Member]) -> Self {
        Self {
            members,
            table: OnceCell::new(),
        }
    }

    pub fn table(&self) -> &CodeTable {
        self.table.get_or_init(|| {
            let mut table = CodeTable::default();
            for member in self.members {
                table.insert(member.label, member.code);
            }
            table
        })
    }

    pub fn get(&self, label: &str) -> Option<i64> {
        self.table().get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static MEMBERS: &[Member] = &[
        Member {
            symbol: "card",
            code: 0,
            label: "Prepaid",
        },
        Member {
            symbol: "voucher",
            code: 1,
            label: "Prepaid",
        },
        Member {
            symbol: "invoice",
            code: 2,
            label: "invoice",
        },
    ];

    #[test]
    fn label_map_covers_every_symbol() {
        let map = LabelMap::new(MEMBERS);
        assert_eq!(map.get("card"), Some("Prepaid"));
        assert_eq!(map.get("voucher"), Some("Prepaid"));
        assert_eq!(map.get("invoice"), Some("invoice"));
        assert_eq!(map.get("unknown"), None);
        assert_eq!(map.table().len(), 3);
    }

    #[test]
    fn code_map_keeps_the_later_declaration_for_shared_labels() {
        let map = CodeMap::new(MEMBERS);
        assert_eq!(map.get("Prepaid"), Some(1));
        assert_eq!(map.get("invoice"), Some(2));
        assert_eq!(map.get("unknown"), None);
        assert_eq!(map.table().len(), 2);
    }

    #[test]
    fn tables_are_built_once() {
        let map = LabelMap::new(MEMBERS);
        let first = map.table() as *const LabelTable;
        let second = map.table() as *const LabelTable;
        assert_eq!(first, second);
    }
}
