//! The member table behind every labelled column.

/// One declared member of a labelled enum column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub symbol: &'static str,
    pub code: i64,
    pub label: &'static str,
}

/// Implemented by generated column enums: the stored-enum seam providing
/// symbol/code coercion and the full member table.
pub trait Labelled: Copy + Sized + 'static {
    /// Every declared member, in declaration order.
    const MEMBERS: &'static [Member];

    fn symbol(&self) -> &'static str;
    fn code(&self) -> i64;
    fn from_code(code: i64) -> Option<Self>;
    fn from_symbol(symbol: &str) -> Option<Self>;

    /// The display label for this value, falling back to the symbol when no
    /// member entry matches.
    fn label(&self) -> &'static str {
        let symbol = self.symbol();
        Self::MEMBERS
            .iter()
            .find(|member| member.symbol == symbol)
            .map(|member| member.label)
            .unwrap_or(symbol)
    }
}
