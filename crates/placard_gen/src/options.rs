//! Options passed alongside the member mapping.

/// Accessor family name used when no `alt:` is given.
pub const DEFAULT_ALT: &str = "alt_name";

/// Options forwarded to the generated enum layer.
///
/// `prefix`/`suffix` control predicate naming, `nullable` marks the record
/// field as `Option<_>`, and `alt` names the label accessor family.
pub struct Opts {
    pub alt: String,
    pub prefix: bool,
    pub suffix: bool,
    pub nullable: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            alt: DEFAULT_ALT.to_owned(),
            prefix: false,
            suffix: false,
            nullable: false,
        }
    }
}
