#![doc = include_str!("../README.md")]

pub mod lookup;
pub mod member;

pub use member::{Labelled, Member};

pub mod gen {
    pub use placard_gen::*;
}

pub mod macros {
    pub use placard_macro::*;
}
