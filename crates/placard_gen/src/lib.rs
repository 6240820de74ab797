#![doc = include_str!("../README.md")]

pub mod binding;
pub mod generate;
pub mod macros;
pub mod members;
pub mod namer;
pub mod options;
pub mod tokens;
