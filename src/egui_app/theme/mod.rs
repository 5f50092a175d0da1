//! DEK RAI theme: color palette and frame helpers.

pub mod colors;
pub mod styles;
