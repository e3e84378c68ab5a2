// src/utils/mod.rs
mod clipboard;
mod format;

pub use clipboard::*;
pub use format::*;

#[cfg(test)]
pub(crate) use clipboard::testing;
