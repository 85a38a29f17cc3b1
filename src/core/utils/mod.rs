//! Macro utilities. Declared first in `core` so the macros are visible to
//! every module that follows.

#[macro_use]
pub mod log;
#[macro_use]
pub mod safety;
