//! Grammar productions for the Tarn language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`,
//! one routine per production. Routines push their rule onto the live
//! context on entry and pop on exit; on a mismatch they hand control to the
//! recovery engine and continue per the returned action.

mod expressions;
mod items;
mod statements;
