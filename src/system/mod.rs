//! # Shell Output Layer
//!
//! The binary cannot change its parent shell's working directory or export
//! variables into it, so every effect is expressed as text: a stream of
//! POSIX-shell statements on stdout that a thin wrapper function `eval`s.
//! This module owns that protocol. Nothing else in the crate writes to
//! stdout (the one exception is the `completion` handler, whose stdout is
//! itself an eval-able script).

pub mod emitter;
