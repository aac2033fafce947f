//! A small interactive command interpreter.
//!
//! Lines are read from a terminal or a stream, split on whitespace and either
//! handled by a builtin (`cd`, `help`, `exit`) or run as an external program.

pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod input;
pub mod process;
