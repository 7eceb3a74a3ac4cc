//! The tools module provides helper functions for the codec.
//!
//! The tools are:
//! - cli: Command line interface.
//! - convert_base: Integer to bit sequence conversion, plain and fixed width.
//!
pub mod cli;
pub mod convert_base;
