//! The tools module provides helper functions for the HEF codec.
//!
//! The tools are:
//! - cli: Command line interface and file handling for the hefzip binary.
//! - freq_count: Frequency count of the input symbols.
//!
pub mod cli;
pub mod freq_count;
