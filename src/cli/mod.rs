//! CLI Interface: query input and result rendering
//!
//! # Components
//! - `input.rs`: digit sequences from arguments or stdin
//! - `display.rs`: text and JSON rendering of decode results

pub mod display;
pub mod input;
