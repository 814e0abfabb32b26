//! File probing via mkvinfo.
//!
//! The probe pipeline runs in strict sequence per call: invoke mkvinfo,
//! parse its indentation-formatted dump into a section tree, then classify
//! the tree into audio/subtitle stream descriptors. Trees are ephemeral -
//! built once per invocation, consumed, and discarded.

pub mod parser;
mod runner;
pub mod tracks;
mod types;

pub use runner::{probe_file, run_probe_tool};
pub use types::{Entry, ProbeError, ProbeResult, Section};
