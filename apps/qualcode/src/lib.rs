//! # Qualcode
//!
//! Library half of the qualcode binary: CLI definitions, the terminal
//! presenter and the interactive explore session. Exposed so the
//! integration tests can drive them without spawning a process.

pub mod cli;
pub mod explore;
pub mod present;
