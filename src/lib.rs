//! # Run-length image tool
#![warn(missing_docs)]

pub mod cli;
