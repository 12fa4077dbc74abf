//! # classfinder
//!
//! Finds which Java archive (or loose `.class` file) under a directory tree
//! contains a class, without extracting anything.
//!
//! ## Architecture
//!
//! - **cli**: Command line definition
//! - **config**: Validated `SearchRequest` built from the command line
//! - **scan**: Discovery of archive and class file candidates
//! - **term**: Search term normalisation and containment matching
//! - **probe**: Archive entry-name listing over the zip central directory
//! - **search**: Lazy scanner yielding match records, with a progress side channel
//! - **report**: Text and JSON rendering of results

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod scan;
pub mod search;
pub mod term;
