//! # tasks
//!
//! Build-and-run task orchestrator for the hyoga project: wraps the native
//! `make` build, launches the produced executable, and formats sources.

pub mod build;
pub mod cli;
pub mod error;
pub mod format;
pub mod project;
pub mod report;
pub mod run;
