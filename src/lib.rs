//! Discovery and selection of files kept in per-repository stash directories.
//!
//! The pipeline runs one way: a [`source::RepoSource`] yields repository roots,
//! the [`scan`] module walks each root's stash directory concurrently, [`rank`]
//! orders the merged candidates by recency, and [`select`] lets the user narrow
//! them down interactively. [`finder`] wires the stages together.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod finder;
pub mod rank;
pub mod scan;
pub mod select;
pub mod source;
pub mod stash;
pub mod utils;
