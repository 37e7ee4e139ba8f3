//! Stash directory scanning across repositories
//!
//! Each repository is walked by an independent task. Results stay local to
//! their task and are merged only after every task has finished.

pub mod scanner;

pub use scanner::StashScanner;
