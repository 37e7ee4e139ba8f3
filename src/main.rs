//! hiden: search personal memo/script directories across ghq repositories
//!
//! Every repository managed by ghq may carry a hidden stash directory. This
//! tool collects the files found in all of them, ranks them by recency and lets
//! the user pick one interactively.

use std::process::ExitCode;

use hiden::error::HidenError;

fn main() -> ExitCode {
    match hiden::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Declining to pick is not a failure worth reporting.
            if matches!(err.downcast_ref::<HidenError>(), Some(HidenError::Cancelled)) {
                return ExitCode::FAILURE;
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
