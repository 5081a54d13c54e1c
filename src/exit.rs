// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Report written successfully.
    Success = 0,
    /// Generic error (e.g. IO, missing document, allocation).
    Error = 1,
    /// Parameters or configuration failed validation.
    InvalidInput = 2,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    ///
    /// Validation failures anywhere in the chain map to `InvalidInput`,
    /// everything else is a generic `Error`.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        let invalid = err.chain().any(|cause| {
            matches!(
                cause.downcast_ref::<RankError>(),
                Some(RankError::InvalidParameter { .. } | RankError::Config(_))
            )
        });
        if invalid {
            Self::InvalidInput
        } else {
            Self::Error
        }
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
