//! Runtime errors for the Duet VM.
//!
//! Unknown registers and out-of-range jumps are not errors; the only thing
//! that can go wrong while executing is arithmetic.

use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// `mod X Y` with Y resolving to zero.
    #[error("modulo by zero at instruction {at}")]
    ModuloByZero { at: usize },
}

/// Errors from a two-instance run, tagged with the failing instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuetError {
    /// One instance stopped with a runtime error.
    #[error("program {id}: {source}")]
    Instance {
        id: u8,
        #[source]
        source: RuntimeError,
    },

    /// The thread running an instance panicked.
    #[error("program {id} panicked")]
    Panicked { id: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::ModuloByZero { at: 5 }.to_string(),
            "modulo by zero at instruction 5"
        );
        assert_eq!(
            DuetError::Instance {
                id: 1,
                source: RuntimeError::ModuloByZero { at: 2 }
            }
            .to_string(),
            "program 1: modulo by zero at instruction 2"
        );
        assert_eq!(DuetError::Panicked { id: 0 }.to_string(), "program 0 panicked");
    }
}
