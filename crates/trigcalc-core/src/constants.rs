//! Constants shared by the backend, the loader and the front ends.

/// Taylor term count used when the user supplies none (or an invalid one).
pub const DEFAULT_TERMS: u32 = 10;

/// Number of entries in the lookup table (one per integer degree).
pub const LOOKUP_TABLE_SIZE: usize = 360;

/// Name of the built-in trigonometry module.
pub const DEFAULT_MODULE_NAME: &str = "trigonometry";

/// Entry point that prepares the module before any computation.
pub const INIT_SYMBOL: &str = "init";

/// Entry point that computes the six approximations.
pub const CALCULATE_SYMBOL: &str = "calculate_trigonometry";

/// Upper bound on the number of rows a single sweep may produce.
pub const MAX_SWEEP_ROWS: usize = 100_000;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The angle could not be parsed.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// The trigonometry module could not be loaded or resolved.
    pub const ERROR_LIBRARY: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
