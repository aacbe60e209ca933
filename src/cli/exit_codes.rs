//! Exit codes for the CLI
//!
//! Standard exit codes used by SeoLens CLI for CI/CD integration.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Every enabled rule passed |
//! | 2 | `WARNINGS` | Warnings | At least one rule produced a warning |
//! | 3 | `ERROR` | Runtime error | File not found, invalid rule file |
//! | 4 | `INVALID_ARGS` | Invalid arguments | Empty rule id |

/// Success - every enabled rule passed.
pub const SUCCESS: i32 = 0;

/// At least one warning was produced.
pub const WARNINGS: i32 = 2;

/// Runtime error (file not found, malformed configuration, evaluation fault).
pub const ERROR: i32 = 3;

/// Invalid arguments (empty or unparsable rule ids).
pub const INVALID_ARGS: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [SUCCESS, WARNINGS, ERROR, INVALID_ARGS];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(
                    codes[i], codes[j],
                    "Exit codes should be unique: {} and {} are both {}",
                    i, j, codes[i]
                );
            }
        }
    }

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(WARNINGS, 2);
        assert_eq!(ERROR, 3);
        assert_eq!(INVALID_ARGS, 4);
    }
}
