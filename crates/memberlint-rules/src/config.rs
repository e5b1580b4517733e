//! Option resolution for the member-access rule
//!
//! Maps the recognized option tokens into an immutable boolean
//! configuration. `no-public` implies checking every member kind, so
//! combining it with `check-accessor` or `check-constructor` is a misuse:
//! the resolver reports it explicitly instead of merging the flags, and
//! the rule then produces no diagnostics for that run.

use thiserror::Error;

/// Option token: forbid explicit `public` declarations
pub const OPTION_NO_PUBLIC: &str = "no-public";
/// Option token: also check get/set accessors
pub const OPTION_CHECK_ACCESSOR: &str = "check-accessor";
/// Option token: also check constructors
pub const OPTION_CHECK_CONSTRUCTOR: &str = "check-constructor";

/// Error produced while resolving rule options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An option token outside the recognized set was supplied
    #[error("unrecognized option '{0}' for rule 'member-access'")]
    UnrecognizedOption(String),
}

/// Resolved rule configuration, immutable for the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Forbid explicit `public` instead of requiring explicit modifiers
    pub no_public: bool,
    /// Check get/set accessors
    pub check_accessor: bool,
    /// Check constructors
    pub check_constructor: bool,
}

/// Outcome of option resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A usable configuration
    Active(Config),
    /// `no-public` was combined with another check token; the rule must
    /// warn once and produce no diagnostics
    Misused,
}

/// Resolve option tokens into a configuration.
///
/// Unrecognized tokens fail fast before any analysis. Duplicate tokens are
/// presence-based: supplying a token twice equals supplying it once.
pub fn resolve(options: &[&str]) -> Result<Resolution, ConfigError> {
    for option in options {
        if !matches!(
            *option,
            OPTION_NO_PUBLIC | OPTION_CHECK_ACCESSOR | OPTION_CHECK_CONSTRUCTOR
        ) {
            return Err(ConfigError::UnrecognizedOption((*option).to_string()));
        }
    }

    let no_public = options.contains(&OPTION_NO_PUBLIC);
    let check_accessor = options.contains(&OPTION_CHECK_ACCESSOR);
    let check_constructor = options.contains(&OPTION_CHECK_CONSTRUCTOR);

    if no_public && (check_accessor || check_constructor) {
        return Ok(Resolution::Misused);
    }

    Ok(Resolution::Active(Config {
        no_public,
        // Forbidding `public` applies uniformly to every member kind.
        check_accessor: check_accessor || no_public,
        check_constructor: check_constructor || no_public,
    }))
}
