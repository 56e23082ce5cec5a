//! Property-test run profile with environment overrides.
//!
//! Suites build a [`ProptestRunProfile`] from their own defaults and let CI
//! or a developer raise the case count, enable forking, or change how often
//! repeatability properties rerun an algorithm. Invalid overrides are logged
//! and ignored so a typo never silently disables a suite.

use std::{env, num::ParseIntError};

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const ARBOR_PBT_FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";
/// Environment variable controlling repeat counts in repeatability properties.
pub const ARBOR_PBT_REPEATS_ENV_KEY: &str = "ARBOR_PBT_REPEATS";

const DEFAULT_REPEATS: u32 = 3;

/// Reasons an override value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    /// The value was not an unsigned integer.
    #[error("not an unsigned integer: {source}")]
    Integer {
        /// Parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The value was zero where a positive count is required.
    #[error("count must be greater than zero")]
    Zero,
    /// The value was not a recognised switch.
    #[error("`{raw}` is not one of true/false/1/0/yes/no/on/off")]
    Switch {
        /// Normalised input.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    repeats: u32,
}

impl ProptestRunProfile {
    /// Profile with `cases` cases per property, no forking and three repeats.
    /// A zero case count is raised to one.
    #[must_use]
    pub const fn new(cases: u32) -> Self {
        Self {
            cases: if cases == 0 { 1 } else { cases },
            fork: false,
            repeats: DEFAULT_REPEATS,
        }
    }

    /// Sets the default forking behaviour.
    #[must_use]
    pub const fn with_fork(mut self, fork: bool) -> Self {
        self.fork = fork;
        self
    }

    /// Loads a profile from the process environment on top of the given
    /// defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.repeats() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::new(default_cases)
            .with_fork(default_fork)
            .with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides read through `lookup`, keyed by the `*_ENV_KEY`
    /// constants of this module.
    #[must_use]
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cases: override_or(&lookup, PROGTEST_CASES_ENV_KEY, self.cases, parse_count),
            fork: override_or(&lookup, ARBOR_PBT_FORK_ENV_KEY, self.fork, parse_switch),
            repeats: override_or(&lookup, ARBOR_PBT_REPEATS_ENV_KEY, self.repeats, parse_count),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// How many times repeatability properties rerun each algorithm.
    #[must_use]
    pub const fn repeats(&self) -> u32 {
        self.repeats
    }
}

fn override_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %error,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_count(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::Zero),
        Ok(count) => Ok(count),
        Err(source) => Err(OverrideError::Integer { source }),
    }
}

fn parse_switch(raw: &str) -> Result<bool, OverrideError> {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::Switch { raw: normalized }),
    }
}
