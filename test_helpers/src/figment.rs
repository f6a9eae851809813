//! Shared helpers for working with `figment::Jail` in tests.
//!
//! Configuration loading reads process environment variables. Running those
//! reads inside a jail serialises access and restores the environment
//! afterwards.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when it returns an
/// error. Failures become `anyhow::Error` values so callers can use `?`.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or the closure returns a
/// [`figment::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}
