//! Inbound configuration operator accessor for CLI handlers.

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::port::inbound::config::ConfigurationOperator;

static OPERATOR: OnceLock<Box<dyn ConfigurationOperator>> = OnceLock::new();

/// Installs the operator implementation used by the `config` handlers.
pub fn install(
    operator: Box<dyn ConfigurationOperator>,
) -> std::result::Result<(), Box<dyn ConfigurationOperator>> {
    OPERATOR.set(operator)
}

/// Returns the installed configuration operator.
///
/// # Errors
///
/// Returns [`Error::Connection`] when `install` was never called.
pub fn operator() -> Result<&'static dyn ConfigurationOperator> {
    OPERATOR
        .get()
        .map(AsRef::as_ref)
        .ok_or_else(|| Error::Connection("CLI operator not installed".into()))
}
