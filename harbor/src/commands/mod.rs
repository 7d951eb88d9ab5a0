use crate::format::{Formattable, OutputFormat, format_output};
use libharbor::CallResult;

/// Project command handlers
pub mod project;

/// Repository command handlers
pub mod repo;

/// Statistics command handler
pub mod stats;

/// User command handlers
pub mod user;

/// Version command handlers
pub mod version;

/// Rendered output of a command, or every error the call reported.
pub type CommandOutput = Result<String, Vec<String>>;

/// Render a call result in the requested format.
pub fn render<T: Formattable>(result: CallResult<T>, format: OutputFormat) -> CommandOutput {
    match result.into_result() {
        Ok(value) => format_output(&value, format).map_err(|e| vec![e]),
        Err(errors) => Err(errors.into_iter().map(|e| e.to_string()).collect()),
    }
}
