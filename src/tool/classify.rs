//! Boundary adapter for the tool's textual success/failure convention.

use crate::error::{Error, Result};

/// Contract with the external tool: output beginning with this exact prefix
/// is a failure. Must be preserved for compatibility.
const ERROR_PREFIX: &str = "Error:";

/// Any captured output starting with `Error:` is a failure carrying that
/// text; everything else, including empty output, is success content.
pub fn classify_output(output: String) -> Result<String> {
    if output.starts_with(ERROR_PREFIX) {
        return Err(Error::Tool(output));
    }
    Ok(output)
}
