//! External source formatter
//!
//! Runs `gofmt -w` on a generated file. Formatting is best-effort: the
//! orchestrator logs a failure and keeps the unformatted file rather than
//! aborting the scaffold.

use modelsmith_core::{ScaffoldError, ScaffoldResult};
use std::path::Path;
use std::process::Command;

/// Format a generated Go source file in place with `gofmt -w`.
pub fn gofmt(path: &Path) -> ScaffoldResult<()> {
    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    let output = Command::new("gofmt")
        .arg("-w")
        .arg(&path)
        .output()
        .map_err(|e| ScaffoldError::format(e.to_string()))?;

    if !output.status.success() {
        return Err(ScaffoldError::format(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gofmt_on_missing_file_fails() {
        // Fails whether gofmt is installed (nonzero exit) or not (spawn error).
        let err = gofmt(Path::new("definitely/not/here.go")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Format { .. }));
    }
}
