//! Migration file persistence
//!
//! Writes a rendered fizz pair to the migrations directory as
//! `<UTC timestamp>_<slug>.up.fizz` / `.down.fizz`, so the migration runner
//! applies files in creation order.

use chrono::Utc;
use modelsmith_core::{ScaffoldError, ScaffoldResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp layout used in migration file names (UTC).
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

// ============================================================================
// MigrationPair
// ============================================================================

/// Paths of a written up/down migration pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPair {
    /// Path of the `create_table` migration
    pub up: PathBuf,

    /// Path of the `drop_table` migration
    pub down: PathBuf,
}

/// Migration slug for a model's create-table pair.
pub fn create_slug(table: &str) -> String {
    format!("create_{}", table)
}

/// Write an up/down fizz migration pair under `dir`, creating the directory
/// if needed.
pub fn write_migration_pair(
    dir: &Path,
    slug: &str,
    up: &str,
    down: &str,
) -> ScaffoldResult<MigrationPair> {
    fs::create_dir_all(dir).map_err(|e| ScaffoldError::DirectoryCreate {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let stamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    let pair = MigrationPair {
        up: dir.join(format!("{}_{}.up.fizz", stamp, slug)),
        down: dir.join(format!("{}_{}.down.fizz", stamp, slug)),
    };

    fs::write(&pair.up, up).map_err(|e| ScaffoldError::MigrationWrite {
        path: pair.up.clone(),
        message: e.to_string(),
    })?;
    fs::write(&pair.down, down).map_err(|e| ScaffoldError::MigrationWrite {
        path: pair.down.clone(),
        message: e.to_string(),
    })?;

    Ok(pair)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_slug() {
        assert_eq!(create_slug("widgets"), "create_widgets");
    }

    #[test]
    fn test_write_migration_pair() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("migrations");

        let pair = write_migration_pair(
            &target,
            "create_widgets",
            "create_table(\"widgets\", func(t) {\n})",
            "drop_table(\"widgets\")",
        )
        .unwrap();

        let up_name = pair.up.file_name().unwrap().to_string_lossy().to_string();
        let down_name = pair.down.file_name().unwrap().to_string_lossy().to_string();
        assert!(up_name.ends_with("_create_widgets.up.fizz"));
        assert!(down_name.ends_with("_create_widgets.down.fizz"));
        // Same stamp on both halves of the pair.
        assert_eq!(up_name[..14], down_name[..14]);

        assert!(fs::read_to_string(&pair.up).unwrap().starts_with("create_table"));
        assert_eq!(fs::read_to_string(&pair.down).unwrap(), "drop_table(\"widgets\")");
    }

    #[test]
    fn test_write_creates_the_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("deeply").join("nested");

        write_migration_pair(&target, "create_posts", "up", "down").unwrap();
        assert!(target.is_dir());
    }
}
