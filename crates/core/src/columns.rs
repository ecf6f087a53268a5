//! Reserved bookkeeping columns
//!
//! Every generated model carries an integer primary key plus creation and
//! update timestamps. The migration runner manages these columns itself, so
//! the same set is consulted in two places: the model assembler (to inject
//! the attributes and to reject user overrides) and the schema renderer (to
//! skip the columns in `create_table`).

/// Column names managed by the migration runner, in declaration order.
pub const RESERVED_COLUMNS: [&str; 3] = ["id", "created_at", "updated_at"];

/// Check whether a column name is one of the reserved bookkeeping columns.
pub fn is_reserved_column(name: &str) -> bool {
    RESERVED_COLUMNS.contains(&name)
}
