//! Fixed account column schema
//!
//! The schema is immutable for the process lifetime: eight named columns,
//! each bound to a unique, contiguous 1-based ordinal. Every handler
//! resolves caller-supplied column names through [`Column::resolve`] before
//! touching the table.

/// Number of columns in the account schema.
pub const COLUMN_COUNT: usize = 8;

/// One column of the account schema.
///
/// Variant order is ordinal order; [`Column::ordinal`] is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Tag,
    Rank,
    Username,
    Password,
    VerificationFlag,
    Email,
    Sellable,
}

impl Column {
    /// All columns in ordinal order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Name,
        Column::Tag,
        Column::Rank,
        Column::Username,
        Column::Password,
        Column::VerificationFlag,
        Column::Email,
        Column::Sellable,
    ];

    /// Canonical column name as it appears in the table header.
    pub fn name(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Tag => "tag",
            Column::Rank => "rank",
            Column::Username => "username",
            Column::Password => "password",
            Column::VerificationFlag => "verification-flag",
            Column::Email => "email",
            Column::Sellable => "sellable",
        }
    }

    /// 1-based ordinal position of this column.
    pub fn ordinal(self) -> usize {
        match self {
            Column::Name => 1,
            Column::Tag => 2,
            Column::Rank => 3,
            Column::Username => 4,
            Column::Password => 5,
            Column::VerificationFlag => 6,
            Column::Email => 7,
            Column::Sellable => 8,
        }
    }

    /// 0-based cell index within a record.
    pub fn index(self) -> usize {
        self.ordinal() - 1
    }

    /// Resolve a caller-supplied column name, ignoring case.
    ///
    /// Returns `None` for unknown names; handlers turn that into a
    /// response listing [`Column::valid_names`].
    pub fn resolve(name: &str) -> Option<Column> {
        Column::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Comma-separated list of all valid column names, in ordinal order.
    pub fn valid_names() -> String {
        Column::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The header row: all column names in ordinal order.
    pub fn header() -> Vec<String> {
        Column::ALL.iter().map(|c| c.name().to_string()).collect()
    }
}
