//! Typed request variants for the command surface
//!
//! The dispatcher parses a line of text into one of these variants
//! before anything reaches the handlers. Column names stay raw strings
//! here: resolving them against the schema is a handler responsibility,
//! because the valid-column listing on failure is part of the handler's
//! user-visible contract.

/// One command from a remote caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// List every account whose rank matches the query.
    SearchRank { rank: String },

    /// Look up an account by name and report its rank.
    ShowRank { name: String },

    /// Overwrite one cell of the first row whose name matches.
    UpdateByName {
        name: String,
        column: String,
        value: String,
    },

    /// Overwrite one cell addressed directly by row number.
    UpdateCell {
        row: u32,
        column: String,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_clone_and_eq() {
        let req = Request::UpdateByName {
            name: "adi4386".to_string(),
            column: "rank".to_string(),
            value: "ascendant 3".to_string(),
        };
        assert_eq!(req.clone(), req);
    }
}
