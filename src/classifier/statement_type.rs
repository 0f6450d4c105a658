use serde::{Deserialize, Serialize};
use std::fmt;

/// How a generated binding runs a statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementType {
    /// Returns a row set (SELECT-family, or DML with RETURNING).
    Fetch,
    /// Performs an effect without returning rows.
    #[default]
    Execute,
}

impl StatementType {
    /// True for [`StatementType::Fetch`].
    pub fn is_fetch(self) -> bool {
        self == StatementType::Fetch
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementType::Fetch => write!(f, "fetch"),
            StatementType::Execute => write!(f, "execute"),
        }
    }
}

impl std::str::FromStr for StatementType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fetch" => Ok(StatementType::Fetch),
            "execute" => Ok(StatementType::Execute),
            _ => Err(format!("Invalid statement type: {s}")),
        }
    }
}
