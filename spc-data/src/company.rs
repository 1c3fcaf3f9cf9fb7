use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five companies present in the price dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Company {
    Apple,
    Microsoft,
    Amazon,
    Google,
    Meta,
}

/// Error returned when a string does not name a known company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCompanyError(pub String);

impl fmt::Display for ParseCompanyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown company: {}", self.0)
    }
}

impl std::error::Error for ParseCompanyError {}

impl Company {
    /// All companies, in the order the radio controls list them.
    pub const ALL: [Company; 5] = [
        Company::Apple,
        Company::Microsoft,
        Company::Amazon,
        Company::Google,
        Company::Meta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Company::Apple => "Apple",
            Company::Microsoft => "Microsoft",
            Company::Amazon => "Amazon",
            Company::Google => "Google",
            Company::Meta => "Meta",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Company {
    type Err = ParseCompanyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Company::ALL
            .iter()
            .find(|company| company.as_str() == s)
            .copied()
            .ok_or_else(|| ParseCompanyError(s.to_string()))
    }
}
