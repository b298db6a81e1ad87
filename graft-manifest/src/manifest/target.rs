//! Output targets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// C++ header with accessor methods
    #[default]
    Cpp,
    /// JSON structure descriptor
    Json,
}

impl Target {
    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Cpp => "cpp",
            Target::Json => "json",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpp" | "c++" | "cxx" => Ok(Target::Cpp),
            "json" => Ok(Target::Json),
            _ => Err(format!("unknown target '{}', expected 'cpp' or 'json'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Target::from_str("cpp").unwrap(), Target::Cpp);
        assert_eq!(Target::from_str("C++").unwrap(), Target::Cpp);
        assert_eq!(Target::from_str("JSON").unwrap(), Target::Json);
        assert!(Target::from_str("python").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Target::Cpp.to_string(), "cpp");
        assert_eq!(Target::Json.to_string(), "json");
    }

    #[test]
    fn test_deserialize() {
        let json: Target = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(json, Target::Json);
        assert_eq!(Target::default(), Target::Cpp);
    }
}
