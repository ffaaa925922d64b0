//! Handler identifier value object
//!
//! Names the exported function the function runtime invokes, in the
//! `<module>.<function>` form (`index.handler`, `handlers/api.main`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PackError;

/// Validated `<module>.<function>` handler identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId {
    module: String,
    function: String,
}

impl HandlerId {
    pub const DEFAULT: &'static str = "index.handler";

    /// Parse a handler identifier.
    ///
    /// The function name is the text after the last `.`; everything before
    /// it is the module path.
    pub fn parse(value: &str) -> Result<Self, PackError> {
        let invalid = |reason: &str| PackError::InvalidHandler {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if value.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }

        let (module, function) = value
            .rsplit_once('.')
            .ok_or_else(|| invalid("expected <module>.<function>"))?;

        if module.is_empty() {
            return Err(invalid("module part is empty"));
        }
        if function.is_empty() {
            return Err(invalid("function part is empty"));
        }
        if module.starts_with('/') || module.split('/').any(|seg| seg == "..") {
            return Err(invalid("module must be a relative path inside the bundle"));
        }
        if !function
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        {
            return Err(invalid("function must be a plain identifier"));
        }

        Ok(Self {
            module: module.to_string(),
            function: function.to_string(),
        })
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

impl Default for HandlerId {
    fn default() -> Self {
        Self {
            module: "index".to_string(),
            function: "handler".to_string(),
        }
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.function)
    }
}

impl FromStr for HandlerId {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HandlerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HandlerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
