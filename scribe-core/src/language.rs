//! Target language types for code generation.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

/// Languages a template can be compiled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// C# (`.cshtml` templates)
    #[serde(alias = "cs")]
    CSharp,
    /// Visual Basic (`.vbhtml` templates)
    #[serde(alias = "vb")]
    VisualBasic,
}

impl TargetLanguage {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "csharp",
            TargetLanguage::VisualBasic => "visualbasic",
        }
    }

    /// Extension (without dot) of the generated source file.
    pub fn source_extension(&self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "cs",
            TargetLanguage::VisualBasic => "vb",
        }
    }

    /// Derive the language from a template file name (`.cshtml` / `.vbhtml`).
    pub fn from_template_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "cshtml" => Some(TargetLanguage::CSharp),
            "vbhtml" => Some(TargetLanguage::VisualBasic),
            _ => None,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(TargetLanguage::CSharp),
            "visualbasic" | "vb" => Ok(TargetLanguage::VisualBasic),
            _ => Err(format!(
                "unknown language '{}', expected 'csharp' or 'vb'",
                s
            )),
        }
    }
}
