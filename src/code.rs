use std::fmt;

use serde::{Deserialize, Serialize};

/// Barcode symbology reported by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CodeType {
    Pdf417,
    Code39,
    Code128,
    Qr,
    Unknown,

    /// Any other symbology, kept verbatim.
    Other(String),
}

impl CodeType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pdf417 => "pdf-417",
            Self::Code39 => "code-39",
            Self::Code128 => "code-128",
            Self::Qr => "qr",
            Self::Unknown => "unknown",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for CodeType {
    fn from(value: &str) -> Self {
        match value {
            "pdf-417" => Self::Pdf417,
            "code-39" => Self::Code39,
            "code-128" => Self::Code128,
            "qr" => Self::Qr,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for CodeType {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Other(_) => Self::Other(value),
            known => known,
        }
    }
}

impl From<CodeType> for String {
    fn from(value: CodeType) -> Self {
        match value {
            CodeType::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Code produced by a single scan event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScannableCode {
    #[serde(rename = "type")]
    pub code_type: CodeType,

    /// Raw decoded text payload.
    #[serde(default)]
    pub value: String,
}

impl ScannableCode {
    pub fn new(code_type: impl Into<CodeType>, value: impl Into<String>) -> Self {
        Self {
            code_type: code_type.into(),
            value: value.into(),
        }
    }

    pub fn pdf_417(value: impl Into<String>) -> Self {
        Self::new(CodeType::Pdf417, value)
    }
}
