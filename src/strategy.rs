//! Decoder strategies.
//!
//! A scanned code may come from several kinds of cards. Each card format is
//! handled by one [`DecoderStrategy`]; callers keep an ordered list of
//! strategies and use the first one that claims the code.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    bc::{
        types::InvalidFieldValue, BcComboCardBarcodeDecoder, BcServicesCardBarcodeDecoder,
        DecodedIdentity, DriversLicenseBarcodeDecoder,
    },
    CodeType, ScannableCode,
};

/// Decoding failure.
///
/// Always total: no partially decoded record is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported code type `{0}`")]
    UnsupportedCodeType(CodeType),

    #[error("missing start sentinel")]
    MissingStartSentinel,

    #[error("unknown jurisdiction")]
    UnknownJurisdiction,

    #[error("missing delimiter `{0}`")]
    MissingDelimiter(&'static str),

    #[error("expected 3 track 1 segments, found {0}")]
    SegmentCount(usize),

    #[error(transparent)]
    InvalidField(#[from] InvalidFieldValue),

    #[error("missing province code")]
    MissingProvince,

    #[error("invalid {0} date")]
    InvalidDate(&'static str),

    #[error("missing BCSC serial")]
    MissingBcscSerial,
}

/// Card code decoding strategy.
pub trait DecoderStrategy: Send + Sync {
    /// Cheap structural check. Never fails.
    fn can_decode(&self, code: &ScannableCode) -> bool;

    /// Decodes the given code.
    ///
    /// Does not rely on a previous call to [`Self::can_decode`].
    fn decode(&self, code: &ScannableCode) -> Result<DecodedCode, ParseError>;
}

/// Decoded card code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DecodedCode {
    DriversLicenseBarcode(DecodedIdentity),

    #[serde(rename = "BCServicesCardBarcode", rename_all = "camelCase")]
    BcServicesCardBarcode { bcsc_serial: String },

    #[serde(rename = "BCServicesComboCardCardBarcode", rename_all = "camelCase")]
    BcServicesComboCardBarcode {
        bcsc_serial: String,

        #[serde(flatten)]
        license: DecodedIdentity,
    },
}

impl DecodedCode {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DriversLicenseBarcode(_) => "DriversLicenseBarcode",
            Self::BcServicesCardBarcode { .. } => "BCServicesCardBarcode",
            Self::BcServicesComboCardBarcode { .. } => "BCServicesComboCardCardBarcode",
        }
    }

    pub fn license(&self) -> Option<&DecodedIdentity> {
        match self {
            Self::DriversLicenseBarcode(license)
            | Self::BcServicesComboCardBarcode { license, .. } => Some(license),
            Self::BcServicesCardBarcode { .. } => None,
        }
    }

    pub fn bcsc_serial(&self) -> Option<&str> {
        match self {
            Self::DriversLicenseBarcode(_) => None,
            Self::BcServicesCardBarcode { bcsc_serial }
            | Self::BcServicesComboCardBarcode { bcsc_serial, .. } => Some(bcsc_serial),
        }
    }
}

/// Returns the decoding strategies in the order they should be attempted.
///
/// Combo cards are also valid driver's licences, so the combo decoder comes
/// first. `reference_date` resolves the century of licence expiry dates,
/// `None` meaning today.
pub fn default_strategies(reference_date: Option<NaiveDate>) -> Vec<Box<dyn DecoderStrategy>> {
    vec![
        Box::new(BcComboCardBarcodeDecoder::new_with(reference_date)),
        Box::new(DriversLicenseBarcodeDecoder::new_with(reference_date)),
        Box::new(BcServicesCardBarcodeDecoder),
    ]
}

/// Decodes `code` with the first strategy that can decode it.
///
/// Returns `None` if no strategy claims the code.
pub fn decode_scanned_code(
    code: &ScannableCode,
    strategies: &[Box<dyn DecoderStrategy>],
) -> Option<Result<DecodedCode, ParseError>> {
    strategies
        .iter()
        .find(|strategy| strategy.can_decode(code))
        .map(|strategy| strategy.decode(code))
}
