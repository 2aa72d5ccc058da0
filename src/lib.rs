//! This library decodes the barcodes of British Columbia identity cards
//! (driver's licences, BC Services Cards and combo cards) into structured
//! identity fields, and builds the barcode evidence payload submitted during
//! identity verification.
//!
//! Each card format is a [`DecoderStrategy`]. [`default_strategies`] lists
//! them in the order they should be attempted and [`decode_scanned_code`]
//! picks the first one claiming a scanned code.
pub mod bc;
pub mod code;
pub mod evidence;
pub mod scan;
pub mod strategy;

pub use bc::{
    types::InvalidFieldValue, BcComboCardBarcodeDecoder, BcServicesCardBarcodeDecoder,
    DecodedIdentity, DriversLicenseBarcodeDecoder,
};
pub use code::{CodeType, ScannableCode};
pub use evidence::{build_barcode_payload, BarcodePayload};
pub use scan::CardScan;
pub use strategy::{
    decode_scanned_code, default_strategies, DecodedCode, DecoderStrategy, ParseError,
};
