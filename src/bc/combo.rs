use chrono::NaiveDate;

use super::{
    dl::{DecodedIdentity, DriversLicenseBarcodeDecoder},
    services_card::{is_bcsc_serial, BCSC_SERIAL_LENGTH},
};
use crate::{
    strategy::{DecodedCode, DecoderStrategy, ParseError},
    ScannableCode,
};

/// Decoder for BC Services Combo Card PDF-417 barcodes.
///
/// Combo cards issued from 2025 on encode both the driver's licence and the
/// BC Services Card serial in the PDF-417 barcode, the serial closing
/// track 3:
///
/// ```text
/// ...=?_%0AV8W3Y8                     M185 88BRNBLU                          00S00023254?
/// ```
///
/// Older combo cards carry the serial in a separate Code 39 barcode only,
/// which [`super::BcServicesCardBarcodeDecoder`] handles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BcComboCardBarcodeDecoder {
    license_decoder: DriversLicenseBarcodeDecoder,
}

impl BcComboCardBarcodeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with(reference_date: Option<NaiveDate>) -> Self {
        Self {
            license_decoder: DriversLicenseBarcodeDecoder::new_with(reference_date),
        }
    }

    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self::new_with(Some(reference_date))
    }

    /// Decodes both the licence record and the BCSC serial.
    pub fn decode_combo(
        &self,
        code: &ScannableCode,
    ) -> Result<(String, DecodedIdentity), ParseError> {
        let license = self.license_decoder.decode_license(code)?;
        let bcsc_serial = parse_bcsc_serial(&code.value).ok_or(ParseError::MissingBcscSerial)?;
        Ok((bcsc_serial, license))
    }
}

impl DecoderStrategy for BcComboCardBarcodeDecoder {
    fn can_decode(&self, code: &ScannableCode) -> bool {
        self.license_decoder.can_decode(code) && parse_bcsc_serial(&code.value).is_some()
    }

    fn decode(&self, code: &ScannableCode) -> Result<DecodedCode, ParseError> {
        let (bcsc_serial, license) = self.decode_combo(code)?;
        Ok(DecodedCode::BcServicesComboCardBarcode {
            bcsc_serial,
            license,
        })
    }
}

/// Extracts the BCSC serial from the last (up to) nine characters of the
/// payload's last word.
pub fn parse_bcsc_serial(payload: &str) -> Option<String> {
    let word = payload.rsplit(' ').next()?.replacen('?', "", 1);
    let start = word.len().saturating_sub(BCSC_SERIAL_LENGTH);
    let serial = word.get(start..)?;
    is_bcsc_serial(serial).then(|| serial.to_owned())
}
