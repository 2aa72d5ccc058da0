//! Card scan aggregation.
//!
//! A single camera frame may contain several codes. A combo card issued
//! before 2025 shows both a licence PDF-417 and a serial Code 39 barcode,
//! so every code of the frame is decoded and the results are merged.
use crate::{
    strategy::{decode_scanned_code, DecoderStrategy},
    DecodedCode, DecodedIdentity, ScannableCode,
};

/// Card data gathered from the codes of one scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CardScan {
    pub bcsc_serial: Option<String>,
    pub license: Option<DecodedIdentity>,
}

impl CardScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes every code and merges the results. Later codes overwrite
    /// earlier ones.
    pub fn from_codes<'a>(
        codes: impl IntoIterator<Item = &'a ScannableCode>,
        strategies: &[Box<dyn DecoderStrategy>],
    ) -> Self {
        let mut scan = Self::new();

        for code in codes {
            scan.push(code, strategies);
        }

        scan
    }

    /// Decodes `code` and merges the result into this scan.
    ///
    /// Returns `false` if the code was skipped, either because no strategy
    /// claims it or because it failed to decode.
    pub fn push(&mut self, code: &ScannableCode, strategies: &[Box<dyn DecoderStrategy>]) -> bool {
        let decoded = match decode_scanned_code(code, strategies) {
            Some(Ok(decoded)) => decoded,
            Some(Err(e)) => {
                tracing::warn!(code_type = %code.code_type, error = %e, "failed to decode scanned code");
                return false;
            }
            None => {
                tracing::warn!(code_type = %code.code_type, "no decoder for scanned code");
                return false;
            }
        };

        tracing::debug!(kind = decoded.kind(), "decoded scanned code");

        match decoded {
            DecodedCode::BcServicesComboCardBarcode {
                bcsc_serial,
                license,
            } => {
                self.bcsc_serial = Some(bcsc_serial);
                self.license = Some(license);
            }
            DecodedCode::DriversLicenseBarcode(license) => self.license = Some(license),
            DecodedCode::BcServicesCardBarcode { bcsc_serial } => {
                self.bcsc_serial = Some(bcsc_serial)
            }
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        self.bcsc_serial.is_none() && self.license.is_none()
    }
}
