use crate::{
    strategy::{DecodedCode, DecoderStrategy, ParseError},
    CodeType, ScannableCode,
};

/// Maximum length of a BC Services Card serial number.
pub const BCSC_SERIAL_LENGTH: usize = 9;

/// Checks that `value` is a BC Services Card serial number: one or more
/// ASCII letters followed by one or more digits, at most
/// [`BCSC_SERIAL_LENGTH`] characters long.
pub fn is_bcsc_serial(value: &str) -> bool {
    let digits = value.trim_start_matches(|c: char| c.is_ascii_alphabetic());

    value.len() <= BCSC_SERIAL_LENGTH
        && digits.len() < value.len()
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Decoder for the Code 39 / Code 128 serial number barcode printed on BC
/// Services Cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BcServicesCardBarcodeDecoder;

impl BcServicesCardBarcodeDecoder {
    fn is_serial_code_type(code_type: &CodeType) -> bool {
        matches!(code_type, CodeType::Code39 | CodeType::Code128)
    }
}

impl DecoderStrategy for BcServicesCardBarcodeDecoder {
    fn can_decode(&self, code: &ScannableCode) -> bool {
        Self::is_serial_code_type(&code.code_type) && is_bcsc_serial(code.value.trim())
    }

    fn decode(&self, code: &ScannableCode) -> Result<DecodedCode, ParseError> {
        if !Self::is_serial_code_type(&code.code_type) {
            return Err(ParseError::UnsupportedCodeType(code.code_type.clone()));
        }

        let bcsc_serial = code.value.trim();
        if !is_bcsc_serial(bcsc_serial) {
            return Err(ParseError::MissingBcscSerial);
        }

        Ok(DecodedCode::BcServicesCardBarcode {
            bcsc_serial: bcsc_serial.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_format() {
        let cases = [
            ("S00023254", true),
            ("C00015303", true),
            ("A12345678", true),
            ("AB1234567", true),
            ("a12345678", true),
            ("ABC1234", true),
            ("S0002325", true),
            ("123456789", false),
            ("12345678", false),
            ("ABCDEFGH", false),
            ("A1234@678", false),
            ("A1234567890", false),
            ("S000232541", false),
            ("A1234B678", false),
            ("A 1234567", false),
            ("É1234567", false),
            ("", false),
        ];

        for (value, expected) in cases {
            assert_eq!(is_bcsc_serial(value), expected, "{value}");
        }
    }

    #[test]
    fn decode_serial_barcode() {
        let decoder = BcServicesCardBarcodeDecoder;

        for code_type in [CodeType::Code39, CodeType::Code128] {
            let code = ScannableCode::new(code_type, " S00023254\n");
            assert!(decoder.can_decode(&code));
            assert_eq!(
                decoder.decode(&code).unwrap(),
                DecodedCode::BcServicesCardBarcode {
                    bcsc_serial: "S00023254".to_owned()
                }
            );
        }

        let code = ScannableCode::new(CodeType::Code128, "ab1234567");
        assert_eq!(
            decoder.decode(&code).unwrap(),
            DecodedCode::BcServicesCardBarcode {
                bcsc_serial: "ab1234567".to_owned()
            }
        );
    }

    #[test]
    fn reject_other_codes() {
        let decoder = BcServicesCardBarcodeDecoder;

        let code = ScannableCode::pdf_417("S00023254");
        assert!(!decoder.can_decode(&code));
        assert_eq!(
            decoder.decode(&code).unwrap_err(),
            ParseError::UnsupportedCodeType(CodeType::Pdf417)
        );

        let code = ScannableCode::new(CodeType::Code39, "NOT A SERIAL");
        assert!(!decoder.can_decode(&code));
        assert_eq!(
            decoder.decode(&code).unwrap_err(),
            ParseError::MissingBcscSerial
        );

        let code = ScannableCode::new(CodeType::Code39, "123456789");
        assert!(!decoder.can_decode(&code));
        assert_eq!(
            decoder.decode(&code).unwrap_err(),
            ParseError::MissingBcscSerial
        );
    }
}
