use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::track::{Track1, Tracks};
use crate::{
    strategy::{DecodedCode, DecoderStrategy, ParseError},
    CodeType, ScannableCode,
};

/// Identity fields decoded from a BC driver's licence barcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedIdentity {
    /// Licence number, without the issuer identification number.
    pub license_number: String,
    pub first_name: String,
    pub middle_names: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub street_address: String,
    pub postal_code: String,
    pub city: String,

    /// Two-letter province code.
    pub province: String,
}

impl DecodedIdentity {
    /// Decodes a BC licence payload.
    ///
    /// The expiry year is encoded without century: it is placed in the
    /// century of `reference_date`.
    pub fn from_payload(payload: &str, reference_date: NaiveDate) -> Result<Self, ParseError> {
        Self::from_tracks(&Tracks::parse(payload)?, reference_date)
    }

    pub fn from_tracks(tracks: &Tracks, reference_date: NaiveDate) -> Result<Self, ParseError> {
        let Track1 {
            last_name,
            given_names,
            street_address,
            locality,
            ..
        } = &tracks.track_1;

        let given_names = normalize(given_names).to_lowercase();
        let (first_name, middle_names) = given_names
            .split_once(' ')
            .unwrap_or((given_names.as_str(), ""));

        let dates = tracks.track_2.dates;
        let birth_date = NaiveDate::from_ymd_opt(
            dates.birth_year(),
            dates.birth_month(),
            dates.birth_day(),
        )
        .ok_or(ParseError::InvalidDate("birth"))?;

        // The expiry day is not encoded: cards expire on the holder's
        // birthday.
        let expiry_date = expiry_date(
            reference_date.year().div_euclid(100) * 100 + dates.expiry_year() as i32,
            dates.expiry_month(),
            birth_date.day(),
        )?;

        Ok(Self {
            license_number: tracks.track_2.license_number.to_string(),
            first_name: first_name.to_owned(),
            middle_names: middle_names.to_owned(),
            last_name: normalize(last_name).to_lowercase(),
            birth_date,
            expiry_date,
            street_address: normalize(street_address).to_lowercase(),
            postal_code: locality.postal_code.join(" ").to_uppercase(),
            city: locality.city.join(" ").to_lowercase(),
            province: locality.province.to_string(),
        })
    }
}

/// Builds the expiry date, falling back to the last day of `month` when
/// `day` does not exist in it (February 29 birthdays in common years).
fn expiry_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ParseError> {
    (1..=day)
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or(ParseError::InvalidDate("expiry"))
}

/// Trims and collapses whitespace runs into a single space.
pub(crate) fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decoder for British Columbia driver's licence PDF-417 barcodes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriversLicenseBarcodeDecoder {
    reference_date: Option<NaiveDate>,
}

impl DriversLicenseBarcodeDecoder {
    /// Creates a decoder resolving expiry dates against today's date.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with(reference_date: Option<NaiveDate>) -> Self {
        Self { reference_date }
    }

    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self::new_with(Some(reference_date))
    }

    /// Date used to resolve the expiry century.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Decodes the licence record of a PDF-417 code.
    pub fn decode_license(&self, code: &ScannableCode) -> Result<DecodedIdentity, ParseError> {
        if code.code_type != CodeType::Pdf417 {
            return Err(ParseError::UnsupportedCodeType(code.code_type.clone()));
        }

        DecodedIdentity::from_payload(&code.value, self.reference_date())
    }
}

impl DecoderStrategy for DriversLicenseBarcodeDecoder {
    fn can_decode(&self, code: &ScannableCode) -> bool {
        code.code_type == CodeType::Pdf417 && Tracks::parse(&code.value).is_ok()
    }

    fn decode(&self, code: &ScannableCode) -> Result<DecodedCode, ParseError> {
        self.decode_license(code).map(DecodedCode::DriversLicenseBarcode)
    }
}
