//! Barcode evidence payload.
//!
//! During identity verification the scanned card data is submitted as a list
//! of barcode entries: the licence as an AAMVA 3-track PDF-417 entry and the
//! BC Services Card serial as a Code 128 entry.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DecodedIdentity;

pub const AAMVA_3TRACK_PDF417: &str = "AAMVA_3TRACK_PDF417";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BarcodePayload {
    #[serde(rename = "PDF_417")]
    Pdf417(LicensePayload),

    #[serde(rename = "CODE_128")]
    Code128 { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePayload {
    pub content_type: String,
    pub version: String,
    pub jurisdiction_version: String,
    pub iso_iin: String,
    pub customer_id: String,
    pub document_number: String,
    pub family_name: String,
    pub given_names: String,
    pub birthdate: NaiveDate,
    pub expires: NaiveDate,
    pub address: AddressPayload,
}

impl From<&DecodedIdentity> for LicensePayload {
    fn from(license: &DecodedIdentity) -> Self {
        let given_names = [license.first_name.as_str(), license.middle_names.as_str()]
            .into_iter()
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            content_type: AAMVA_3TRACK_PDF417.to_owned(),
            version: String::new(),
            jurisdiction_version: String::new(),
            iso_iin: String::new(),
            customer_id: String::new(),
            document_number: license.license_number.clone(),
            family_name: license.last_name.clone(),
            given_names,
            birthdate: license.birth_date,
            expires: license.expiry_date,
            address: AddressPayload {
                street_address: license.street_address.clone(),
                locality: license.city.clone(),
                province: license.province.clone(),
                postal_code: license.postal_code.clone(),
                country: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPayload {
    pub street_address: String,
    pub locality: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

/// Builds the barcode evidence entries, licence first.
pub fn build_barcode_payload(
    bcsc_serial: Option<&str>,
    license: Option<&DecodedIdentity>,
) -> Vec<BarcodePayload> {
    let license = license.map(|license| BarcodePayload::Pdf417(license.into()));
    let serial = bcsc_serial.map(|serial| BarcodePayload::Code128 {
        value: serial.to_owned(),
    });

    license.into_iter().chain(serial).collect()
}
