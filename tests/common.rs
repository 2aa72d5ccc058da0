#![allow(dead_code)]
use bc_card_barcodes::ScannableCode;
use chrono::NaiveDate;
use lazy_static::lazy_static;

/// Specimen licence, 4-caret header, no BCSC serial.
pub const LICENSE_A: &str =
    r#"%BCVICTORIA^SPECIMEN,$TEST CARD^910 GOVERNMENT ST$VICTORIA BC  V8W 3Y8^?;6360282222222=240919700906=?_%0AV8W3Y8                     M185 95BRNBLU9123456789                E$''C(R2S6L?"#;

/// Specimen licence born 1947, no BCSC serial.
pub const LICENSE_B: &str =
    r#"%BCVICTORIA^SPECIMEN,$TEST CARD^910 GOVERNMENT ST$VICTORIA BC  V8W 3Y8^?;6360282222222=250419470429=?_%0AV8W3Y8                     X160 57WHIBLU9123456789                E$!(\0CUPXD?"#;

/// Specimen combo card with BCSC serial `S00023254`.
pub const COMBO_C: &str =
    r#"%BCVICTORIA^SPECIMEN,$TEST CARD^910 GOVERNMENT ST$VICTORIA BC  V8W 3Y8^?;6360282222222=260119820104=?_%0AV8W3Y8                     M185 88BRNBLU                          00S00023254?"#;

/// 3-caret header (no `^` before `?;`), 9 digit licence number.
pub const THREE_CARET: &str =
    r#"%BCVICTORIA^CPSIJSIT,$STANDALONE CITZ FOUR^910 GOVERNMENT ST$VICTORIA BC V8W 3Y5?;636028004023964=270419850410=?_%0AV8W3Y5                     F            9873904417                00C00015303?"#;

lazy_static! {
    /// Every valid licence payload, as PDF-417 codes.
    pub static ref VALID_LICENSE_CODES: Vec<ScannableCode> =
        [LICENSE_A, LICENSE_B, COMBO_C, THREE_CARET]
            .into_iter()
            .map(ScannableCode::pdf_417)
            .collect();
}

pub const MALFORMED: &str = "MALFORMED_BARCODE_DATA";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference date used by tests that do not exercise century resolution.
pub fn today() -> NaiveDate {
    date(2026, 10, 16)
}
