//! British Columbia card barcodes.
//!
//! BC driver's licences and BC Services Cards share a PDF-417 barcode
//! holding a 3-track magnetic stripe style payload. BC Services Cards also
//! carry a Code 39 / Code 128 serial barcode.
mod combo;
pub use combo::*;

mod dl;
pub use dl::*;

mod services_card;
pub use services_card::*;

pub mod track;
pub use track::Tracks;

pub mod types;
