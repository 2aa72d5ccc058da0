//! BC 3-track payload grammar.
//!
//! BC driver's licences store a magnetic stripe style encoding inside the
//! PDF-417 barcode:
//!
//! ```text
//! %BC<issuing city>^<last>,$<given names>^<street>$<city> <province> <postal>[^]?;
//! ;<IIN><licence number>=<YYMM expiry><CCYYMMDD birth>=?
//! _%<track 3>
//! ```
//!
//! Some cards insert an extra `^` right before the `?;` track 1 terminator
//! while others do not. Both forms are accepted.
use super::types::{InvalidFieldValue, Numeric, F12N, F2U, F6N, V25N};
use crate::strategy::ParseError;

const START_SENTINEL: char = '%';

const JURISDICTION: &str = "BC";

const FIELD_SEPARATOR: char = '^';

const TRACK_1_END: &str = "?;";

const NAME_SEPARATOR: &str = ",$";

const ADDRESS_SEPARATOR: &str = "$";

const TRACK_2_SEPARATOR: &str = "=";

const TRACK_2_END: &str = "?";

const TRACK_3_START: &str = "_%";

const IIN_LEN: usize = 6;

/// Structural view over a BC licence payload.
///
/// Holds borrowed, not yet normalized slices of track 1 and the checked
/// numeric fields of track 2. Track 3 is kept as-is and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracks<'a> {
    pub track_1: Track1<'a>,
    pub track_2: Track2,
    pub track_3: &'a str,
}

impl<'a> Tracks<'a> {
    pub fn parse(payload: &'a str) -> Result<Self, ParseError> {
        let rest = payload
            .strip_prefix(START_SENTINEL)
            .ok_or(ParseError::MissingStartSentinel)?;
        let rest = rest
            .strip_prefix(JURISDICTION)
            .ok_or(ParseError::UnknownJurisdiction)?;
        let (header, rest) = rest
            .split_once(TRACK_1_END)
            .ok_or(ParseError::MissingDelimiter(TRACK_1_END))?;

        let track_1 = Track1::parse(header)?;
        let (track_2, track_3) = Track2::parse(rest)?;

        Ok(Self {
            track_1,
            track_2,
            track_3,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track1<'a> {
    pub issuing_city: &'a str,
    pub last_name: &'a str,
    pub given_names: &'a str,
    pub street_address: &'a str,
    pub locality: Locality<'a>,
}

impl<'a> Track1<'a> {
    fn parse(header: &'a str) -> Result<Self, ParseError> {
        let header = header.strip_suffix(FIELD_SEPARATOR).unwrap_or(header);

        let mut segments = header.split(FIELD_SEPARATOR);
        let (Some(issuing_city), Some(name), Some(address), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(ParseError::SegmentCount(
                header.split(FIELD_SEPARATOR).count(),
            ));
        };

        let (last_name, given_names) = name
            .split_once(NAME_SEPARATOR)
            .ok_or(ParseError::MissingDelimiter(NAME_SEPARATOR))?;
        let (street_address, locality) = address
            .split_once(ADDRESS_SEPARATOR)
            .ok_or(ParseError::MissingDelimiter(ADDRESS_SEPARATOR))?;

        Ok(Self {
            issuing_city,
            last_name,
            given_names,
            street_address,
            locality: Locality::parse(locality)?,
        })
    }
}

/// `<city words> <province> <postal code words>` token of the address
/// segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locality<'a> {
    pub city: Vec<&'a str>,
    pub province: F2U,
    pub postal_code: Vec<&'a str>,
}

impl<'a> Locality<'a> {
    fn parse(value: &'a str) -> Result<Self, ParseError> {
        let words: Vec<&str> = value.split_whitespace().collect();

        // The city takes at least one word and may itself hold two-letter
        // words (`FORT ST JOHN`): the province is the last two-letter
        // upper-case word. Postal code halves are three characters long.
        let (i, province) = words
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find_map(|(i, word)| F2U::new(word).ok().map(|p| (i, p)))
            .ok_or(ParseError::MissingProvince)?;

        Ok(Self {
            city: words[..i].to_vec(),
            province,
            postal_code: words[i + 1..].to_vec(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track2 {
    /// Issuer identification number.
    pub issuer_id: F6N,
    pub license_number: V25N,
    pub dates: DateBlock,
}

impl Track2 {
    /// Parses `<IIN><number>=<dates>=?_%` and returns the track 3 remainder.
    fn parse(value: &str) -> Result<(Self, &str), ParseError> {
        let (id, rest) = value
            .split_once(TRACK_2_SEPARATOR)
            .ok_or(ParseError::MissingDelimiter(TRACK_2_SEPARATOR))?;
        let (dates, rest) = rest
            .split_once(TRACK_2_SEPARATOR)
            .ok_or(ParseError::MissingDelimiter(TRACK_2_SEPARATOR))?;
        let track_3 = rest
            .strip_prefix(TRACK_2_END)
            .ok_or(ParseError::MissingDelimiter(TRACK_2_END))?
            .strip_prefix(TRACK_3_START)
            .ok_or(ParseError::MissingDelimiter(TRACK_3_START))?;

        let issuer_id = F6N::new(id.get(..IIN_LEN).unwrap_or(id))?;
        // The IIN is six ASCII digits, so `IIN_LEN` is a char boundary.
        let license_number = match &id[IIN_LEN..] {
            "" => return Err(InvalidFieldValue::new::<Numeric>(id).into()),
            number => V25N::new(number)?,
        };

        Ok((
            Self {
                issuer_id,
                license_number,
                dates: DateBlock(F12N::new(dates)?),
            },
            track_3,
        ))
    }
}

/// `YYMM` expiry followed by `CCYYMMDD` birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBlock(F12N);

impl DateBlock {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Two digit expiry year, without century.
    pub fn expiry_year(&self) -> u32 {
        self.digits2(0)
    }

    pub fn expiry_month(&self) -> u32 {
        self.digits2(2)
    }

    pub fn birth_year(&self) -> i32 {
        (self.digits2(4) * 100 + self.digits2(6)) as i32
    }

    pub fn birth_month(&self) -> u32 {
        self.digits2(8)
    }

    pub fn birth_day(&self) -> u32 {
        self.digits2(10)
    }

    fn digits2(&self, offset: usize) -> u32 {
        let digits = &self.0.as_bytes()[offset..offset + 2];
        decode_digit(digits[0]) * 10 + decode_digit(digits[1])
    }
}

fn decode_digit(d: u8) -> u32 {
    (d - b'0') as u32
}
