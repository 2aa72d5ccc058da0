//! Character-class checked field values.
//!
//! Every positional field of a BC licence payload has a known character
//! class and length. Wrapping the raw slices in these types lets the track
//! parser reject a malformed field in one place.
use std::{fmt, marker::PhantomData, ops::Deref};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {class} field value: {value:?}")]
pub struct InvalidFieldValue {
    class: &'static str,
    value: String,
}

impl InvalidFieldValue {
    pub(crate) fn new<C: CharClass>(value: impl AsRef<[u8]>) -> Self {
        Self {
            class: C::NAME,
            value: String::from_utf8_lossy(value.as_ref()).into_owned(),
        }
    }

    /// Character class the value was expected to belong to.
    pub fn class(&self) -> &'static str {
        self.class
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// ASCII character class.
///
/// # Safety
///
/// The `contains` function must return only for ASCII bytes.
pub unsafe trait CharClass {
    const NAME: &'static str;

    fn contains(c: u8) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeric;

unsafe impl CharClass for Numeric {
    const NAME: &'static str = "numeric";

    fn contains(c: u8) -> bool {
        c.is_ascii_digit()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UpperAlpha;

unsafe impl CharClass for UpperAlpha {
    const NAME: &'static str = "upper-case alphabetic";

    fn contains(c: u8) -> bool {
        c.is_ascii_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed<C: CharClass, const N: usize> {
    data: [u8; N],
    class: PhantomData<C>,
}

impl<C: CharClass, const N: usize> Fixed<C, N> {
    pub fn new(value: impl AsRef<[u8]>) -> Result<Self, InvalidFieldValue> {
        let bytes = value.as_ref();
        if bytes.len() != N || !bytes.iter().copied().all(C::contains) {
            return Err(InvalidFieldValue::new::<C>(bytes));
        }

        let mut data = [0u8; N];
        data.copy_from_slice(bytes);

        Ok(Self {
            data,
            class: PhantomData,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_str(&self) -> &str {
        unsafe {
            // SAFETY: the character class `C` ensures that all bytes are in the
            //         ASCII range.
            std::str::from_utf8_unchecked(self.as_bytes())
        }
    }
}

impl<C: CharClass, const N: usize> Deref for Fixed<C, N> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<C: CharClass, const N: usize> fmt::Display for Fixed<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variable length field holding between 1 and `N` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable<C: CharClass, const N: usize> {
    data: [u8; N],
    len: usize,
    class: PhantomData<C>,
}

impl<C: CharClass, const N: usize> Variable<C, N> {
    pub fn new(value: impl AsRef<[u8]>) -> Result<Self, InvalidFieldValue> {
        let bytes = value.as_ref();
        let len = bytes.len();
        if len == 0 || len > N || !bytes.iter().copied().all(C::contains) {
            return Err(InvalidFieldValue::new::<C>(bytes));
        }

        let mut data = [0u8; N];
        data[..len].copy_from_slice(bytes);

        Ok(Self {
            data,
            len,
            class: PhantomData,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn as_str(&self) -> &str {
        unsafe {
            // SAFETY: the character class `C` ensures that all bytes are in the
            //         ASCII range.
            std::str::from_utf8_unchecked(self.as_bytes())
        }
    }
}

impl<C: CharClass, const N: usize> Deref for Variable<C, N> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<C: CharClass, const N: usize> fmt::Display for Variable<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type F2U = Fixed<UpperAlpha, 2>;

pub type F6N = Fixed<Numeric, 6>;
pub type F12N = Fixed<Numeric, 12>;

pub type V25N = Variable<Numeric, 25>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rejects_wrong_length() {
        assert!(F6N::new("63602").is_err());
        assert!(F6N::new("6360282").is_err());
        assert_eq!(F6N::new("636028").unwrap().as_str(), "636028");
    }

    #[test]
    fn fixed_rejects_wrong_class() {
        let error = F2U::new("bc").unwrap_err();
        assert_eq!(error.class(), "upper-case alphabetic");
        assert_eq!(error.value(), "bc");
        assert!(F12N::new("24091970090a").is_err());
    }

    #[test]
    fn variable_keeps_leading_zeros() {
        assert_eq!(&*V25N::new("004023964").unwrap(), "004023964");
    }

    #[test]
    fn variable_rejects_empty_and_oversized() {
        assert!(V25N::new("").is_err());
        assert!(V25N::new("1".repeat(26)).is_err());
        assert!(V25N::new("1".repeat(25)).is_ok());
    }

    #[test]
    fn non_ascii_is_rejected() {
        assert!(F2U::new("É").is_err());
        assert!(V25N::new("１２３").is_err());
    }
}
