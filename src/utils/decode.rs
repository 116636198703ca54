use std::borrow::Cow;

/// Decode a raw dataset field to a string
///
/// Attempts UTF-8 first, falling back to Windows-1252 (CP1252). Airport
/// dumps in the wild mix both, and accented names in the CP1252 ones are
/// not valid UTF-8.
///
/// # Returns
///
/// Decoded string (always succeeds with some valid string)
pub fn decode_field(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.into(),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_utf8_field() {
        let bytes = b"Charles de Gaulle International Airport";
        assert_eq!(decode_field(bytes), "Charles de Gaulle International Airport");
    }

    #[test]
    fn decode_utf8_with_special_chars() {
        let bytes = "Zürich Airport".as_bytes();
        assert_eq!(decode_field(bytes), "Zürich Airport");
    }

    #[test]
    fn decode_cp1252_fallback() {
        // CP1252 ü (0xFC) is not valid UTF-8 on its own
        let bytes = b"Z\xFCrich Airport";
        assert_eq!(decode_field(bytes), "Zürich Airport");
    }

    #[test]
    fn decode_empty_field() {
        assert_eq!(decode_field(b""), "");
    }

    #[test]
    fn utf8_is_borrowed() {
        assert!(matches!(decode_field(b"CDG"), Cow::Borrowed(_)));
    }
}
