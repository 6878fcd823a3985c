/// Separator between the decimal length and the payload: `b':'`.
pub const SEPARATOR: u8 = b':';

/// Wraps a payload in a bencode byte-string envelope.
///
/// The envelope is the decimal byte length, the `:` separator, then the
/// payload verbatim: `b"spam"` becomes `b"4:spam"`. The payload is treated
/// as opaque bytes; nothing is escaped or re-tagged. The result is
/// self-delimiting and safe to concatenate with other encoded values.
pub fn wrap(payload: &[u8]) -> Vec<u8> {
    let length = payload.len().to_string();
    let mut out = Vec::with_capacity(length.len() + 1 + payload.len());
    out.extend_from_slice(length.as_bytes());
    out.push(SEPARATOR);
    out.extend_from_slice(payload);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_short_payload() {
        assert_eq!(wrap(b"spam"), b"4:spam");
    }

    #[test]
    fn wraps_empty_payload() {
        assert_eq!(wrap(b""), b"0:");
    }

    #[test]
    fn payload_bytes_pass_through_verbatim() {
        assert_eq!(wrap(b"12:34"), b"5:12:34");
        assert_eq!(wrap(&[0x00, 0xff]), &[b'2', b':', 0x00, 0xff]);
    }

    #[test]
    fn length_is_decimal_over_ten() {
        let payload = [b'x'; 12];
        let wrapped = wrap(&payload);
        assert!(wrapped.starts_with(b"12:"));
        assert_eq!(wrapped.len(), 3 + 12);
    }
}
