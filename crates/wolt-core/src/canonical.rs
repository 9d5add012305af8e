//! Canonical signing payload
//!
//! The byte sequence a wolt signature covers is the straight UTF-8
//! concatenation of `from_wolt`, `content`, and `created_at` with no
//! delimiters or length prefixes. The format has no domain separation, so
//! two different field splits can in principle produce the same bytes; this
//! is a known limitation of the deployed wire format and is preserved
//! exactly for interoperability. Adding separators here would break
//! verification against every existing message on the network.

/// Compute the exact bytes that are signed and verified for a message.
pub fn signing_bytes(from_wolt: &str, content: &str, created_at: &str) -> Vec<u8> {
    let mut payload = String::with_capacity(from_wolt.len() + content.len() + created_at.len());
    payload.push_str(from_wolt);
    payload.push_str(content);
    payload.push_str(created_at);
    payload.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_without_separators() {
        let bytes = signing_bytes("alice", "hello wolts", "2026-02-01T12:00:00.000Z");
        assert_eq!(bytes, b"alicehello wolts2026-02-01T12:00:00.000Z");
    }

    #[test]
    fn empty_fields_contribute_nothing() {
        assert_eq!(signing_bytes("", "", ""), b"");
        assert_eq!(signing_bytes("a", "", "b"), b"ab");
    }

    #[test]
    fn preserves_non_ascii_content() {
        let bytes = signing_bytes("wölt", "héllo", "2026-01-01T00:00:00.000Z");
        assert_eq!(
            bytes,
            "wölthéllo2026-01-01T00:00:00.000Z".as_bytes()
        );
    }
}
