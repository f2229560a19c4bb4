
use md5::{Md5, Digest};
use hex::ToHex;
use rocket::serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ChecksumResult {
    pub text: String,
    pub checksum: String,
}

impl ChecksumResult {
    pub fn new(text: String) -> Self {
        let checksum = checksum_md5(&text);
        ChecksumResult{ text, checksum }
    }
}

// Lowercase hex MD5 of the UTF-8 bytes of text.
pub fn checksum_md5(text: &str) -> String {
    Md5::digest(text.as_bytes()).encode_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(checksum_md5("hello"), "5d41402abc4b2a76b9719d911017c592");
        assert_eq!(checksum_md5(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn deterministic() {
        assert_eq!(checksum_md5("some text"), checksum_md5("some text"));
    }

    #[test]
    fn sensitive_to_case_and_whitespace() {
        let base = checksum_md5("hello");
        assert_ne!(base, checksum_md5("Hello"));
        assert_ne!(base, checksum_md5("hello "));
    }

    #[test]
    fn result_keeps_text() {
        let r = ChecksumResult::new("héllo wörld".to_owned());
        assert_eq!(r.text, "héllo wörld");
        assert_eq!(r.checksum.len(), 32);
        assert!(r.checksum.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
