
use rand::{CryptoRng, RngCore, rngs::OsRng};
use rocket::serde::Serialize;
use sha2::{Sha256, Digest};
use hex::ToHex;

use crate::model::checksum::checksum_md5;

// Number of tokens handed out per request.
pub const TOKEN_COUNT: usize = 5;

const SALT_LEN: usize = 8;

#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TokensResult {
    pub tokens: Vec<String>,
    pub checksum: String,
}

impl TokensResult {
    /// Checksum of `text` plus a fresh batch of tokens salted from the OS random source.
    pub fn generate(text: &str) -> Result<Self, rand::Error> {
        let tokens = gen_tokens(&mut OsRng, text, TOKEN_COUNT)?;
        log::debug!("generated {} tokens for {} bytes of text", tokens.len(), text.len());
        Ok(TokensResult{ tokens, checksum: checksum_md5(text) })
    }
}

fn gen_salt<R: RngCore + CryptoRng>(rng: &mut R) -> Result<String, rand::Error> {
    let mut bytes = [0u8; SALT_LEN];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(bytes.encode_hex())
}

/*
 * Each token is the SHA-256 of "<text>-<index>-<salt>" where salt is
 * a fresh random value, so tokens can't be reproduced from the text.
 */
pub fn gen_tokens<R: RngCore + CryptoRng>(rng: &mut R, text: &str, count: usize) -> Result<Vec<String>, rand::Error> {
    (0..count)
        .map(|i| {
            let salt = gen_salt(rng)?;
            let digest = Sha256::digest(format!("{}-{}-{}", text, i, salt).as_bytes());
            Ok(digest.encode_hex())
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn is_lower_hex(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn token_shape() {
        let toks = gen_tokens(&mut OsRng, "hello", TOKEN_COUNT).unwrap();
        assert_eq!(toks.len(), 5);
        for t in &toks {
            assert_eq!(t.len(), 64);
            assert!(is_lower_hex(t));
        }
        let uniq: HashSet<_> = toks.iter().collect();
        assert_eq!(uniq.len(), toks.len());
    }

    #[test]
    fn not_reproducible() {
        let a = gen_tokens(&mut OsRng, "hello", TOKEN_COUNT).unwrap();
        let b = gen_tokens(&mut OsRng, "hello", TOKEN_COUNT).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn combines_text_index_and_salt() {
        let toks = gen_tokens(&mut StdRng::seed_from_u64(7), "hello", 3).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for (i, tok) in toks.iter().enumerate() {
            let salt = gen_salt(&mut rng).unwrap();
            assert_eq!(salt.len(), 16);
            let want: String = Sha256::digest(format!("hello-{}-{}", i, salt).as_bytes()).encode_hex();
            assert_eq!(tok, &want);
        }
    }

    #[test]
    fn zero_count_and_empty_text() {
        assert!(gen_tokens(&mut OsRng, "hello", 0).unwrap().is_empty());
        assert_eq!(gen_tokens(&mut OsRng, "", 2).unwrap().len(), 2);
    }

    #[test]
    fn result_checksum_is_md5() {
        let r = TokensResult::generate("hello").unwrap();
        assert_eq!(r.tokens.len(), TOKEN_COUNT);
        assert_eq!(r.checksum, "5d41402abc4b2a76b9719d911017c592");
    }
}
