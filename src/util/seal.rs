//! Authenticated sealing for session-cookie payloads.
//!
//! DESIGN
//! ======
//! ChaCha20-Poly1305 with a random 12-byte nonce; the sealed form is
//! `nonce || ciphertext` in standard Base64 so it survives the cookie
//! header. The cookie name rides along as AAD, so a value sealed for one
//! cookie cannot be replayed under another.

#[cfg(test)]
#[path = "seal_test.rs"]
mod seal_test;

use base64ct::{Base64, Encoding};
use chacha20poly1305::{
    ChaCha20Poly1305, Key, Nonce,
    aead::{Aead, KeyInit, Payload},
};
use rand::{RngCore, rngs::OsRng};

const NONCE_LEN: usize = 12;

/// Seal `plaintext` for the cookie `name` under `key`.
///
/// Returns `None` only if the cipher rejects the input, which for
/// cookie-sized payloads does not happen.
pub fn seal(key: &[u8; 32], name: &str, plaintext: &str) -> Option<String> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let payload = Payload {
        msg: plaintext.as_bytes(),
        aad: name.as_bytes(),
    };
    let ciphertext = cipher.encrypt(Nonce::from_slice(&nonce_bytes), payload).ok()?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);
    Some(Base64::encode_string(&sealed))
}

/// Open a sealed value for the cookie `name` under `key`.
///
/// Any failure (bad Base64, truncation, tampering, wrong key, wrong
/// cookie name) reads as `None`.
pub fn open(key: &[u8; 32], name: &str, sealed: &str) -> Option<String> {
    let decoded = Base64::decode_vec(sealed).ok()?;
    if decoded.len() < NONCE_LEN {
        return None;
    }
    let (nonce_bytes, ciphertext) = decoded.split_at(NONCE_LEN);

    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    let payload = Payload {
        msg: ciphertext,
        aad: name.as_bytes(),
    };
    let plaintext = cipher.decrypt(Nonce::from_slice(nonce_bytes), payload).ok()?;
    String::from_utf8(plaintext).ok()
}
