//! Vault
//!
//! Stand-in for a symmetric-cipher vault: byte buffer plus key in,
//! transformed byte buffer out. The transform is a repeating-key XOR so
//! that encrypt and decrypt are exact inverses and the derived key is
//! actually exercised; it carries the call shape of a vault, it is not a
//! cipher.

use bytes::Bytes;
use tracing::{debug, info};

/// Fixed derived-key width, matching a 256-bit key slot
pub const KEY_LEN: usize = 32;

/// Stand-in symmetric vault holding a fixed-width derived key
#[derive(Debug, Clone)]
pub struct Vault {
    key: [u8; KEY_LEN],
}

impl Vault {
    /// Create a vault from a passphrase.
    ///
    /// The passphrase bytes are copied into a 32-byte key slot, truncated
    /// or zero-padded to fit. No key stretching is applied.
    pub fn new(passphrase: &str) -> Self {
        let mut key = [0u8; KEY_LEN];
        let copied = passphrase.len().min(KEY_LEN);
        key[..copied].copy_from_slice(&passphrase.as_bytes()[..copied]);

        info!("Vault created");
        Self { key }
    }

    /// Transform a plaintext buffer, returning a ciphertext of equal length
    pub fn encrypt(&self, plaintext: &[u8]) -> Bytes {
        let out = self.transform(plaintext);
        debug!(len = plaintext.len(), "Buffer encrypted");
        out
    }

    /// Invert `encrypt`, returning a plaintext of equal length
    pub fn decrypt(&self, ciphertext: &[u8]) -> Bytes {
        let out = self.transform(ciphertext);
        debug!(len = ciphertext.len(), "Buffer decrypted");
        out
    }

    // XOR with the repeating key; applying it twice is the identity.
    fn transform(&self, buf: &[u8]) -> Bytes {
        buf.iter()
            .zip(self.key.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let vault = Vault::new("secret-passphrase");
        let plaintext = b"feature payload";

        let ciphertext = vault.encrypt(plaintext);
        let recovered = vault.decrypt(&ciphertext);
        assert_eq!(recovered.as_ref(), plaintext);
    }

    #[test]
    fn test_ciphertext_differs_from_plaintext() {
        let vault = Vault::new("secret-passphrase");
        let plaintext = b"feature payload";

        let ciphertext = vault.encrypt(plaintext);
        assert_ne!(ciphertext.as_ref(), plaintext);
        assert_eq!(ciphertext.len(), plaintext.len());
    }

    #[test]
    fn test_long_passphrase_truncated() {
        let long = "x".repeat(64);
        let short = "x".repeat(32);

        // Keys beyond 32 bytes are identical after truncation.
        let a = Vault::new(&long).encrypt(b"data");
        let b = Vault::new(&short).encrypt(b"data");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_keys_differ() {
        let a = Vault::new("alpha").encrypt(b"data");
        let b = Vault::new("omega").encrypt(b"data");
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_buffer() {
        let vault = Vault::new("key");
        assert!(vault.encrypt(b"").is_empty());
    }

    #[test]
    fn test_buffer_longer_than_key() {
        let vault = Vault::new("key");
        let plaintext = vec![0xA5u8; 100];

        let recovered = vault.decrypt(&vault.encrypt(&plaintext));
        assert_eq!(recovered.as_ref(), plaintext.as_slice());
    }
}
