//! Encrypted and signed preference values
//!
//! Keys live only for the current process. This protects saved preferences
//! from casual inspection or editing; it is not a home for secrets. Every
//! operation degrades instead of failing: a value that cannot be encrypted is
//! stored as plaintext, and a value that cannot be decrypted is returned as
//! it was found.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::RngCore;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::storage::{KeyValueStore, StorageError};

/// Size of each key in bytes
pub const KEY_SIZE: usize = 32;

/// Size of the nonce in bytes
pub const NONCE_SIZE: usize = 12;

/// Size of the authentication tag in bytes
const TAG_SIZE: usize = 16;

/// Separator between a value and its signature
const PACK_SEPARATOR: char = '|';

/// Per-process cipher and MAC keys, wiped on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionKeys {
    cipher_key: [u8; KEY_SIZE],
    mac_key: [u8; KEY_SIZE],
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionKeys([REDACTED])")
    }
}

impl SessionKeys {
    /// Fresh random keys
    pub fn generate() -> Self {
        let mut cipher_key = [0u8; KEY_SIZE];
        let mut mac_key = [0u8; KEY_SIZE];
        rand::thread_rng().fill_bytes(&mut cipher_key);
        rand::thread_rng().fill_bytes(&mut mac_key);
        Self {
            cipher_key,
            mac_key,
        }
    }

    /// Keys from known bytes
    pub fn from_bytes(cipher_key: [u8; KEY_SIZE], mac_key: [u8; KEY_SIZE]) -> Self {
        Self {
            cipher_key,
            mac_key,
        }
    }

    /// Encrypt and base64-encode, nonce first
    ///
    /// Empty input stays empty; on failure the plaintext is returned.
    pub fn encrypt_data(&self, plaintext: &str) -> String {
        if plaintext.is_empty() {
            return String::new();
        }
        let cipher = ChaCha20Poly1305::new((&self.cipher_key).into());
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);

        match cipher.encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes()) {
            Ok(ciphertext) => {
                let mut combined = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
                combined.extend_from_slice(&nonce_bytes);
                combined.extend_from_slice(&ciphertext);
                BASE64.encode(combined)
            }
            Err(_) => {
                warn!("encryption failed, keeping plaintext");
                plaintext.to_string()
            }
        }
    }

    /// Reverse [`SessionKeys::encrypt_data`]
    ///
    /// Input that is not base64 is legacy plaintext and comes back unchanged,
    /// as does anything that fails to decrypt.
    pub fn decrypt_data(&self, ciphertext: &str) -> String {
        if ciphertext.is_empty() {
            return String::new();
        }
        let Ok(combined) = BASE64.decode(ciphertext) else {
            return ciphertext.to_string();
        };
        if combined.len() < NONCE_SIZE + TAG_SIZE {
            return ciphertext.to_string();
        }

        let cipher = ChaCha20Poly1305::new((&self.cipher_key).into());
        let (nonce, encrypted) = combined.split_at(NONCE_SIZE);
        cipher
            .decrypt(Nonce::from_slice(nonce), encrypted)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_else(|| {
                warn!("decryption failed, returning stored value");
                ciphertext.to_string()
            })
    }

    /// Keyed BLAKE3 MAC, base64-encoded
    pub fn sign_data(&self, data: &str) -> String {
        BASE64.encode(blake3::keyed_hash(&self.mac_key, data.as_bytes()).as_bytes())
    }

    /// Check a signature from [`SessionKeys::sign_data`] in constant time
    pub fn verify_signature(&self, data: &str, signature: &str) -> bool {
        let Ok(bytes) = BASE64.decode(signature) else {
            return false;
        };
        let Ok(bytes) = <[u8; 32]>::try_from(bytes.as_slice()) else {
            return false;
        };
        blake3::keyed_hash(&self.mac_key, data.as_bytes()) == blake3::Hash::from(bytes)
    }

    /// Sign, pack as `data|signature`, then encrypt
    pub fn sign_and_encrypt(&self, plaintext: &str) -> String {
        if plaintext.is_empty() {
            return String::new();
        }
        let signature = self.sign_data(plaintext);
        self.encrypt_data(&format!("{plaintext}{PACK_SEPARATOR}{signature}"))
    }

    /// Decrypt and check the packed signature
    ///
    /// Returns `None` when the signature does not match. A value that was
    /// never signed is returned as decrypted.
    pub fn decrypt_and_verify(&self, ciphertext: &str) -> Option<String> {
        if ciphertext.is_empty() {
            return Some(String::new());
        }
        let decrypted = self.decrypt_data(ciphertext);
        let Some((data, signature)) = decrypted.rsplit_once(PACK_SEPARATOR) else {
            return Some(decrypted);
        };
        if self.verify_signature(data, signature) {
            Some(data.to_string())
        } else {
            warn!("signature mismatch, treating stored value as tampered");
            None
        }
    }
}

/// [`KeyValueStore`] wrapper that signs and encrypts values
#[derive(Debug)]
pub struct SecureStore<S> {
    store: S,
    keys: SessionKeys,
}

impl<S: KeyValueStore> SecureStore<S> {
    /// Wrap a store with fresh session keys
    pub fn new(store: S) -> Self {
        Self::with_keys(store, SessionKeys::generate())
    }

    pub fn with_keys(store: S, keys: SessionKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn set_secure(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let sealed = self.keys.sign_and_encrypt(value);
        self.store.set(key, &sealed)
    }

    /// Stored value, or `None` when missing or tampered with
    pub fn get_secure(&self, key: &str) -> Option<String> {
        let stored = self.store.get(key)?;
        self.keys.decrypt_and_verify(&stored)
    }

    pub fn set_secure_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.set_secure(key, &json)
    }

    /// Stored JSON value; `None` when missing, tampered or not parseable
    pub fn get_secure_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = self.get_secure(key)?;
        serde_json::from_str(&json).ok()
    }
}
