use crate::constants::DEFAULT_NONCE_LENGTH;
use crate::error::CspError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use getrandom::getrandom;
use std::{
    ops::Deref,
    sync::atomic::{AtomicUsize, Ordering},
};

#[derive(Debug)]
pub struct NonceGenerator {
    length: AtomicUsize,
    generated: AtomicUsize,
}

impl Clone for NonceGenerator {
    fn clone(&self) -> Self {
        Self::new(self.length())
    }
}

impl NonceGenerator {
    #[inline]
    pub fn new(length: usize) -> Self {
        Self {
            length: AtomicUsize::new(length),
            generated: AtomicUsize::new(0),
        }
    }

    pub fn generate(&self) -> Result<String, CspError> {
        let mut buffer = vec![0u8; self.length()];
        getrandom(&mut buffer).map_err(|e| CspError::CryptoError(e.to_string()))?;
        self.generated.fetch_add(1, Ordering::Relaxed);
        Ok(BASE64.encode(&buffer))
    }

    #[inline]
    pub fn set_length(&self, length: usize) {
        self.length.store(length, Ordering::Relaxed);
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn generated_count(&self) -> usize {
        self.generated.load(Ordering::Relaxed)
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_NONCE_LENGTH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestNonce(pub String);

impl Deref for RequestNonce {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
