//! Non-cryptographic random strings
//!
//! [`InsecureToken`] values are derived from the current time and a v4 UUID
//! hashed with SHA-256. They are fine for cache busting, temporary file names
//! or correlation ids. They are NOT suitable as secrets, session ids or
//! anything an attacker must not guess: the time component is predictable.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::constants::MAX_TOKEN_LENGTH;
use crate::error::{TimeError, TimeResult};

/// A hex string that must not be used where unpredictability matters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InsecureToken(String);

impl InsecureToken {
    /// Generate a token of exactly `length` lowercase hex characters
    ///
    /// # Arguments
    /// * `seed` - The current instant; its nanoseconds feed the hash
    /// * `length` - Number of characters, at most `MAX_TOKEN_LENGTH`
    pub fn generate(seed: DateTime<Utc>, length: usize) -> TimeResult<Self> {
        if length > MAX_TOKEN_LENGTH {
            return Err(TimeError::OutOfRange(format!(
                "token length {} exceeds {}",
                length, MAX_TOKEN_LENGTH
            )));
        }

        let nanos = seed
            .timestamp_nanos_opt()
            .unwrap_or_else(|| seed.timestamp_micros());
        let material = format!("{}{}", nanos, Uuid::new_v4().simple());

        let mut block = sha256::digest(material.as_bytes());
        let mut token = String::with_capacity(length + block.len());
        token.push_str(&block);
        // Each additional 64 characters come from hashing the previous block
        while token.len() < length {
            block = sha256::digest(block.as_bytes());
            token.push_str(&block);
        }
        token.truncate(length);

        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for InsecureToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InsecureToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
