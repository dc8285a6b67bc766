// Double-submit CSRF tokens signed with HMAC-SHA256.
// Token format: {nonce}:{expiration}.{hmac_hex}

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ApiError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies signed CSRF tokens
#[derive(Clone)]
pub struct CsrfSigner {
    secret_key: String,
    ttl_seconds: u64,
}

impl CsrfSigner {
    pub fn new(secret_key: String, ttl_seconds: u64) -> Self {
        Self {
            secret_key,
            ttl_seconds,
        }
    }

    /// Issue a fresh token with a random nonce and an expiration timestamp
    pub fn issue(&self) -> Result<String> {
        let mut nonce_bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = hex::encode(nonce_bytes);

        let expiration = unix_now()? + self.ttl_seconds;

        let payload = format!("{}:{}", nonce, expiration);
        let signature = self.compute_signature(&payload)?;

        Ok(format!("{}.{}", payload, signature))
    }

    /// Verify a token's signature (constant-time), then its expiration
    pub fn verify(&self, token: &str) -> Result<()> {
        let (payload, provided_sig) = token
            .rsplit_once('.')
            .ok_or_else(|| ApiError::CsrfRejected("Malformed CSRF token".into()))?;
        let provided_sig = hex::decode(provided_sig)
            .map_err(|_| ApiError::CsrfRejected("Malformed CSRF token".into()))?;

        self.keyed_mac(payload)?
            .verify_slice(&provided_sig)
            .map_err(|_| ApiError::CsrfRejected("Invalid CSRF token signature".into()))?;

        let (_nonce, exp) = payload
            .split_once(':')
            .ok_or_else(|| ApiError::CsrfRejected("Malformed CSRF token".into()))?;
        let exp: u64 = exp
            .parse()
            .map_err(|_| ApiError::CsrfRejected("Malformed CSRF token".into()))?;

        if unix_now()? > exp {
            return Err(ApiError::CsrfRejected("CSRF token expired".into()));
        }

        Ok(())
    }

    fn compute_signature(&self, payload: &str) -> Result<String> {
        let mac = self.keyed_mac(payload)?;
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    fn keyed_mac(&self, payload: &str) -> Result<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| ApiError::Internal(format!("HMAC error: {}", e)))?;
        mac.update(payload.as_bytes());
        Ok(mac)
    }
}

fn unix_now() -> Result<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ApiError::Internal(format!("Time error: {}", e)))?
        .as_secs())
}
