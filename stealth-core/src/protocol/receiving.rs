//! Receiver side of the protocol.
//!
//! A [`StealthReceiver`] holds the secret `x` behind a published stealth key
//! `u = g·x`. An output belongs to it when `Gr·x == Ur` and `Gy·x == Uy`.

use secp256k1::rand::{CryptoRng, RngCore};
use secp256k1::{PublicKey, SecretKey};
use stealth_key::StealthKey;

use crate::address::PaymentAddress;
use crate::protocol::sending::DerivedPoints;
use crate::protocol::utils::{mul_generator, mul_point, random_scalar};
use crate::protocol::Result;
use crate::script::StealthScript;

#[derive(Clone)]
pub struct StealthReceiver {
    secret: SecretKey,
    pubkey: PublicKey,
}

impl StealthReceiver {
    pub fn new(secret: SecretKey) -> Self {
        Self {
            secret,
            pubkey: mul_generator(&secret),
        }
    }

    /// Create a receiver with a freshly drawn secret.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Ok(Self::new(random_scalar(rng)?))
    }

    pub fn get_pubkey(&self) -> PublicKey {
        self.pubkey
    }

    /// The key to publish so senders can derive addresses for this receiver.
    pub fn stealth_key(&self) -> StealthKey {
        StealthKey::new(self.pubkey)
    }

    pub fn owns(&self, points: &DerivedPoints) -> bool {
        let shares_r = matches!(mul_point(&points.gr(), &self.secret), Ok(p) if p == points.ur());
        let shares_y = matches!(mul_point(&points.gy(), &self.secret), Ok(p) if p == points.uy());

        shares_r && shares_y
    }

    pub fn owns_script(&self, script: &StealthScript) -> bool {
        self.owns(script.points())
    }

    /// Decode `address` and check whether it pays this receiver.
    pub fn owns_address(&self, address: &str) -> Result<bool> {
        let address = PaymentAddress::try_from(address)?;

        Ok(self.owns_script(address.get_script()))
    }
}
