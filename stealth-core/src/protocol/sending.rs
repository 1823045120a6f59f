//! One-time point derivation for sending.
//!
//! [`derive_points`] turns a receiver's point `u` into the four points
//! embedded in a stealth output. Every call draws fresh scalars, so calling it
//! twice for the same receiver yields two unrelated outputs.

use secp256k1::rand::{CryptoRng, RngCore};
use secp256k1::PublicKey;

use crate::constants::POINT_SLOT_LEN;
use crate::protocol::utils::{mul_generator, mul_point, random_scalar};
use crate::protocol::Result;

/// The public values of one stealth output: `g·r`, `g·y`, `u·r` and `u·y`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DerivedPoints {
    gr: PublicKey,
    gy: PublicKey,
    ur: PublicKey,
    uy: PublicKey,
}

impl DerivedPoints {
    pub fn new(gr: PublicKey, gy: PublicKey, ur: PublicKey, uy: PublicKey) -> Self {
        Self { gr, gy, ur, uy }
    }

    pub fn gr(&self) -> PublicKey {
        self.gr
    }

    pub fn gy(&self) -> PublicKey {
        self.gy
    }

    pub fn ur(&self) -> PublicKey {
        self.ur
    }

    pub fn uy(&self) -> PublicKey {
        self.uy
    }

    /// Compressed serializations in script order `(Gr, Gy, Ur, Uy)`.
    pub fn compressed(&self) -> [[u8; POINT_SLOT_LEN]; 4] {
        [
            self.gr.serialize(),
            self.gy.serialize(),
            self.ur.serialize(),
            self.uy.serialize(),
        ]
    }

    /// Hex of each compressed point, in script order.
    pub fn to_hex(&self) -> [String; 4] {
        self.compressed().map(hex::encode)
    }
}

/// Derive the points of a fresh stealth output for the receiver point `u`.
///
/// Two ephemeral scalars `r` and `y` are drawn from `rng`, used for the four
/// multiplications and dropped before returning. They are never logged.
///
/// # Errors
///
/// This function will return an error if:
///
/// * `rng` fails or keeps producing out-of-range scalars.
/// * Edge cases are hit during elliptic curve computation (extremely unlikely).
pub fn derive_points<R: RngCore + CryptoRng>(u: &PublicKey, rng: &mut R) -> Result<DerivedPoints> {
    let r = random_scalar(rng)?;
    let y = random_scalar(rng)?;

    let gr = mul_generator(&r);
    let gy = mul_generator(&y);
    let ur = mul_point(u, &r)?;
    let uy = mul_point(u, &y)?;

    Ok(DerivedPoints { gr, gy, ur, uy })
}
