use std::sync::LazyLock;

use secp256k1::rand::{CryptoRng, RngCore};
use secp256k1::{All, PublicKey, Scalar, Secp256k1, SecretKey};

use crate::constants::MAX_SCALAR_ATTEMPTS;
use crate::error::Error;
use crate::protocol::Result;

static SECP: LazyLock<Secp256k1<All>> = LazyLock::new(Secp256k1::new);

/// Process-wide curve context, created on first use and never mutated.
fn secp() -> &'static Secp256k1<All> {
    &SECP
}

/// Draw a uniformly random non-zero scalar below the group order.
///
/// Draws that fall outside `[1, n)` are discarded and drawn again rather than
/// reduced, so no value is favoured. An error from the source, or
/// [`MAX_SCALAR_ATTEMPTS`] rejected draws in a row, is reported as
/// [`Error::RandomSource`].
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<SecretKey> {
    let mut bytes = [0u8; 32];

    for attempt in 0..MAX_SCALAR_ATTEMPTS {
        rng.try_fill_bytes(&mut bytes).map_err(|e| {
            log::warn!("random source failed: {}", e);
            Error::RandomSource(e.to_string())
        })?;

        match SecretKey::from_slice(&bytes) {
            Ok(scalar) => return Ok(scalar),
            Err(_) => log::trace!("draw {} out of scalar range, resampling", attempt),
        }
    }

    log::warn!(
        "random source produced {} invalid scalars in a row",
        MAX_SCALAR_ATTEMPTS
    );
    Err(Error::RandomSource(format!(
        "no valid scalar after {} draws",
        MAX_SCALAR_ATTEMPTS
    )))
}

/// `g·scalar`, using libsecp256k1's constant-time generator multiplication.
pub fn mul_generator(scalar: &SecretKey) -> PublicKey {
    scalar.public_key(secp())
}

/// `point·scalar`, using libsecp256k1's constant-time point multiplication.
pub fn mul_point(point: &PublicKey, scalar: &SecretKey) -> Result<PublicKey> {
    let res = point.mul_tweak(secp(), &Scalar::from(*scalar))?;

    Ok(res)
}
