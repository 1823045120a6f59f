//! One-time Ergo payment addresses for ErgoMixer stealth keys.
//!
//! Given a receiver's stealth key, [`generate_address`] derives a fresh
//! pay-to-script address that only the receiver can spend and that cannot be
//! linked to the key or to other addresses derived from it.
//!
//! ```ignore
//! use stealth_core::{generate_address, Network};
//!
//! let address = generate_address(stealth_key, Network::Mainnet)?;
//! println!("{}", stealth_core::default_payment_request_uri(&address));
//! ```

mod address;
pub mod constants;
pub mod error;
pub mod protocol;
mod script;

#[cfg(test)]
mod testing;

pub use secp256k1;
pub use stealth_key;

pub use address::{default_payment_request_uri, payment_request_uri, Network, PaymentAddress};
pub use error::{Error, ErrorKind, Result};
pub use protocol::receiving::StealthReceiver;
pub use protocol::sending::{derive_points, DerivedPoints};
pub use script::StealthScript;
pub use stealth_key::StealthKey;

use secp256k1::rand::{self, CryptoRng, RngCore};

/// Build the payment address locking funds to `points` on `network`.
pub fn encode_address(points: &DerivedPoints, network: Network) -> Result<PaymentAddress> {
    let script = StealthScript::from_points(points)?;

    Ok(PaymentAddress::new(network, script))
}

/// Derive a new payment address for the stealth key `input`, drawing the
/// ephemeral scalars from the thread-local CSPRNG.
pub fn generate_address(input: &str, network: Network) -> Result<PaymentAddress> {
    generate_address_with_rng(input, network, &mut rand::thread_rng())
}

/// Derive a new payment address for the stealth key `input`, drawing the
/// ephemeral scalars from `rng`.
///
/// The key is fully validated before `rng` is touched. No partial output is
/// returned on failure.
pub fn generate_address_with_rng<R: RngCore + CryptoRng>(
    input: &str,
    network: Network,
    rng: &mut R,
) -> Result<PaymentAddress> {
    let u = stealth_key::validate(input).map_err(|e| {
        log::warn!("rejected stealth key: {}", e);
        e
    })?;
    log::debug!("validated stealth key for receiver {}", u);

    let points = derive_points(&u, rng)?;
    log::debug!("derived one-time points");

    let address = encode_address(&points, network)?;
    log::debug!(
        "encoded {} address {}",
        <&str>::from(network),
        address
    );

    Ok(address)
}
