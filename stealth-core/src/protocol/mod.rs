//! Dual-key stealth address protocol on secp256k1.
//!
//! A receiver publishes a single point `u = g·x`. A sender draws two ephemeral
//! scalars `r` and `y` and computes `(g·r, g·y, u·r, u·y)`. Only the holder of
//! `x` can prove `u·r = (g·r)·x` and `u·y = (g·y)·x`, which is exactly what the
//! `proveDHTuple` output script demands.
//!
//! ## Module Organization
//!
//! - [`sending`] - Derive the one-time points for a receiver's stealth key
//! - [`receiving`] - Publish a stealth key and recognise outputs paid to it
//! - [`utils`] - Scalar sampling and curve arithmetic shared by both sides
//!
//! ## Examples
//!
//! ```ignore
//! use stealth_core::protocol::sending::derive_points;
//!
//! let u = stealth_key::validate(input)?;
//! let points = derive_points(&u, &mut rng)?;
//! ```
pub mod receiving;
pub mod sending;
pub mod utils;

pub use crate::error::Result;
