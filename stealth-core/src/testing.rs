//! Deterministic random sources for unit tests.

use std::collections::VecDeque;

use secp256k1::rand::{self, CryptoRng, RngCore};

/// Bytes of a source that always produces zero, which is never a valid scalar.
pub(crate) const STUCK_SOURCE: [u8; 32] = [0u8; 32];

/// Big-endian encoding of a small scalar.
pub(crate) fn scalar_bytes(n: u8) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[31] = n;
    bytes
}

/// Yields the given 32-byte values in order, then reports an error.
pub(crate) struct FixedScalars {
    draws: VecDeque<[u8; 32]>,
}

impl FixedScalars {
    pub(crate) fn new(draws: &[[u8; 32]]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngCore for FixedScalars {
    fn next_u32(&mut self) -> u32 {
        unimplemented!("fixed source only hands out whole scalars")
    }

    fn next_u64(&mut self) -> u64 {
        unimplemented!("fixed source only hands out whole scalars")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).unwrap()
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        if dest.len() != 32 {
            return Err(rand::Error::new("fixed source only hands out 32-byte draws"));
        }
        let next = self
            .draws
            .pop_front()
            .ok_or_else(|| rand::Error::new("fixed source exhausted"))?;
        dest.copy_from_slice(&next);
        Ok(())
    }
}

impl CryptoRng for FixedScalars {}

/// A source that is never available.
pub(crate) struct FailingSource;

impl RngCore for FailingSource {
    fn next_u32(&mut self) -> u32 {
        unimplemented!()
    }

    fn next_u64(&mut self) -> u64 {
        unimplemented!()
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unimplemented!()
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new("entropy source unavailable"))
    }
}

impl CryptoRng for FailingSource {}
