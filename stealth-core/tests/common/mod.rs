use std::collections::VecDeque;

use stealth_core::secp256k1::rand::{self, CryptoRng, RngCore};

pub const KEY_3G: &str = "stealth6nEZsuNhDnknxVTf1YH454nxiB5MpVSN7gQktMRioqRi9YbDYu";

pub const G: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
pub const G2: &str = "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";
pub const G3: &str = "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";
pub const G6: &str = "03fff97bd5755eeea420453a14355235d382f6472f8568a18b2f057a1460297556";

/// Mainnet address for receiver `3g` with `r = 1`, `y = 2`.
pub const MAINNET_ADDRESS: &str = "6QBPS6hCNZDDDnSPaWdiKNdEDpAg5dk3RGjTjRCzxMuRBcKzQZaXD5Wquo4Zfr91evk42aToovcUjQwTNv1TwnZ2DC9Rnd5WoVZG5oE3aoUS7oeJDLws8WqQ1Bq9FrU8bWdvPx94ntxgBTxFbkFThBu9R25kXcoHCoCcDGhqSEfr6SrcLKJ3fgRood22iq2hFRmdYPEK3VLaFMUr3gY52PNNji";
pub const TESTNET_ADDRESS: &str = "acM87onssDTAkFMjvtXc767bdTSGXMMQ2ooxPQ5JE7ycLbdyRdWAci7pJMoU4H3511ddrZnq4J3LpyNhZsbesec6HKf4txjcPDYCq4QXMx1tuE5bAA33TXcvo1hEDJ8Cm7hT3X5tJjoixHr6NyLnekQyn2YduiB2bcjd5SrRs3wxmhSqtGJ4PM1qTRLmG1ST5AW8pKYLUaSR5H22JNS6t6AujX";

pub fn scalar_bytes(n: u8) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[31] = n;
    bytes
}

/// Hands out prepared 32-byte draws, then fails. Mirrors the crate's internal
/// `testing::FixedScalars`.
pub struct FixedScalars {
    draws: VecDeque<[u8; 32]>,
}

impl FixedScalars {
    pub fn new(draws: &[[u8; 32]]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngCore for FixedScalars {
    fn next_u32(&mut self) -> u32 {
        unimplemented!()
    }

    fn next_u64(&mut self) -> u64 {
        unimplemented!()
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
