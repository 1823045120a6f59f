//! The ErgoTree guarding a stealth output.
//!
//! The tree is `proveDHTuple(Gr, Gy, Ur, Uy)` with the four points stored as
//! segregated `Coll[Byte]` constants:
//!
//! ```text
//! 10 04 | 0e 21 <Gr> | 0e 21 <Gy> | 0e 21 <Ur> | 0e 21 <Uy> | ce ee7300 ee7301 ee7302 ee7303
//! ```

use secp256k1::PublicKey;

use crate::constants::{
    COLL_BYTE_TYPE, POINT_SLOTS, POINT_SLOT_LEN, SCRIPT_LEN, TREE_BODY, TREE_HEADER,
};
use crate::error::{Error, Result};
use crate::protocol::sending::DerivedPoints;

/// Length prefix written before every point constant.
const SLOT_LEN_PREFIX: u8 = 0x21;

/// Offset of the first constant, after the header and the constant count.
const FIRST_SLOT: usize = 2;

const SLOT_STRIDE: usize = 2 + POINT_SLOT_LEN;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct StealthScript {
    bytes: Vec<u8>,
    points: DerivedPoints,
}

impl StealthScript {
    /// Build the output script for `points`.
    pub fn from_points(points: &DerivedPoints) -> Result<Self> {
        let compressed = points.compressed();
        let slots: [&[u8]; POINT_SLOTS] = [
            &compressed[0],
            &compressed[1],
            &compressed[2],
            &compressed[3],
        ];
        let bytes = assemble(slots)?;

        Ok(Self {
            bytes,
            points: *points,
        })
    }

    /// Parse a serialized stealth script, checking every byte of the template.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SCRIPT_LEN {
            return Err(Error::Encoding(format!(
                "wrong script length, expected {}, got {}",
                SCRIPT_LEN,
                bytes.len()
            )));
        }
        if bytes[0] != TREE_HEADER || usize::from(bytes[1]) != POINT_SLOTS {
            return Err(Error::Encoding(format!(
                "unexpected tree header {:02x}{:02x}",
                bytes[0], bytes[1]
            )));
        }

        let mut points = Vec::with_capacity(POINT_SLOTS);
        for i in 0..POINT_SLOTS {
            let offset = FIRST_SLOT + i * SLOT_STRIDE;
            if bytes[offset] != COLL_BYTE_TYPE || bytes[offset + 1] != SLOT_LEN_PREFIX {
                return Err(Error::Encoding(format!("malformed constant {}", i)));
            }
            let point = PublicKey::from_slice(&bytes[offset + 2..offset + SLOT_STRIDE])?;
            points.push(point);
        }

        let body = FIRST_SLOT + POINT_SLOTS * SLOT_STRIDE;
        if bytes[body..] != TREE_BODY {
            return Err(Error::Encoding("not a proveDHTuple script".to_string()));
        }

        Ok(Self {
            bytes: bytes.to_vec(),
            points: DerivedPoints::new(points[0], points[1], points[2], points[3]),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn points(&self) -> &DerivedPoints {
        &self.points
    }
}

fn assemble(slots: [&[u8]; POINT_SLOTS]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(SCRIPT_LEN);
    bytes.push(TREE_HEADER);
    bytes.push(POINT_SLOTS as u8);

    for (i, slot) in slots.iter().enumerate() {
        if slot.len() != POINT_SLOT_LEN || usize::from(SLOT_LEN_PREFIX) != slot.len() {
            return Err(Error::Encoding(format!(
                "slot {} holds {} bytes, expected {}",
                i,
                slot.len(),
                SLOT_LEN_PREFIX
            )));
        }
        bytes.push(COLL_BYTE_TYPE);
        bytes.push(SLOT_LEN_PREFIX);
        bytes.extend_from_slice(slot);
    }
    bytes.extend_from_slice(&TREE_BODY);

    Ok(bytes)
}
