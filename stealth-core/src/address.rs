use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    ADDRESS_CHECKSUM_LEN, DEFAULT_EXPLORER_HOST, MAINNET_PREFIX, P2S_ADDRESS_TYPE, TESTNET_PREFIX,
};
use crate::error::{Error, Result};
use crate::script::StealthScript;

/// The Ergo network an address is valid on.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// High nibble of the address prefix byte.
    pub fn prefix(&self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_PREFIX,
            Network::Testnet => TESTNET_PREFIX,
        }
    }
}

impl From<Network> for &str {
    fn from(value: Network) -> Self {
        match value {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl TryFrom<&str> for Network {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let res = match value {
            "mainnet" | "main" => Self::Mainnet,
            "testnet" | "test" => Self::Testnet,
            _ => return Err(Error::Network(value.to_string())),
        };
        Ok(res)
    }
}

/// A pay-to-script address locking funds with a stealth script.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct PaymentAddress {
    network: Network,
    script: StealthScript,
}

impl PaymentAddress {
    pub fn new(network: Network, script: StealthScript) -> Self {
        Self { network, script }
    }

    pub fn get_network(&self) -> Network {
        self.network
    }

    pub fn get_script(&self) -> &StealthScript {
        &self.script
    }

    fn encode(&self) -> String {
        let mut data = Vec::with_capacity(1 + self.script.as_bytes().len() + ADDRESS_CHECKSUM_LEN);
        data.push(self.network.prefix() + P2S_ADDRESS_TYPE);
        data.extend_from_slice(self.script.as_bytes());

        let checksum = stealth_key::checksum(&data);
        data.extend_from_slice(&checksum);

        bs58::encode(data).into_string()
    }
}

impl fmt::Display for PaymentAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<PaymentAddress> for String {
    fn from(val: PaymentAddress) -> Self {
        val.encode()
    }
}

impl TryFrom<&str> for PaymentAddress {
    type Error = Error;

    fn try_from(addr: &str) -> Result<Self> {
        let data = bs58::decode(addr)
            .into_vec()
            .map_err(|e| Error::Address(e.to_string()))?;

        if data.len() <= 1 + ADDRESS_CHECKSUM_LEN {
            return Err(Error::Address(format!(
                "address too short: {} bytes",
                data.len()
            )));
        }

        let (body, checksum) = data.split_at(data.len() - ADDRESS_CHECKSUM_LEN);
        if stealth_key::checksum(body)[..] != checksum[..] {
            return Err(Error::Address("invalid checksum".to_string()));
        }

        let prefix = body[0];
        if prefix & 0x0f != P2S_ADDRESS_TYPE {
            return Err(Error::Address(format!(
                "unsupported address type {}",
                prefix & 0x0f
            )));
        }
        let network = match prefix & 0xf0 {
            MAINNET_PREFIX => Network::Mainnet,
            TESTNET_PREFIX => Network::Testnet,
            other => return Err(Error::Address(format!("unknown network prefix {:#04x}", other))),
        };

        let script = StealthScript::from_bytes(&body[1..])?;

        Ok(PaymentAddress::new(network, script))
    }
}

impl TryFrom<String> for PaymentAddress {
    type Error = Error;

    fn try_from(addr: String) -> Result<Self> {
        addr.as_str().try_into()
    }
}

/// Explorer link asking a wallet to pay `address`.
pub fn payment_request_uri(address: &PaymentAddress, explorer_host: &str) -> String {
    format!("https://{}/payment-request?address={}", explorer_host, address)
}

/// [`payment_request_uri`] on the public Ergo explorer.
pub fn default_payment_request_uri(address: &PaymentAddress) -> String {
    payment_request_uri(address, DEFAULT_EXPLORER_HOST)
}
