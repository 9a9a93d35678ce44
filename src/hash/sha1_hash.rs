use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use base16ct::lower::encode_string;
use base16ct::mixed::decode;
use constant_time_eq::constant_time_eq_n;
use thiserror::Error;

const LEN: usize = 20;

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(arbitrary::Arbitrary))]
pub struct Sha1Hash([u8; LEN]);

impl Sha1Hash {
    pub const LEN: usize = LEN;
    pub const HEX_LEN: usize = 2 * LEN;

    pub const fn new(bytes: [u8; LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        encode_string(&self.0[..])
    }
}

impl PartialEq for Sha1Hash {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq_n(&self.0, &other.0)
    }
}

impl Eq for Sha1Hash {}

impl From<[u8; LEN]> for Sha1Hash {
    fn from(bytes: [u8; LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Sha1Hash {
    type Error = HashTryFromError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; LEN] = bytes.try_into().map_err(|_| HashTryFromError(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl Display for Sha1Hash {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for Sha1Hash {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Sha1Hash({})", self.to_hex())
    }
}

impl FromStr for Sha1Hash {
    type Err = HashParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `decode` silently accepts short input.
        if s.len() != Self::HEX_LEN {
            return Err(HashParseError::Length(s.len()));
        }
        let mut bytes = [0_u8; LEN];
        decode(s.as_bytes(), &mut bytes[..]).map_err(|_| HashParseError::Hex(s.into()))?;
        Ok(Self(bytes))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashParseError {
    #[error("Expected {len} hex characters, got {0}", len = Sha1Hash::HEX_LEN)]
    Length(usize),
    #[error("Invalid hex string: {0:?}")]
    Hex(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Expected {len} bytes, got {0}", len = Sha1Hash::LEN)]
pub struct HashTryFromError(pub usize);
