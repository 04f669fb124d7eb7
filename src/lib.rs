pub mod base32;
pub mod hotp;
pub mod totp;

pub(crate) mod percent;
pub(crate) mod uri;

use std::{fmt::Display, str::FromStr};

#[derive(Debug, thiserror::Error)]
pub enum OtpError {
    #[error("no secret provided")]
    NoSecretProvided,
    #[error("invalid base32 character {0:?} in the secret")]
    InvalidCharacter(char),
    #[error("decoded secret exceeds {0} bytes")]
    SecretTooLong(usize),
    #[error("invalid otpauth URI, no query string")]
    InvalidUri,
    #[error("no secret in the otpauth URI")]
    MissingSecret,
    #[error("malformed percent escape in the secret")]
    MalformedEscape,
    #[error("invalid hashing algorithm, found {0}. Expected one of: SHA1, SHA256 or SHA512")]
    InvalidHashingAlgorithm(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OtpHashAlgorithm {
    #[default]
    SHA1,
    SHA256,
    SHA512,
}

impl Display for OtpHashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SHA1 => write!(f, "SHA1"),
            Self::SHA256 => write!(f, "SHA256"),
            Self::SHA512 => write!(f, "SHA512"),
        }
    }
}

impl FromStr for OtpHashAlgorithm {
    type Err = OtpError;

    // Exact match only: the otpauth parameter values are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHA1" => Ok(Self::SHA1),
            "SHA256" => Ok(Self::SHA256),
            "SHA512" => Ok(Self::SHA512),
            _ => Err(OtpError::InvalidHashingAlgorithm(s.to_string())),
        }
    }
}

/// Resolved generation parameters, either the defaults or the values taken
/// from an `otpauth://` URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpConfig {
    pub digits: u32,
    pub algorithm: OtpHashAlgorithm,
    pub period: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            digits: 6,
            algorithm: OtpHashAlgorithm::SHA1,
            period: 30,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OtpCode {
    code: u32,
    digits: u32,
}

impl OtpCode {
    pub(crate) fn new(code: u32, digits: u32) -> Self {
        Self { code, digits }
    }

    pub fn integer(&self) -> u32 {
        self.code
    }
}

impl Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:0padding$}",
            self.code,
            padding = (self.digits as usize)
        )
    }
}

/// A recognized URI parameter with an unusable value. The parameter keeps
/// its default; generation continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    InvalidDigits(String),
    InvalidAlgorithm(String),
    InvalidPeriod(String),
}

impl Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDigits(value) => write!(f, "invalid digits {value:?}, expected 6, 7 or 8"),
            Self::InvalidAlgorithm(value) => {
                write!(f, "invalid algorithm {value:?}, expected SHA1, SHA256 or SHA512")
            }
            Self::InvalidPeriod(value) => {
                write!(f, "invalid period {value:?}, expected 1 to 120 seconds")
            }
        }
    }
}
