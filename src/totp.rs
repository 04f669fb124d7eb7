use zeroize::Zeroizing;

use crate::{base32, hotp, uri, OtpCode, OtpConfig, OtpError, ParseWarning};

/// A single TOTP computation: decoded key material plus the resolved
/// generation parameters.
#[derive(Debug)]
pub struct Totp {
    key: Zeroizing<Vec<u8>>,
    config: OtpConfig,
}

impl Totp {
    /// Builds a [`Totp`] from one line of input, either a bare base32
    /// secret or an `otpauth://` provisioning URI.
    ///
    /// Whitespace is stripped from anywhere in the line, not just the
    /// ends, before deciding which form it is. Unusable `digits`,
    /// `algorithm` and `period` values in a URI are returned as warnings
    /// and the defaults used in their place; everything else that goes
    /// wrong is fatal.
    pub fn from_line(line: &str) -> Result<(Self, Vec<ParseWarning>), OtpError> {
        let normalized: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if normalized.is_empty() {
            return Err(OtpError::NoSecretProvided);
        }

        let (secret_text, config, warnings) = if normalized.starts_with(uri::OTPAUTH_SCHEME) {
            let parsed = uri::parse(&normalized)?;
            (parsed.secret, parsed.config, parsed.warnings)
        } else {
            (normalized, OtpConfig::default(), Vec::new())
        };

        let key = Zeroizing::new(base32::decode(&secret_text)?);
        if key.is_empty() {
            return Err(OtpError::NoSecretProvided);
        }

        Ok((Self { key, config }, warnings))
    }

    pub fn config(&self) -> OtpConfig {
        self.config
    }

    /// Generates the code for the given seconds since the Unix epoch.
    pub fn generate(&self, seconds_since_epoch: u64) -> OtpCode {
        let counter = seconds_since_epoch / self.config.period;

        hotp::generate(&self.key, counter, self.config.algorithm, self.config.digits)
    }

    /// Seconds left until the code changes.
    pub fn remaining_seconds(&self, seconds_since_epoch: u64) -> u64 {
        self.config.period - seconds_since_epoch % self.config.period
    }
}
