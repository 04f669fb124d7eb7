use std::str::FromStr;

use crate::{percent, OtpConfig, OtpError, OtpHashAlgorithm, ParseWarning};

pub(crate) const OTPAUTH_SCHEME: &str = "otpauth://";

const URI_SECRET_QUERY: &str = "secret";
const URI_HASH_QUERY: &str = "algorithm";
const URI_PERIOD_QUERY: &str = "period";
const URI_DIGITS_QUERY: &str = "digits";

pub(crate) struct ParsedUri {
    pub(crate) secret: String,
    pub(crate) config: OtpConfig,
    pub(crate) warnings: Vec<ParseWarning>,
}

/// Extracts the secret and the generation parameters from an `otpauth://`
/// URI. Only the query string matters; the label and the URI type are not
/// inspected.
///
/// A missing query string or secret is fatal, as is a secret value that
/// fails percent-decoding. Unusable `digits`, `algorithm` and `period`
/// values only produce a warning, and unrecognized keys are ignored.
pub(crate) fn parse(uri: &str) -> Result<ParsedUri, OtpError> {
    let (_, query) = uri.split_once('?').ok_or(OtpError::InvalidUri)?;

    let mut secret = None;
    let mut config = OtpConfig::default();
    let mut warnings = Vec::new();

    for field in query.split('&') {
        let (key, value) = field.split_once('=').unwrap_or((field, ""));

        match key {
            URI_SECRET_QUERY => secret = Some(value),
            URI_DIGITS_QUERY => match value {
                "6" => config.digits = 6,
                "7" => config.digits = 7,
                "8" => config.digits = 8,
                _ => warnings.push(ParseWarning::InvalidDigits(value.to_string())),
            },
            URI_HASH_QUERY => match OtpHashAlgorithm::from_str(value) {
                Ok(algorithm) => config.algorithm = algorithm,
                Err(_) => warnings.push(ParseWarning::InvalidAlgorithm(value.to_string())),
            },
            URI_PERIOD_QUERY => match value.parse::<u64>() {
                Ok(period @ 1..=120) => config.period = period,
                _ => {
                    config.period = 30;
                    warnings.push(ParseWarning::InvalidPeriod(value.to_string()));
                }
            },
            _ => (),
        }
    }

    let secret = secret.ok_or(OtpError::MissingSecret)?;
    let secret = percent::decode(secret)?;

    Ok(ParsedUri {
        secret,
        config,
        warnings,
    })
}
