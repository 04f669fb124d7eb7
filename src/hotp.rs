use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::{OtpCode, OtpHashAlgorithm};

/// Calculates the HMAC digest of the big-endian counter under the given key.
fn calc_digest(key: &[u8], algorithm: OtpHashAlgorithm, counter: u64) -> Vec<u8> {
    let message = counter.to_be_bytes();

    match algorithm {
        OtpHashAlgorithm::SHA1 => {
            let mut mac =
                Hmac::<Sha1>::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(&message);
            mac.finalize().into_bytes().to_vec()
        }
        OtpHashAlgorithm::SHA256 => {
            let mut mac =
                Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(&message);
            mac.finalize().into_bytes().to_vec()
        }
        OtpHashAlgorithm::SHA512 => {
            let mut mac =
                Hmac::<Sha512>::new_from_slice(key).expect("HMAC accepts keys of any length");
            mac.update(&message);
            mac.finalize().into_bytes().to_vec()
        }
    }
}

/// Dynamic truncation of the digest into an integer of at most `digits`
/// decimal digits.
fn truncate(digest: &[u8], digits: u32) -> u32 {
    // The low nibble of the last byte is the offset for any digest length.
    let offset = (digest[digest.len() - 1] & 0x0F) as usize;

    let hash_part = u32::from_be_bytes([
        digest[offset],
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    // Clear the sign bit before reducing.
    (hash_part & 0x7FFF_FFFF) % u32::pow(10, digits)
}

/// Computes the HOTP code for one counter value (RFC 4226).
///
/// `key` is the decoded secret, `counter` is serialized as 8 bytes
/// big-endian. Expects `digits` in 6..=8.
pub fn generate(key: &[u8], counter: u64, algorithm: OtpHashAlgorithm, digits: u32) -> OtpCode {
    let digest = calc_digest(key, algorithm, counter);

    OtpCode::new(truncate(&digest, digits), digits)
}
