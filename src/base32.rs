use crate::OtpError;

/// Upper bound on decoded key material.
pub const MAX_SECRET_LEN: usize = 1024;

fn value(c: char) -> Result<u8, OtpError> {
    match c {
        'A'..='Z' => Ok(c as u8 - b'A'),
        '2'..='7' => Ok(c as u8 - b'2' + 26),
        _ => Err(OtpError::InvalidCharacter(c)),
    }
}

/// Decodes an RFC 4648 base32 string (upper-case alphabet, no padding)
/// into raw bytes.
///
/// Input is consumed in groups of up to 8 characters, each group emitting
/// 5 bytes. A final group shorter than 8 characters is decoded as if the
/// missing characters had the value 0 and still emits all 5 bytes, so
/// inputs whose length is not a multiple of 8 gain trailing zero-derived
/// bytes. Keys shorter than the HMAC block size are zero-padded by HMAC
/// anyway, so those extra bytes leave the generated codes unchanged.
pub fn decode(text: &str) -> Result<Vec<u8>, OtpError> {
    let mut out = Vec::with_capacity(text.len() / 8 * 5 + 5);
    let mut chars = text.chars();

    loop {
        let mut values = [0u8; 8];
        let mut taken = 0;
        for slot in &mut values {
            match chars.next() {
                Some(c) => {
                    *slot = value(c)?;
                    taken += 1;
                }
                None => break,
            }
        }
        if taken == 0 {
            break;
        }

        if out.len() + 5 > MAX_SECRET_LEN {
            return Err(OtpError::SecretTooLong(MAX_SECRET_LEN));
        }

        out.push((values[0] << 3) | (values[1] >> 2));
        out.push(((values[1] & 0x03) << 6) | (values[2] << 1) | (values[3] >> 4));
        out.push(((values[3] & 0x0F) << 4) | (values[4] >> 1));
        out.push(((values[4] & 0x01) << 7) | (values[5] << 2) | (values[6] >> 3));
        out.push(((values[6] & 0x07) << 5) | values[7]);
    }

    Ok(out)
}
