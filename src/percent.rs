use crate::OtpError;

/// Decodes `%XX` escapes in a URI component, copying everything else
/// verbatim. A `%` not followed by two hex digits is an error.
pub(crate) fn decode(text: &str) -> Result<String, OtpError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let hi = chars.next().and_then(|c| c.to_digit(16));
        let lo = chars.next().and_then(|c| c.to_digit(16));
        match (hi, lo) {
            (Some(hi), Some(lo)) => out.push(((hi << 4 | lo) as u8) as char),
            _ => return Err(OtpError::MalformedEscape),
        }
    }

    Ok(out)
}
