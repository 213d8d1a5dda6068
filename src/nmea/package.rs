use crate::error::{NmeaError, Result};

/// XOR of every payload byte
pub fn checksum_byte(payload: &str) -> u8 {
    payload.bytes().fold(0, |acc, b| acc ^ b)
}

/// Checksum of a payload as uppercase hex.
///
/// Not zero-padded: a checksum of 5 renders as `"5"`.
pub fn compute_checksum(payload: &str) -> String {
    format!("{:X}", checksum_byte(payload))
}

/// Frame a payload as `$<payload>*<checksum>`
///
/// # Example
/// ```
/// use seabots_nmea::nmea::create_package;
///
/// assert_eq!(create_package("PFEC,GPint,RMC05"), "$PFEC,GPint,RMC05*2D");
/// ```
pub fn create_package(payload: &str) -> String {
    format!("${}*{}", payload, compute_checksum(payload))
}

/// Check a framed sentence and return its payload.
///
/// Trailing `\r`/`\n` are ignored. The checksum field is compared by value, so
/// both the unpadded `*5` produced by [`create_package`] and the padded `*05`
/// used by most receivers verify.
pub fn verify_package(sentence: &str) -> Result<&str> {
    let body = sentence
        .trim_end_matches(['\r', '\n'])
        .strip_prefix('$')
        .ok_or_else(|| NmeaError::MalformedSentence("missing '$' start delimiter".to_string()))?;

    let (payload, checksum) = body
        .rsplit_once('*')
        .ok_or_else(|| NmeaError::MalformedSentence("missing '*' checksum delimiter".to_string()))?;

    if checksum.is_empty() || checksum.len() > 2 {
        return Err(NmeaError::MalformedSentence(format!(
            "checksum field '{}' is not one or two hex digits",
            checksum
        )));
    }
    let expected = u8::from_str_radix(checksum, 16).map_err(|_| {
        NmeaError::MalformedSentence(format!("checksum field '{}' is not hex", checksum))
    })?;

    let computed = checksum_byte(payload);
    if computed != expected {
        return Err(NmeaError::ChecksumMismatch {
            expected: checksum.to_string(),
            computed: compute_checksum(payload),
        });
    }

    Ok(payload)
}
