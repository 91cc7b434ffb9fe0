use anyhow::{anyhow, Result};
use tracing::debug;

/// Converts an internationalized domain name to its ASCII (punycode) form
pub fn punycode_encode(input: &str) -> Result<String> {
    let ascii = idna::domain_to_ascii(input).map_err(|e| {
        debug!("IDNA to-ASCII conversion of '{}' failed: {:?}", input, e);
        anyhow!("Error converting {} to punycode", input)
    })?;
    debug!("Converted {} to {}", input, ascii);
    Ok(ascii)
}

/// Converts a punycode domain name back to Unicode
pub fn punycode_decode(input: &str) -> Result<String> {
    let (unicode, result) = idna::domain_to_unicode(input);
    if let Err(e) = result {
        debug!("IDNA to-Unicode conversion of '{}' failed: {:?}", input, e);
        return Err(anyhow!("Error converting {} from punycode", input));
    }
    debug!("Converted {} to {}", input, unicode);
    Ok(unicode)
}
