use crate::error::Result;
use std::fs;
use std::path::Path;

/// Exports are usually UTF-8, but files that went through other tools end up as UTF-16 with a BOM
/// or in a legacy 8-bit code page.
pub fn read_with_unknown_encoding(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_unknown_encoding(&bytes))
}

pub fn decode_unknown_encoding(buf: &[u8]) -> String {
    if let Some((encoding, _bom_len)) = encoding_rs::Encoding::for_bom(buf) {
        // decode() sniffs and strips the BOM itself
        return encoding.decode(buf).0.into_owned();
    }
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(buf, true);
    let encoding = detector.guess(None, true);
    log::debug!("Guessed input encoding: {}", encoding.name());
    encoding.decode(buf).0.into_owned()
}
