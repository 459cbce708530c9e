use crate::config::FORMULA_PREFIXES;
use crate::error::Result;
use std::borrow::Cow;

/// Write a header and rows as delimiter-separated text, quoting only where needed.
pub fn write_delimited<R: AsRef<[String]>>(
    header: &[&str],
    rows: &[R],
    delimiter: u8,
) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row.as_ref())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Prefix values a spreadsheet would evaluate as a formula with `'`.
pub fn sanitize_field(value: &str) -> Cow<'_, str> {
    if value.starts_with(FORMULA_PREFIXES) {
        Cow::Owned(format!("'{value}"))
    } else {
        Cow::Borrowed(value)
    }
}
