use crate::config::{COORDINATE_PRECISION, FIXED_WIDTH_COLUMN_GAP};
use crate::csv_util::{sanitize_field, write_delimited};
use crate::error::Result;
use crate::pnp::{PlacedComponent, Side};
use itertools::Itertools;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Parsed from and displayed as `csv`, `tsv` or `txt`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Comma separated
    Csv,
    /// Tab separated
    Tsv,
    /// Aligned columns with a dashed line under the header
    #[strum(to_string = "txt")]
    FixedWidth,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter)]
enum Column {
    RefDes,
    X,
    Y,
    Rotation,
    PartNumber,
    Package,
    Side,
}

impl Column {
    fn header(&self) -> &'static str {
        match self {
            Column::RefDes => "RefDes",
            Column::X => "X",
            Column::Y => "Y",
            Column::Rotation => "Rotation",
            Column::PartNumber => "PN",
            Column::Package => "Package",
            Column::Side => "Side",
        }
    }

    fn fixed_width_label(&self) -> &'static str {
        match self {
            Column::RefDes => "REF DES",
            Column::X => "X COORD",
            Column::Y => "Y COORD",
            Column::Rotation => "ROT",
            Column::PartNumber => "PN",
            Column::Package => "PACKAGE",
            Column::Side => "SIDE",
        }
    }

    fn cell(&self, component: &PlacedComponent) -> String {
        match self {
            Column::RefDes => component.designator.to_string(),
            Column::X => format_coordinate(component.x),
            Column::Y => format_coordinate(component.y),
            Column::Rotation => format_coordinate(component.rotation),
            Column::PartNumber => component
                .part_number
                .as_deref()
                .map(|pn| sanitize_field(pn).into_owned())
                .unwrap_or_default(),
            Column::Package => sanitize_field(&component.package).into_owned(),
            Column::Side => component.side.to_string(),
        }
    }
}

/// One text blob ready to be written somewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedOutput {
    /// Set when the output only holds one board side.
    pub side: Option<Side>,
    pub text: String,
}

impl RenderedOutput {
    /// `_top` / `_bottom` for per-side outputs, to be appended to the file stem.
    pub fn name_suffix(&self) -> Option<String> {
        self.side.map(|side| format!("_{}", side.tag()))
    }
}

/// Render components in the requested format.
///
/// Without `split_by_side` the result is a single output with a `Side` column.
/// With it, there is one output per side that has components, Top first,
/// and the `Side` column is left out.
pub fn render(
    components: &[PlacedComponent],
    format: OutputFormat,
    split_by_side: bool,
) -> Result<Vec<RenderedOutput>> {
    if !split_by_side {
        let text = render_table(components.iter(), format, &Column::iter().collect_vec())?;
        return Ok(vec![RenderedOutput { side: None, text }]);
    }

    let columns = Column::iter().filter(|c| *c != Column::Side).collect_vec();
    let mut outputs = Vec::new();
    for side in Side::iter() {
        let mut on_side = components.iter().filter(|c| c.side == side).peekable();
        if on_side.peek().is_none() {
            continue;
        }
        let text = render_table(on_side, format, &columns)?;
        outputs.push(RenderedOutput {
            side: Some(side),
            text,
        });
    }
    Ok(outputs)
}

fn render_table<'a>(
    components: impl Iterator<Item = &'a PlacedComponent>,
    format: OutputFormat,
    columns: &[Column],
) -> Result<String> {
    let rows = components
        .map(|component| columns.iter().map(|col| col.cell(component)).collect_vec())
        .collect_vec();
    match format {
        OutputFormat::Csv => write_delimited(&headers(columns), &rows, b','),
        OutputFormat::Tsv => write_delimited(&headers(columns), &rows, b'\t'),
        OutputFormat::FixedWidth => Ok(fixed_width(columns, &rows)),
    }
}

fn headers(columns: &[Column]) -> Vec<&'static str> {
    columns.iter().map(Column::header).collect()
}

fn fixed_width(columns: &[Column], rows: &[Vec<String>]) -> String {
    let widths = columns
        .iter()
        .enumerate()
        .map(|(idx, col)| {
            rows.iter()
                .map(|row| row[idx].chars().count())
                .chain([col.fixed_width_label().chars().count()])
                .max()
                .unwrap_or_default()
        })
        .collect_vec();
    let mut text = pad_cells(columns.iter().map(Column::fixed_width_label), &widths);
    text.push('\n');
    text += &widths.iter().map(|w| "-".repeat(*w)).join(FIXED_WIDTH_COLUMN_GAP);
    text.push('\n');
    for row in rows {
        text += &pad_cells(row.iter().map(String::as_str), &widths);
        text.push('\n');
    }
    text
}

fn pad_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .join(FIXED_WIDTH_COLUMN_GAP)
}

fn format_coordinate(value: f64) -> String {
    let text = format!("{:.*}", COORDINATE_PRECISION, value);
    // -0.0 and tiny negatives that round to zero
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}
