/// Decimal places for X, Y and rotation, independent of the precision in the export.
pub const COORDINATE_PRECISION: usize = 3;

/// Gap between columns of the fixed-width layout.
pub const FIXED_WIDTH_COLUMN_GAP: &str = "  ";

/// Spreadsheets treat cells starting with these as formulas.
pub const FORMULA_PREFIXES: [char; 4] = ['=', '+', '-', '@'];

/// JITX appends `$<n>` to package names of instantiated landpatterns.
pub const PACKAGE_INSTANCE_SEPARATOR: char = '$';
