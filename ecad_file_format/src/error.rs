use crate::Designator;

pub type Result<T, E = PnpError> = std::result::Result<T, E>;

/// Everything that can stop a pick-and-place export. There is no partial output:
/// any of these aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum PnpError {
    #[error("Document has no <{0}> section")]
    MissingSection(&'static str),

    #[error("{designator}: missing required field {field}")]
    MissingField {
        designator: Designator,
        field: &'static str,
    },

    #[error("Placement instance #{index} has no DESIGNATOR")]
    MissingDesignator { index: usize },

    #[error("{designator}: {field} is not a finite number: '{value}'")]
    InvalidNumber {
        designator: Designator,
        field: &'static str,
        value: String,
    },

    #[error("{designator}: unknown board side '{value}'")]
    UnknownSide {
        designator: Designator,
        value: String,
    },

    #[error("{0}: designator is placed more than once")]
    DuplicateDesignator(Designator),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Rendering failed: {0}")]
    Render(#[from] csv::Error),
}
