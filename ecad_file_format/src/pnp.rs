use crate::Designator;
use strum::{Display, EnumIter, EnumString};

/// One row of a pick-and-place file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedComponent {
    pub designator: Designator,
    /// mm
    pub x: f64,
    /// mm
    pub y: f64,
    /// Degrees, within [0, 360)
    pub rotation: f64,
    /// Landpattern name, empty if the export has none
    pub package: String,
    pub side: Side,
    /// Manufacturer part number, `None` if the part is not in the schematic
    pub part_number: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    #[strum(to_string = "Top", serialize = "TopLayer")]
    Top,
    #[strum(to_string = "Bottom", serialize = "BottomLayer")]
    Bottom,
}

impl Side {
    /// Lowercase tag used to name per-side outputs.
    pub fn tag(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}
