//! Pick-and-place data from JITX XML board exports.
//!
//! [`extract`] joins the schematic part numbers onto the board placements,
//! [`render`] turns the result into CSV, TSV or a fixed-width table.
pub mod config;
mod csv_util;
mod designator;
pub mod error;
pub mod extract;
pub mod jitx_xml;
pub mod pnp;
pub mod render;
pub mod text_util;

pub use designator::Designator;
pub use error::{PnpError, Result};
pub use extract::{extract, load_placements};
pub use jitx_xml::JitxDocument;
pub use pnp::{PlacedComponent, Side};
pub use render::{OutputFormat, RenderedOutput, render};
