use crate::Designator;
use crate::config::{COORDINATE_PRECISION, PACKAGE_INSTANCE_SEPARATOR};
use crate::error::{PnpError, Result};
use crate::jitx_xml::{Board, BoardInstance, JitxDocument, Schematic};
use crate::pnp::{PlacedComponent, Side};
use crate::text_util::read_with_unknown_encoding;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;

/// Read a JITX XML export and extract its pick-and-place rows.
pub fn load_placements(path: &Path) -> Result<Vec<PlacedComponent>> {
    let contents = read_with_unknown_encoding(path)?;
    let document = JitxDocument::parse(&contents)?;
    extract(&document)
}

/// Join schematic part numbers onto board placements and sort the result by designator.
///
/// Every placement ends up in the output, with `part_number` left empty when the schematic
/// doesn't know the designator. Schematic entries without a placement are dropped.
pub fn extract(document: &JitxDocument<'_>) -> Result<Vec<PlacedComponent>> {
    let board = document.board()?;
    let schematic = document.schematic()?;

    let mut placements = read_placements(&board)?;
    let mut part_numbers = read_part_numbers(&schematic);
    if placements.is_empty() {
        warn!("No component instances found on the board");
    }

    for placement in &mut placements {
        placement.part_number = part_numbers.remove(&placement.designator);
    }
    if !part_numbers.is_empty() {
        debug!(
            "{} schematic part(s) have no placement and are left out",
            part_numbers.len()
        );
    }

    placements.sort_by(|a, b| a.designator.cmp(&b.designator));
    Ok(placements)
}

fn read_placements(board: &Board<'_, '_>) -> Result<Vec<PlacedComponent>> {
    let mut placements = Vec::new();
    let mut seen = HashSet::new();
    for (index, instance) in board.instances().enumerate() {
        let placement = read_placement(index, &instance)?;
        if !seen.insert(placement.designator.clone()) {
            return Err(PnpError::DuplicateDesignator(placement.designator));
        }
        placements.push(placement);
    }
    debug!("Read {} placements", placements.len());
    Ok(placements)
}

fn read_placement(index: usize, instance: &BoardInstance<'_, '_>) -> Result<PlacedComponent> {
    let designator = match instance.designator() {
        Some(d) if !d.trim().is_empty() => Designator(d.to_string()),
        _ => return Err(PnpError::MissingDesignator { index }),
    };
    let missing = |field| PnpError::MissingField {
        designator: designator.clone(),
        field,
    };

    let pose = instance.pose().ok_or_else(|| missing("POSE"))?;
    let x = pose.x().ok_or_else(|| missing("X"))?;
    let y = pose.y().ok_or_else(|| missing("Y"))?;
    let x = parse_number(&designator, "X", x)?;
    let y = parse_number(&designator, "Y", y)?;
    let rotation = match pose.angle() {
        Some(angle) => normalize_rotation(parse_number(&designator, "ANGLE", angle)?),
        None => 0.0,
    };

    let side = match instance.side() {
        Some(side) => Side::from_str(side.trim()).map_err(|_| PnpError::UnknownSide {
            designator: designator.clone(),
            value: side.to_string(),
        })?,
        None => Side::Top,
    };
    let package = instance
        .package()
        .map(strip_package_instance)
        .unwrap_or_default()
        .to_string();

    Ok(PlacedComponent {
        designator,
        x,
        y,
        rotation,
        package,
        side,
        part_number: None,
    })
}

/// Designator to MPN. A designator seen more than once (e.g. one per unit of a multi-unit part)
/// takes the value of its last entry.
fn read_part_numbers(schematic: &Schematic<'_, '_>) -> HashMap<Designator, String> {
    let mut part_numbers = HashMap::new();
    for props in schematic.instance_props() {
        let designator = match props.designator() {
            Some(d) if !d.trim().is_empty() => Designator(d.to_string()),
            _ => {
                warn!("Skipping schematic instance without a designator");
                continue;
            }
        };
        let mpn = props.mpn().unwrap_or_default().to_string();
        if let Some(previous) = part_numbers.insert(designator.clone(), mpn.clone()) {
            if previous != mpn {
                warn!("{designator}: part number '{previous}' replaced by '{mpn}'");
            }
        }
    }
    part_numbers
}

fn parse_number(designator: &Designator, field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PnpError::InvalidNumber {
            designator: designator.clone(),
            field,
            value: value.to_string(),
        })
}

/// Wrap into [0, 360), taking output rounding into account so that e.g. 359.9999 becomes 0
/// rather than rendering as `360.000`.
fn normalize_rotation(degrees: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_PRECISION as i32);
    let rotation = degrees.rem_euclid(360.0);
    if (rotation * scale).round() >= 360.0 * scale {
        0.0
    } else {
        rotation
    }
}

fn strip_package_instance(package: &str) -> &str {
    package
        .split_once(PACKAGE_INSTANCE_SEPARATOR)
        .map_or(package, |(name, _)| name)
}
