//! Typed view over a JITX XML board export.
//!
//! Only the parts needed for assembly data are modelled:
//!
//! ```text
//! <ROOT>
//!   <BOARD>
//!     <INST DESIGNATOR="C1" SIDE="Top" PACKAGE="Pkg0402$1">
//!       <POSE X="63.457" Y="110.056" ANGLE="90"/>
//!     </INST>
//!   </BOARD>
//!   <SCHEMATIC>
//!     <SHEET>
//!       <SCH-INST>
//!         <PROPS DESIGNATOR="C1" MPN="CGA2B3X7R1H103M050BB"/>
//!       </SCH-INST>
//!     </SHEET>
//!   </SCHEMATIC>
//! </ROOT>
//! ```
//!
//! Accessors hand out raw attribute text; turning it into numbers and enums is done by
//! [`crate::extract`], which knows which fields are required.
use crate::error::{PnpError, Result};
use roxmltree::{Document, Node};

pub const BOARD: &str = "BOARD";
pub const SCHEMATIC: &str = "SCHEMATIC";
const INST: &str = "INST";
const POSE: &str = "POSE";
const SCH_INST: &str = "SCH-INST";
const PROPS: &str = "PROPS";

pub struct JitxDocument<'input> {
    doc: Document<'input>,
}

impl<'input> JitxDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self> {
        let doc = Document::parse(text)?;
        Ok(JitxDocument { doc })
    }

    pub fn board(&self) -> Result<Board<'_, 'input>> {
        self.section(BOARD).map(|node| Board { node })
    }

    pub fn schematic(&self) -> Result<Schematic<'_, 'input>> {
        self.section(SCHEMATIC).map(|node| Schematic { node })
    }

    fn section(&self, name: &'static str) -> Result<Node<'_, 'input>> {
        self.doc
            .root_element()
            .children()
            .find(|n| n.has_tag_name(name))
            .ok_or(PnpError::MissingSection(name))
    }
}

#[derive(Clone, Copy)]
pub struct Board<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> Board<'a, 'input> {
    /// Physically placed parts, in document order.
    pub fn instances(&self) -> impl Iterator<Item = BoardInstance<'a, 'input>> + use<'a, 'input> {
        self.node
            .children()
            .filter(|n| n.has_tag_name(INST))
            .map(|node| BoardInstance { node })
    }
}

#[derive(Clone, Copy)]
pub struct BoardInstance<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> BoardInstance<'a, 'input> {
    pub fn designator(&self) -> Option<&'a str> {
        self.node.attribute("DESIGNATOR")
    }

    pub fn side(&self) -> Option<&'a str> {
        self.node.attribute("SIDE")
    }

    pub fn package(&self) -> Option<&'a str> {
        self.node.attribute("PACKAGE")
    }

    pub fn pose(&self) -> Option<Pose<'a, 'input>> {
        self.node
            .children()
            .find(|n| n.has_tag_name(POSE))
            .map(|node| Pose { node })
    }
}

#[derive(Clone, Copy)]
pub struct Pose<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a> Pose<'a, '_> {
    pub fn x(&self) -> Option<&'a str> {
        self.node.attribute("X")
    }

    pub fn y(&self) -> Option<&'a str> {
        self.node.attribute("Y")
    }

    pub fn angle(&self) -> Option<&'a str> {
        self.node.attribute("ANGLE")
    }
}

#[derive(Clone, Copy)]
pub struct Schematic<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> Schematic<'a, 'input> {
    /// `PROPS` of every `SCH-INST` at any depth below the section (instances are nested in sheets).
    /// Instances without properties are skipped.
    pub fn instance_props(
        &self,
    ) -> impl Iterator<Item = SchematicProps<'a, 'input>> + use<'a, 'input> {
        self.node
            .descendants()
            .filter(|n| n.has_tag_name(SCH_INST))
            .filter_map(|inst| inst.children().find(|n| n.has_tag_name(PROPS)))
            .map(|node| SchematicProps { node })
    }
}

#[derive(Clone, Copy)]
pub struct SchematicProps<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a> SchematicProps<'a, '_> {
    pub fn designator(&self) -> Option<&'a str> {
        self.node.attribute("DESIGNATOR")
    }

    pub fn mpn(&self) -> Option<&'a str> {
        self.node.attribute("MPN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<ROOT VERSION="1">
        <BOARD>
            <INST DESIGNATOR="R1" SIDE="Bottom" PACKAGE="Pkg0402$2">
                <POSE X="1.5" Y="-2" ANGLE="180"/>
            </INST>
            <VIA X="0" Y="0"/>
            <INST DESIGNATOR="R2"/>
        </BOARD>
        <SCHEMATIC>
            <SHEET>
                <SCH-INST><PROPS DESIGNATOR="R1" MPN="RC0402"/></SCH-INST>
                <SCH-INST/>
            </SHEET>
            <SHEET>
                <GROUP><SCH-INST><PROPS DESIGNATOR="R2"/></SCH-INST></GROUP>
            </SHEET>
        </SCHEMATIC>
    </ROOT>"#;

    #[test]
    fn board_instances_and_pose() {
        let doc = JitxDocument::parse(DOC).unwrap();
        let board = doc.board().unwrap();
        let instances: Vec<_> = board.instances().collect();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].designator(), Some("R1"));
        assert_eq!(instances[0].side(), Some("Bottom"));
        assert_eq!(instances[0].package(), Some("Pkg0402$2"));
        let pose = instances[0].pose().unwrap();
        assert_eq!((pose.x(), pose.y(), pose.angle()), (Some("1.5"), Some("-2"), Some("180")));
        assert!(instances[1].pose().is_none());
        assert_eq!(instances[1].side(), None);
    }

    #[test]
    fn nested_schematic_props() {
        let doc = JitxDocument::parse(DOC).unwrap();
        let props: Vec<_> = doc
            .schematic()
            .unwrap()
            .instance_props()
            .map(|p| (p.designator(), p.mpn()))
            .collect();
        assert_eq!(props, [(Some("R1"), Some("RC0402")), (Some("R2"), None)]);
    }

    #[test]
    fn missing_sections() {
        let doc = JitxDocument::parse("<ROOT><BOARD/></ROOT>").unwrap();
        assert!(doc.board().is_ok());
        assert!(matches!(
            doc.schematic(),
            Err(PnpError::MissingSection(SCHEMATIC))
        ));
        // sections must sit directly under the root element
        let doc = JitxDocument::parse("<ROOT><X><BOARD/></X></ROOT>").unwrap();
        assert!(matches!(doc.board(), Err(PnpError::MissingSection(BOARD))));
    }

    #[test]
    fn malformed_xml() {
        assert!(matches!(
            JitxDocument::parse("<ROOT><BOARD></ROOT>"),
            Err(PnpError::Xml(_))
        ));
    }
}
