use crate::colour::{colours, Colour};
use crate::units::Pt;

/// Which of the two base faces a run is set in. The output sink maps these
/// to the standard Helvetica and Helvetica-Bold fonts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    Regular,
    Bold,
}

/// Style attributes carried by every positioned text run
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RunStyle {
    pub face: Face,
    pub size: Pt,
    pub colour: Colour,
}

/// The preset styles the formatter emits runs in
pub mod styles {
    use super::*;

    pub const TITLE: RunStyle = RunStyle {
        face: Face::Bold,
        size: Pt(16.0),
        colour: colours::BLACK,
    };
    pub const SUBTITLE: RunStyle = RunStyle {
        face: Face::Regular,
        size: Pt(11.0),
        colour: colours::SLATE,
    };
    pub const HEADING: RunStyle = RunStyle {
        face: Face::Bold,
        size: Pt(12.0),
        colour: colours::BLACK,
    };
    pub const BODY: RunStyle = RunStyle {
        face: Face::Regular,
        size: Pt(10.0),
        colour: colours::BLACK,
    };
    pub const FOOTER: RunStyle = RunStyle {
        face: Face::Regular,
        size: Pt(9.0),
        colour: colours::SLATE,
    };
}
