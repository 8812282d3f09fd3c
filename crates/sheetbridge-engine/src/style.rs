//! Cell style attributes settable over the bridge.
//!
//! The legacy host passes alignment and border styles as plain integers, using
//! the numbering the original native engine documented. The integer mapping is
//! frozen here so the FFI layer can decode once and hand the engine a typed
//! value.

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellAlign {
    /// No explicit alignment (engine default)
    #[default]
    None,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterAcross,
    Distributed,
}

impl CellAlign {
    /// Decode the host-side integer code. Unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => CellAlign::None,
            1 => CellAlign::Left,
            2 => CellAlign::Center,
            3 => CellAlign::Right,
            4 => CellAlign::Fill,
            5 => CellAlign::Justify,
            6 => CellAlign::CenterAcross,
            7 => CellAlign::Distributed,
            _ => return None,
        })
    }

    /// The host-side integer code for this alignment.
    pub fn code(self) -> i32 {
        match self {
            CellAlign::None => 0,
            CellAlign::Left => 1,
            CellAlign::Center => 2,
            CellAlign::Right => 3,
            CellAlign::Fill => 4,
            CellAlign::Justify => 5,
            CellAlign::CenterAcross => 6,
            CellAlign::Distributed => 7,
        }
    }
}

/// Border line style applied to all four cell edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLine {
    /// No border (engine default)
    #[default]
    None,
    Thin,
    Medium,
    Dashed,
    Dotted,
    Thick,
    Double,
    Hair,
}

impl BorderLine {
    /// Decode the host-side integer code. Unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => BorderLine::None,
            1 => BorderLine::Thin,
            2 => BorderLine::Medium,
            3 => BorderLine::Dashed,
            4 => BorderLine::Dotted,
            5 => BorderLine::Thick,
            6 => BorderLine::Double,
            7 => BorderLine::Hair,
            _ => return None,
        })
    }

    /// The host-side integer code for this line style.
    pub fn code(self) -> i32 {
        match self {
            BorderLine::None => 0,
            BorderLine::Thin => 1,
            BorderLine::Medium => 2,
            BorderLine::Dashed => 3,
            BorderLine::Dotted => 4,
            BorderLine::Thick => 5,
            BorderLine::Double => 6,
            BorderLine::Hair => 7,
        }
    }
}
