//! Presentation tokens attached to registry entries.
//!
//! These carry no behaviour; renderers map them to whatever colours their
//! backend supports.

use serde::Serialize;

/// Named hue in the showcase palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hue {
    Purple,
    Blue,
    Cyan,
    Emerald,
    Teal,
    Orange,
    Red,
}

/// Two-stop gradient token (`from` → `to`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleTag {
    pub from: Hue,
    pub to: Hue,
}

impl StyleTag {
    pub const fn gradient(from: Hue, to: Hue) -> Self {
        Self { from, to }
    }

    /// Single-hue token (gradient with both stops equal)
    pub const fn solid(hue: Hue) -> Self {
        Self { from: hue, to: hue }
    }
}
