//! kubeclaw-nav library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::controller::Layout;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the layout is chosen: from the terminal width, or pinned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Auto,
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(LayoutMode::Auto),
            "desktop" => Some(LayoutMode::Desktop),
            "mobile" => Some(LayoutMode::Mobile),
            _ => None,
        }
    }

    /// Concrete layout for a viewport `columns` wide.
    pub fn layout_for(self, columns: u16, breakpoint: u16) -> Layout {
        match self {
            LayoutMode::Desktop => Layout::Desktop,
            LayoutMode::Mobile => Layout::Mobile,
            LayoutMode::Auto if columns < breakpoint => Layout::Mobile,
            LayoutMode::Auto => Layout::Desktop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_layout_follows_breakpoint() {
        assert_eq!(LayoutMode::Auto.layout_for(79, 80), Layout::Mobile);
        assert_eq!(LayoutMode::Auto.layout_for(80, 80), Layout::Desktop);
        assert_eq!(LayoutMode::Mobile.layout_for(200, 80), Layout::Mobile);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(LayoutMode::parse(" Mobile "), Some(LayoutMode::Mobile));
        assert_eq!(LayoutMode::parse("tablet"), None);
    }
}
