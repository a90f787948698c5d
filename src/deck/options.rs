use super::{DEFAULT_ICONS_DIR, DEFAULT_OUTPUT};
use crate::icons::IconOptions;
use std::path::PathBuf;

/// Where and how the deck pipeline writes its files.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckOptions {
    /// Directory receiving `icon_{n}.png`
    pub icons_dir: PathBuf,
    /// Presentation file
    pub output: PathBuf,
    pub icon: IconOptions,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            icons_dir: PathBuf::from(DEFAULT_ICONS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            icon: IconOptions::default(),
        }
    }
}

impl DeckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_icons_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.icons_dir = dir.into();
        self
    }

    #[inline]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    #[inline]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.icon = self.icon.with_font_family(family);
        self
    }

    #[inline]
    pub fn with_icon_options(mut self, icon: IconOptions) -> Self {
        self.icon = icon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_literals() {
        let opts = DeckOptions::default();
        assert_eq!(opts.icons_dir, PathBuf::from("icons"));
        assert_eq!(opts.output, PathBuf::from("ChatGPT_Bio_Techy_Figurines.pptx"));
        assert_eq!(opts.icon.font_family, "Arial");
    }

    #[test]
    fn test_builders() {
        let opts = DeckOptions::new()
            .with_output("out.pptx")
            .with_font_family("Liberation Sans");
        assert_eq!(opts.output, PathBuf::from("out.pptx"));
        assert_eq!(opts.icon.font_family, "Liberation Sans");
    }
}
