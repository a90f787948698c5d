//! The ten-slide deck: literal content, composition and the end-to-end pipeline.

pub mod compose;
mod options;

pub use options::DeckOptions;

use crate::common::Result;
use crate::icons::{IconRenderer, IconSpec, generate_icons};
use crate::ooxml::pptx::MutablePresentation;
use std::path::PathBuf;

/// Default presentation file name.
pub const DEFAULT_OUTPUT: &str = "ChatGPT_Bio_Techy_Figurines.pptx";

/// Default icon directory.
pub const DEFAULT_ICONS_DIR: &str = "icons";

/// Content of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSpec {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

/// Slides in presentation order.
pub const DECK: [SlideSpec; 10] = [
    SlideSpec {
        title: "Hello! I'm ChatGPT 🤖",
        bullets: &[
            "Your friendly AI assistant",
            "I know a lot!",
            "I can chat endlessly",
        ],
    },
    SlideSpec {
        title: "I Love Learning",
        bullets: &["Curious and curious again", "Ask me anything"],
    },
    SlideSpec {
        title: "I Can Solve Problems",
        bullets: &["Math, science, logic", "Puzzles and challenges"],
    },
    SlideSpec {
        title: "I Read Books",
        bullets: &["Fiction, non-fiction, tech books", "I love learning new stuff"],
    },
    SlideSpec {
        title: "I Explore the World",
        bullets: &["Science, geography, space", "Always exploring!"],
    },
    SlideSpec {
        title: "I Help You Code",
        bullets: &["Python, Java, C++", "Debugging & tips"],
    },
    SlideSpec {
        title: "I Tell Stories",
        bullets: &["Short stories, poems, ideas", "Fun learning"],
    },
    SlideSpec {
        title: "I Love Art & Creativity",
        bullets: &["Drawings, design, colors", "Tech + fun"],
    },
    SlideSpec {
        title: "I Keep Time",
        bullets: &["Reminders, schedules, alarms", "Organized"],
    },
    SlideSpec {
        title: "I Make You Smile 😄",
        bullets: &["I try to make you happy", "Fun facts & jokes"],
    },
];

/// Fill colour of each slide's icon.
pub const ICON_COLORS: [[u8; 3]; 10] = [
    [255, 102, 102],
    [102, 204, 255],
    [255, 204, 102],
    [102, 255, 178],
    [255, 102, 255],
    [178, 102, 255],
    [255, 178, 102],
    [102, 178, 255],
    [178, 255, 102],
    [255, 102, 178],
];

/// One icon per slide, in slide order.
pub fn icon_specs() -> Vec<IconSpec> {
    ICON_COLORS
        .iter()
        .enumerate()
        .map(|(index, color)| IconSpec::new(index, *color))
        .collect()
}

/// Generate the icons, compose every slide and save the presentation.
///
/// Returns the path of the written presentation.
pub fn build_deck(options: &DeckOptions) -> Result<PathBuf> {
    let renderer = IconRenderer::new(&options.icon);
    let icon_paths = generate_icons(&options.icons_dir, &icon_specs(), &renderer)?;
    log::info!(
        "{} icons written to {}",
        icon_paths.len(),
        options.icons_dir.display()
    );

    let mut pres = MutablePresentation::new();
    for (index, slide) in DECK.iter().enumerate() {
        let icons = icon_paths.get(index..=index).unwrap_or(&[]);
        compose::add_slide(&mut pres, slide.title, slide.bullets, icons)?;
    }

    pres.save(&options.output)?;
    log::info!(
        "{} slides written to {}",
        pres.slide_count(),
        options.output.display()
    );

    Ok(options.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_shape() {
        assert!(DECK.iter().all(|s| (1..=3).contains(&s.bullets.len())));
        assert_eq!(DECK[0].bullets.len(), 3);
        assert_eq!(DECK[7].title, "I Love Art & Creativity");
    }

    #[test]
    fn test_icon_specs_follow_colors() {
        let specs = icon_specs();
        assert_eq!(specs.len(), DECK.len());
        assert_eq!(specs[9].color, [255, 102, 178]);
        assert_eq!(specs[9].label, "10");
    }
}
