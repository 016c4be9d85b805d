//! Slide descriptors and the fixed slide sequence a session navigates

use serde::{Deserialize, Serialize};

/// A piece of renderable slide content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// Section heading inside the slide
    Heading(String),
    /// Paragraph of text
    Text(String),
    /// Bulleted list
    Bullets(Vec<String>),
    /// Image reference with optional descriptive text
    Image {
        source: String,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl Block {
    /// Number of visible text characters contributed by this block
    pub fn text_len(&self) -> usize {
        match self {
            Block::Heading(text) | Block::Text(text) => text.chars().count(),
            Block::Bullets(items) => items.iter().map(|item| item.chars().count()).sum(),
            Block::Image { .. } => 0,
        }
    }
}

/// One slide of a deck
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Title shown in the header and used for announcements
    #[serde(default)]
    pub title: Option<String>,

    /// Body content, drawn top to bottom
    #[serde(default)]
    pub blocks: Vec<Block>,

    /// Presenter notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl Slide {
    /// Create a titled slide with no content
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Create a slide without a title
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Append a content block
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Set the presenter notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Title for display at `index`
    ///
    /// Falls back to the first heading block, then to "Slide <n>".
    pub fn display_title(&self, index: usize) -> String {
        let heading = self.blocks.iter().find_map(|block| match block {
            Block::Heading(text) => Some(text.as_str()),
            _ => None,
        });

        [self.title.as_deref(), heading]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|title| !title.is_empty())
            .map_or_else(|| format!("Slide {}", index + 1), str::to_string)
    }

    /// Number of visible text characters on the slide
    pub fn text_len(&self) -> usize {
        let title = self.title.as_deref().map_or(0, |t| t.chars().count());
        title + self.blocks.iter().map(Block::text_len).sum::<usize>()
    }

    /// Iterate over the images on this slide as `(source, alt)`
    pub fn images(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Image { source, alt } => Some((source.as_str(), alt.as_deref())),
            _ => None,
        })
    }
}

/// Ordered, immutable list of slides for one navigation session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideSequence {
    slides: Vec<Slide>,
}

impl SlideSequence {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    pub fn as_slice(&self) -> &[Slide] {
        &self.slides
    }

    /// Display title of the slide at `index`
    pub fn title(&self, index: usize) -> String {
        self.slides
            .get(index)
            .map(|slide| slide.display_title(index))
            .unwrap_or_else(|| format!("Slide {}", index + 1))
    }

    /// Presenter notes for the slide at `index`; empty when there are none
    pub fn notes(&self, index: usize) -> &str {
        self.slides
            .get(index)
            .and_then(|slide| slide.notes.as_deref())
            .unwrap_or("")
    }
}

impl FromIterator<Slide> for SlideSequence {
    fn from_iter<I: IntoIterator<Item = Slide>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SlideSequence {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
