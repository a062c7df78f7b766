// SPDX-License-Identifier: MPL-2.0
//! Slide deck module: the ordered list of images a carousel cycles through.
//!
//! A deck is built either by scanning a directory for supported image files
//! (sorted alphabetically) or from the demo slides embedded in the binary.
//! Decks are immutable for the lifetime of a carousel instance and always
//! contain at least one slide.

use crate::error::{DeckError, Result};
use rust_embed::RustEmbed;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/slides/"]
struct DemoAsset;

/// File extensions the deck scanner accepts.
const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Where a slide's pixels come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideSource {
    /// An image file on disk.
    Path(PathBuf),
    /// Image bytes embedded in the binary.
    Embedded(Vec<u8>),
}

/// One entry of a deck: an opaque identifier plus its image source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    id: String,
    source: SlideSource,
}

impl Slide {
    /// The slide's identifier (a path-like string).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The slide's image source.
    pub fn source(&self) -> &SlideSource {
        &self.source
    }

    /// Human-readable label derived from the identifier.
    pub fn label(&self) -> String {
        display_name(&self.id)
    }
}

/// An ordered, non-empty, immutable sequence of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Scans a directory for supported image files, sorted alphabetically by
    /// file name.
    ///
    /// Returns an error if the directory cannot be read or contains no
    /// supported images.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(directory).map_err(|_| {
            DeckError::DirectoryUnreadable(directory.display().to_string())
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_supported_image(&path) {
                paths.push(path);
            }
        }

        paths.sort_by_key(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        });

        if paths.is_empty() {
            return Err(DeckError::NoSlides(directory.display().to_string()).into());
        }

        let slides = paths
            .into_iter()
            .map(|path| Slide {
                id: path.display().to_string(),
                source: SlideSource::Path(path),
            })
            .collect();

        Ok(Self { slides })
    }

    /// Builds the deck from the demo slides embedded in the binary.
    ///
    /// Debug builds serve embedded assets from disk, so an asset can go
    /// missing at runtime and surfaces as a [`DeckError::MissingAsset`].
    pub fn embedded_demo() -> Result<Self> {
        let mut names: Vec<String> = DemoAsset::iter().map(|f| f.to_string()).collect();
        names.sort();

        let mut slides = Vec::with_capacity(names.len());
        for name in names {
            let data =
                DemoAsset::get(&name).ok_or_else(|| DeckError::MissingAsset(name.clone()))?;
            slides.push(Slide {
                id: name,
                source: SlideSource::Embedded(data.data.into_owned()),
            });
        }

        if slides.is_empty() {
            return Err(DeckError::NoSlides("embedded demo".to_string()).into());
        }
        Ok(Self { slides })
    }

    /// Number of slides. A deck is never empty.
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.slides.len()).expect("deck is never empty")
    }

    /// Slide at the given index, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Iterator over the slides in order.
    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Derives a display label from a path-like slide identifier.
///
/// Takes the last path segment, strips the extension, splits on hyphens,
/// capitalizes the first letter of each word and joins with spaces. Malformed
/// input (no hyphens, no extension) degrades to a best-effort capitalized
/// string.
pub fn display_name(id: &str) -> String {
    let stem = Path::new(id)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
