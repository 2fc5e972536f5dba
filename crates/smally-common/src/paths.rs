//! Path utilities for selecting picture files by extension.
//!
//! The scanner and the action runners use these to decide which files a run
//! touches. Matching is always case-insensitive.

use crate::{Error, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// A picture type that can be selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageFormat {
    /// All formats, in display order.
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::Gif,
        ImageFormat::Webp,
    ];

    /// File extensions (lower-case, without dot) belonging to this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ImageFormat::Jpeg => &["jpg", "jpeg"],
            ImageFormat::Png => &["png"],
            ImageFormat::Gif => &["gif"],
            ImageFormat::Webp => &["webp"],
        }
    }

    /// Look up the format for an extension, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use smally_common::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_extension("JPEG"), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_extension("bmp"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<ImageFormat> {
        let ext = ext.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }

    /// Look up the format of a path by its extension.
    pub fn from_path(path: &Path) -> Option<ImageFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Non-empty, immutable set of selected picture formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    formats: BTreeSet<ImageFormat>,
}

impl ExtensionSet {
    /// Build a set from the chosen formats.
    ///
    /// # Errors
    ///
    /// Returns an error if no format was chosen.
    pub fn new(formats: impl IntoIterator<Item = ImageFormat>) -> Result<Self> {
        let formats: BTreeSet<ImageFormat> = formats.into_iter().collect();
        if formats.is_empty() {
            return Err(Error::invalid_input("No picture type chosen"));
        }
        Ok(Self { formats })
    }

    pub fn contains(&self, format: ImageFormat) -> bool {
        self.formats.contains(&format)
    }

    /// Format of `path` if its extension belongs to this set.
    pub fn match_path(&self, path: &Path) -> Option<ImageFormat> {
        ImageFormat::from_path(path).filter(|format| self.contains(*format))
    }

    /// Check if a path has an extension in this set.
    ///
    /// # Examples
    ///
    /// ```
    /// use smally_common::{ExtensionSet, ImageFormat};
    /// use std::path::Path;
    ///
    /// let set = ExtensionSet::new([ImageFormat::Jpeg]).unwrap();
    /// assert!(set.contains_path(Path::new("/photos/IMG_0001.JPG")));
    /// assert!(set.contains_path(Path::new("scan.jpeg")));
    /// assert!(!set.contains_path(Path::new("scan.png")));
    /// ```
    pub fn contains_path(&self, path: &Path) -> bool {
        self.match_path(path).is_some()
    }

    /// True when JPEG is the only selected format.
    pub fn is_jpeg_only(&self) -> bool {
        self.formats.len() == 1 && self.contains(ImageFormat::Jpeg)
    }

    pub fn iter(&self) -> impl Iterator<Item = ImageFormat> + '_ {
        self.formats.iter().copied()
    }

    /// All extensions (lower-case, without dot) covered by this set.
    pub fn extensions(&self) -> Vec<&'static str> {
        self.iter().flat_map(|f| f.extensions().iter().copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_covers_both_suffixes() {
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("JpEg"), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn test_from_path_without_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("README")), None);
        assert_eq!(ImageFormat::from_path(Path::new(".png")), None);
        assert_eq!(ImageFormat::from_path(Path::new("a.tar.gif")), Some(ImageFormat::Gif));
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = ExtensionSet::new([]).unwrap_err();
        assert!(err.to_string().contains("No picture type"));
    }

    #[test]
    fn test_selection_is_case_insensitive_membership() {
        let set = ExtensionSet::new([ImageFormat::Png, ImageFormat::Webp]).unwrap();

        for name in ["a.png", "b.PNG", "c.WebP"] {
            assert!(set.contains_path(Path::new(name)), "{name} should match");
        }
        for name in ["a.jpg", "b.gif", "c.png.bak", "noext"] {
            assert!(!set.contains_path(Path::new(name)), "{name} should not match");
        }
    }

    #[test]
    fn test_jpeg_only() {
        assert!(ExtensionSet::new([ImageFormat::Jpeg]).unwrap().is_jpeg_only());
        assert!(!ExtensionSet::new([ImageFormat::Jpeg, ImageFormat::Png])
            .unwrap()
            .is_jpeg_only());
        assert!(!ExtensionSet::new([ImageFormat::Gif]).unwrap().is_jpeg_only());
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = ExtensionSet::new([ImageFormat::Jpeg, ImageFormat::Jpeg]).unwrap();
        assert!(set.is_jpeg_only());
        assert_eq!(set.extensions(), vec!["jpg", "jpeg"]);
    }
}
