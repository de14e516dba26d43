//! Card image manifest for graphical front ends.
//!
//! The engine never loads images itself. A front end that draws cards asks
//! the manifest which files it needs and checks them once at startup, since
//! the table cannot be drawn with a face missing.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::card::{Card, Suit};

/// File name of the card back image.
pub const CARD_BACK: &str = "card_back.png";

/// Errors raised when the card images are incomplete.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A required image does not exist.
    #[error("missing card image: {}", path.display())]
    Missing {
        /// The expected location.
        path: PathBuf,
    },
    /// A required image path exists but is not a regular file.
    #[error("card image is not a file: {}", path.display())]
    NotAFile {
        /// The offending location.
        path: PathBuf,
    },
}

/// Returns the image file name for a card, such as `10H.png` or `AS.png`.
#[must_use]
pub fn image_name(card: Card) -> String {
    format!("{card}.png")
}

/// The set of images needed to draw a deck, relative to one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    root: PathBuf,
}

impl AssetManifest {
    /// Creates a manifest for images stored in `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the image directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of a card's face image.
    #[must_use]
    pub fn face(&self, card: Card) -> PathBuf {
        self.root.join(image_name(card))
    }

    /// Returns the path of the card back image.
    #[must_use]
    pub fn back(&self) -> PathBuf {
        self.root.join(CARD_BACK)
    }

    /// Returns every required path: 52 faces followed by the back.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = Suit::ALL
            .into_iter()
            .flat_map(|suit| (1..=13).map(move |rank| Card::new(suit, rank)))
            .map(|card| self.face(card))
            .collect();
        paths.push(self.back());
        paths
    }

    /// Checks that every required image is present.
    ///
    /// # Errors
    ///
    /// Returns the first path that is missing or not a regular file.
    pub fn verify(&self) -> Result<(), AssetError> {
        for path in self.paths() {
            if !path.exists() {
                return Err(AssetError::Missing { path });
            }
            if !path.is_file() {
                return Err(AssetError::NotAFile { path });
            }
        }
        tracing::debug!(root = %self.root.display(), "card images verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_all(manifest: &AssetManifest) {
        for path in manifest.paths() {
            std::fs::write(path, b"png").unwrap();
        }
    }

    #[test]
    fn manifest_lists_every_face_and_the_back() {
        let manifest = AssetManifest::new("cards");
        let paths = manifest.paths();
        assert_eq!(paths.len(), 53);
        assert!(paths.contains(&PathBuf::from("cards/10H.png")));
        assert!(paths.contains(&PathBuf::from("cards/AS.png")));
        assert!(paths.contains(&PathBuf::from("cards/KD.png")));
        assert_eq!(paths.last(), Some(&PathBuf::from("cards/card_back.png")));
    }

    #[test]
    fn verify_accepts_complete_directory() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = AssetManifest::new(dir.path());
        write_all(&manifest);
        manifest.verify().unwrap();
    }

    #[test]
    fn verify_reports_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = AssetManifest::new(dir.path());
        write_all(&manifest);
        let gone = manifest.face(Card::new(Suit::Clubs, 12));
        std::fs::remove_file(&gone).unwrap();

        match manifest.verify() {
            Err(AssetError::Missing { path }) => assert_eq!(path, gone),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn verify_rejects_directory_in_place_of_image() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = AssetManifest::new(dir.path());
        write_all(&manifest);
        std::fs::remove_file(manifest.back()).unwrap();
        std::fs::create_dir(manifest.back()).unwrap();

        assert!(matches!(
            manifest.verify(),
            Err(AssetError::NotAFile { .. })
        ));
    }
}
