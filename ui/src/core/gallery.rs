//! Artwork records and the load state of the gallery grid.

use std::rc::Rc;

use serde::Deserialize;

use crate::core::fetch::FetchError;

/// One entry of `gallery.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtworkRecord {
    pub title: String,
    pub description: String,
    pub image_thumb: String,
    pub image_full: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GalleryState {
    /// Fetch still in flight; the placeholder stays up until it resolves.
    #[default]
    Loading,
    /// Records in response order. Never mutated after this point.
    Loaded(Rc<[ArtworkRecord]>),
    Failed,
}

impl GalleryState {
    pub fn from_fetch(result: Result<Vec<ArtworkRecord>, FetchError>) -> Self {
        match result {
            Ok(records) => GalleryState::Loaded(records.into()),
            Err(_) => GalleryState::Failed,
        }
    }

    /// Loaded records, or an empty slice while loading or after a failure.
    pub fn records(&self) -> &[ArtworkRecord] {
        match self {
            GalleryState::Loaded(records) => records,
            GalleryState::Loading | GalleryState::Failed => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ArtworkRecord> {
        self.records().get(index)
    }
}
