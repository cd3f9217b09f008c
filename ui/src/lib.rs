//! Shared UI crate for Galleria. Page state, loaders and components live here;
//! the `web` crate only launches the root component.

pub mod core;
pub mod i18n;
pub mod page;
pub mod views;

pub mod components {
    mod art_modal;
    pub use art_modal::ArtModal;

    mod gallery_grid;
    pub use gallery_grid::GalleryGrid;

    // Header, hamburger and mobile nav (components/site_header.rs)
    mod site_header;
    pub use site_header::SiteHeader;

    mod translate;
    pub use translate::Translate;
}
