pub mod filter;
pub mod lightbox;

pub use filter::GalleryFilter;
pub use lightbox::Lightbox;
