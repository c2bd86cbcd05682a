//! Generators for the static image assets of the web frontend: the favicon,
//! the iOS splash screens and the social preview cards.

pub mod cover;
pub mod error;
pub mod favicon;
pub mod layout;
pub mod png;
pub mod resample;
pub mod social;
pub mod splash;

pub use cover::cover_resize_crop;
pub use error::AssetError;
pub use layout::AssetLayout;
