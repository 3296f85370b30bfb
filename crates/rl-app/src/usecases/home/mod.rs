//! Home repository surface.

pub mod banner;
pub mod surface;

pub use banner::SyncBanner;
pub use surface::HomeSurface;
