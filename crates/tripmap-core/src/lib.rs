// crates/tripmap-core/src/lib.rs

pub mod alias;
pub mod boundary;
pub mod cache;
pub mod centers;
#[cfg(feature = "remote")]
pub mod client;
pub mod error;
pub mod map;
pub mod model;
pub mod resolve;
pub mod selection;
pub mod stats;
pub mod style;

// Re-exports
pub use crate::error::{MapError, Result};
pub use crate::model::{Country, CountryId, Postcard, StatusUpdate, VisitStatus};
pub use crate::alias::AliasTable;
pub use crate::boundary::BoundaryFeature;
pub use crate::cache::{CacheState, QueryCache, QueryKey};
pub use crate::map::{InitState, MapView, Notice, PostcardMarker};
pub use crate::resolve::Registry;
pub use crate::selection::{Interaction, Selection};
pub use crate::stats::TravelStats;
pub use crate::style::{style_for, MapStyle};

/// Commonly used items, for demos and downstream consumers.
pub mod prelude {
    pub use crate::alias::AliasTable;
    pub use crate::boundary::{self, BoundaryFeature};
    pub use crate::cache::{CacheState, QueryKey};
    pub use crate::error::{MapError, Result};
    pub use crate::map::{ImageLoadState, InitState, MapView, NoticeKind};
    pub use crate::model::{
        load_countries_from_path, Country, CountryId, Postcard, StatusUpdate, VisitStatus,
    };
    pub use crate::resolve::Registry;
    pub use crate::selection::Interaction;
    pub use crate::stats::TravelStats;
    pub use crate::style::{style_for, MapStyle};
}
