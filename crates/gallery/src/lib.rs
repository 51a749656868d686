//! Media gallery state: filter chips, pagination and embed selection.
//!
//! Everything here is a pure function of the loaded records plus the user's
//! last click. Rendering the chosen embed is the host's job.

pub mod backfill;
pub mod embed;
pub mod filter;
pub mod paginate;
pub mod youtube;

mod gallery;

pub use embed::{EmbedStrategy, UnresolvedEmbed, embed_strategy, resolve_embed};
pub use filter::{FilterKey, filter_records};
pub use gallery::{Gallery, GalleryConfig};
pub use paginate::{
    DEFAULT_PAGE_SIZE, FilterPaginationState, apply_filter, current_slice, set_page, total_pages,
};
