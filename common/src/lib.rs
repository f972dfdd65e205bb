//! Champion Gallery Common Library
//!
//! CLIとWeb(WASM)で共有される型と読み込み状態機械

pub mod types;
pub mod cdn;
pub mod error;
pub mod filter;
pub mod tag_class;
pub mod source;
pub mod loader;
pub mod enricher;
pub mod state;
pub mod gallery;

#[cfg(test)]
mod fixtures;

pub use types::{Detail, Entry, RawEntry};
pub use cdn::CdnConfig;
pub use error::{Error, Result};
pub use filter::{filter_by_search, TagFilter, ALL_TAGS};
pub use tag_class::{type_class, TagClass};
pub use source::{CatalogSource, MemorySource, Scripted};
pub use loader::{fetch_catalog, map_catalog, map_entry, parse_catalog, select_by_tag};
pub use enricher::{
    enrich, fetch_details, parse_details, EnrichOptions, EnrichOutcome, EnrichTarget,
    EnrichTicket, FailurePolicy,
};
pub use state::{LoadKind, LoadOutcome, LoadTicket, PageState, ScrollMetrics, StaleLoad, ViewState};
pub use gallery::{Gallery, OperationReport};
