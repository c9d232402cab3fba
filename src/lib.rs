//! cms-content: content aggregation layer for a headless CMS site
//!
//! Builds GraphQL queries from shared fragments, runs them against the CMS
//! content API (published or draft), exposes one typed accessor per content
//! need of the site, and enumerates the detail pages to pre-render per locale.

pub mod cli;
pub mod config;
pub mod content;
pub mod envelope;
pub mod error;
pub mod executor;
pub mod fragment;
pub mod locale;
pub mod logging;
pub mod paths;
pub mod query;

pub use content::ContentClient;
pub use error::{ContentError, EnumerationError, FetchError};
pub use locale::{Locale, LocaleSet};
pub use paths::{enumerate_detail_paths, PathEnumerator, StaticPaths};
pub use query::ContentMode;
