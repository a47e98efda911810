//! API model discovery and metadata extraction.
//!
//! A model root holds one directory per service, each containing one
//! directory per published API version with a conventional `api-2.json`
//! description inside:
//!
//! ```text
//! <model_root>/<service>/<version>/api-2.json
//! ```

pub mod locator;
pub mod service;

pub use locator::*;
pub use service::*;
