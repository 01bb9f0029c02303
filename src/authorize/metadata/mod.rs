pub mod api_key;
mod impls;
mod metadata_extractor;

pub use impls::default_metadata_extractor::{DefaultMetadataError, DefaultMetadataExtractor};
pub use metadata_extractor::MetadataExtractor;
