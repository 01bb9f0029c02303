pub mod default_metadata_extractor;
