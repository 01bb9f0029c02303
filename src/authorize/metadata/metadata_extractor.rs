use tonic::metadata::MetadataMap;

/// Extract a metadata value from the metadata of an incoming call.
pub trait MetadataExtractor {
    type Error;

    fn extract_metadata<'a>(&self, metadata: &'a MetadataMap) -> Result<&'a str, Self::Error>;
}
