use tonic::metadata::MetadataMap;

/// Extract an api key from the metadata of an incoming call.
pub trait ApiKeyExtractor {
    type Error;

    fn extract_api_key<'a>(&self, metadata: &'a MetadataMap) -> Result<&'a str, Self::Error>;
}
