//! Error types for wrangler-options

/// Result type for wrangler-options operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a worker configuration
///
/// Resolution itself cannot fail once the document has been decoded, so the
/// only failure surfaced to callers is a malformed document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The wrangler.toml document could not be decoded
    #[error(transparent)]
    Decode(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_keeps_parser_message() {
        let parse_err = toml::from_str::<toml::Value>("type = ").unwrap_err();
        let expected = parse_err.to_string();

        let error = Error::from(parse_err);
        assert_eq!(error.to_string(), expected);
    }
}
