//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::error::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClientError::Config("API key is empty".into()).to_string(),
            "Configuration error: API key is empty"
        );
        assert_eq!(
            ClientError::UnsupportedMethod("PUT".into()).to_string(),
            "Unsupported HTTP method: PUT"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ClientError = config::ConfigError::NotFound("api.base_url".into()).into();
        assert!(matches!(err, ClientError::Config(ref msg) if msg.contains("api.base_url")));
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<()> {
            Err(ClientError::UnsupportedMethod("PATCH".into()))
        }
        assert!(fails().is_err());
    }
}
