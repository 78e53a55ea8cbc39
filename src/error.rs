use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(depgraph::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DepgraphError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(depgraph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Failed to resolve dependencies of module '{module}'")]
    #[diagnostic(
        code(depgraph::resolution_failed),
        help("Fix the module's dependency descriptor; no graph is written when a module fails")
    )]
    ResolutionFailed {
        module: String,
        #[source]
        source: Box<DepgraphError>,
    },

    #[error("Invalid artifact coordinates '{coordinates}': {reason}")]
    #[diagnostic(
        code(depgraph::invalid_coordinates),
        help(
            "Use 'group:artifact:version', 'group:artifact:type:version' or \
             'group:artifact:type:classifier:version'"
        )
    )]
    InvalidCoordinates { coordinates: String, reason: String },

    #[error("Invalid artifact pattern '{pattern}'")]
    #[diagnostic(
        code(depgraph::invalid_pattern),
        help("Patterns look like 'group[:artifact[:type[:version]]]' and may use glob wildcards")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Project error: {message}")]
    #[diagnostic(
        code(depgraph::project_error),
        help("Check that the path contains a depgraph.toml descriptor")
    )]
    ProjectError { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(depgraph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(depgraph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depgraph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl DepgraphError {
    /// Wrap a collaborator failure as a fatal resolution error for `module`
    pub fn resolution_failed(module: impl Into<String>, source: DepgraphError) -> Self {
        DepgraphError::ResolutionFailed {
            module: module.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "depgraph.toml".to_string(),
            source_code: NamedSource::new("depgraph.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'depgraph.toml'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = DepgraphError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.toml'");
    }

    #[test]
    fn test_resolution_failed_keeps_cause() {
        let cause = DepgraphError::InvalidCoordinates {
            coordinates: "broken".to_string(),
            reason: "expected at least 3 segments".to_string(),
        };
        let error = DepgraphError::resolution_failed("app-core", cause);

        assert_eq!(
            error.to_string(),
            "Failed to resolve dependencies of module 'app-core'"
        );

        let source = std::error::Error::source(&error).expect("cause should be kept");
        assert!(source.to_string().contains("broken"));
    }

    #[test]
    fn test_configuration_error() {
        let error = DepgraphError::ConfigurationError {
            message: "Invalid configuration value".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration value"
        );
    }

    #[test]
    fn test_error_codes() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = DepgraphError::FileReadError {
            path: PathBuf::from("test.txt"),
            source: io_err,
        };

        use miette::Diagnostic;
        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let error: DepgraphError = io_err.into();

        match error {
            DepgraphError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: DepgraphError = json_err.into();

        match error {
            DepgraphError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
