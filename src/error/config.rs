use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined.
    /// Check `.env.example` for the full list of configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but holds an unusable value.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, &'static str),
}
