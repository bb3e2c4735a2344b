use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("Failed to load environment config: {0}")]
    EnvConfig(#[from] envy::Error),

    #[error("Kube API Error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Metrics setup failed: {0}")]
    Metrics(String),
}

impl From<prometheus::Error> for Error {
    fn from(err: prometheus::Error) -> Self {
        Error::Metrics(err.to_string())
    }
}
