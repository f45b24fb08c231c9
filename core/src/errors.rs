use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GraphError {
    #[error("vertex \"{0}\" already exists")]
    DuplicateVertex(String),
    #[error("edge weight must be a finite non-negative number, but got {0}")]
    InvalidWeight(f64),
    #[error("vertex \"{0}\" doesn't exist")]
    UnknownVertex(String),
    #[error("path between \"{from}\" and \"{to}\" doesn't exist")]
    NoPathExists { from: String, to: String },
    #[error(transparent)]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
