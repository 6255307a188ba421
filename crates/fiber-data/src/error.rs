use fiber_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("invalid {kind} {id}: {source}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        #[source]
        source: ModelError,
    },
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{kind} {id} references unknown project {project_id}")]
    UnknownProject {
        kind: &'static str,
        id: String,
        project_id: String,
    },
    #[error("location {id} has an invalid position ({lat}, {lon})")]
    InvalidPosition { id: String, lat: f64, lon: f64 },
    #[error("project not found: {0}")]
    ProjectNotFound(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
