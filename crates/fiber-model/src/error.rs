use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid project id '{0}': expected FO-<CITY_CODE>-<NUMBER>")]
    InvalidProjectId(String),
    #[error("progress {0} is outside 0..=100")]
    ProgressOutOfRange(u8),
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
