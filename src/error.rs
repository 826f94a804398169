use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("duplicate record for model `{model}` in year {year}")]
    DuplicateRecord { year: i32, model: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
