use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid {field}: {value:?} (expected {expected})")]
    InvalidSetting {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
