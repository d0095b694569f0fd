use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown unit system '{name}' (expected metric, field or lab)")]
    UnknownUnitSystem { name: String },
}
