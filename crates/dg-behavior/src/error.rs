use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviourError {
    #[error("behaviour configuration error: {0}")]
    Config(String),
}

pub type BehaviourResult<T> = Result<T, BehaviourError>;
