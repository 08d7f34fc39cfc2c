pub type JuicerResult<T> = Result<T, JuicerError>;

#[derive(thiserror::Error, Debug)]
pub enum JuicerError {
    #[error("config error: {0}")]
    Config(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JuicerError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}
