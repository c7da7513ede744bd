pub type SpheruleResult<T> = Result<T, SpheruleError>;

#[derive(thiserror::Error, Debug)]
pub enum SpheruleError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpheruleError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            SpheruleError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            SpheruleError::dataset("x")
                .to_string()
                .contains("dataset error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = SpheruleError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
