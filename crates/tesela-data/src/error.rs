//! Dataset and hierarchy construction errors.

use std::fmt;

/// Error building a chart dataset.
///
/// Construction fails fast: proportional-area layout has no sound
/// interpretation of negative or undefined mass, so a malformed record
/// is fatal for the dataset load rather than silently skipped.
#[derive(Debug)]
pub enum DataError {
    /// The record list was empty.
    EmptyDataset,
    /// A record carried a negative value.
    NegativeValue {
        /// Name of the offending record
        name: String,
        /// The negative value
        value: f64,
    },
    /// A record carried a NaN or infinite value.
    NonFiniteValue {
        /// Name of the offending record
        name: String,
    },
    /// A record had an empty category.
    MissingCategory {
        /// Name of the offending record
        name: String,
    },
    /// The dataset document was not valid JSON of the expected shape.
    Json(serde_json::Error),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => write!(f, "dataset contains no records"),
            Self::NegativeValue { name, value } => {
                write!(f, "record '{name}' has negative value {value}")
            }
            Self::NonFiniteValue { name } => {
                write!(f, "record '{name}' has a non-finite value")
            }
            Self::MissingCategory { name } => {
                write!(f, "record '{name}' has no category")
            }
            Self::Json(err) => write!(f, "dataset parse error: {err}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DataError::EmptyDataset.to_string(),
            "dataset contains no records"
        );
        assert_eq!(
            DataError::NegativeValue {
                name: "Tetris".to_string(),
                value: -1.5,
            }
            .to_string(),
            "record 'Tetris' has negative value -1.5"
        );
        assert_eq!(
            DataError::MissingCategory {
                name: "Tetris".to_string(),
            }
            .to_string(),
            "record 'Tetris' has no category"
        );
    }

    #[test]
    fn test_json_source() {
        use std::error::Error;
        let json_err = serde_json::from_str::<f64>("x").unwrap_err();
        let err = DataError::from(json_err);
        assert!(err.source().is_some());
    }
}
