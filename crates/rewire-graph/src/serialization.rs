use rewire_core::errors::{ErrorInfo, RewireError};
use rewire_core::Matrix;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Serializes a matrix to a compact binary representation using `bincode`.
pub fn matrix_to_bytes<T: Serialize + Clone>(matrix: &Matrix<T>) -> Result<Vec<u8>, RewireError> {
    let serializable = SerializableMatrix::from_matrix(matrix);
    bincode::serialize(&serializable)
        .map_err(|err| RewireError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a matrix from its binary representation.
pub fn matrix_from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<Matrix<T>, RewireError> {
    let serializable: SerializableMatrix<T> = bincode::deserialize(bytes)
        .map_err(|err| RewireError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    Matrix::from_rows(serializable.rows)
}

/// Serializes a matrix to pretty JSON as an array of rows.
pub fn matrix_to_json<T: Serialize + Clone>(matrix: &Matrix<T>) -> Result<String, RewireError> {
    let serializable = SerializableMatrix::from_matrix(matrix);
    serde_json::to_string_pretty(&serializable.rows)
        .map_err(|err| RewireError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a matrix from a JSON array of rows; ragged rows are a `Shape` error.
pub fn matrix_from_json<T: DeserializeOwned>(json: &str) -> Result<Matrix<T>, RewireError> {
    let rows: Vec<Vec<T>> = serde_json::from_str(json)
        .map_err(|err| RewireError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    Matrix::from_rows(rows)
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableMatrix<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Clone> SerializableMatrix<T> {
    fn from_matrix(matrix: &Matrix<T>) -> Self {
        Self {
            rows: matrix.to_rows(),
        }
    }
}
