use std::fs;
use std::path::Path;

use rewire_core::errors::{ErrorInfo, RewireError};
use rewire_core::Matrix;
use rewire_graph::{matrix_from_bytes, matrix_from_json, matrix_to_bytes, matrix_to_json};

/// On-disk matrix encodings, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    /// JSON array of rows.
    Json,
    /// Comma-separated rows without a header.
    Csv,
    /// `bincode` payload.
    Binary,
}

impl MatrixFormat {
    pub fn from_path(path: &Path) -> Result<Self, RewireError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(MatrixFormat::Json),
            Some("csv") => Ok(MatrixFormat::Csv),
            Some("bin") => Ok(MatrixFormat::Binary),
            _ => Err(RewireError::Serde(
                ErrorInfo::new("unknown-format", "unsupported matrix file extension")
                    .with_context("path", path.display().to_string())
                    .with_hint("use .json, .csv or .bin"),
            )),
        }
    }
}

fn io_error(code: &str, path: &Path, err: impl ToString) -> RewireError {
    RewireError::Serde(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Reads a real matrix in the format implied by `path`.
pub fn read_matrix(path: &Path) -> Result<Matrix<f64>, RewireError> {
    match MatrixFormat::from_path(path)? {
        MatrixFormat::Json => {
            let text = fs::read_to_string(path).map_err(|err| io_error("read-matrix", path, err))?;
            matrix_from_json(&text)
        }
        MatrixFormat::Csv => {
            let text = fs::read_to_string(path).map_err(|err| io_error("read-matrix", path, err))?;
            matrix_from_csv(&text)
        }
        MatrixFormat::Binary => {
            let bytes = fs::read(path).map_err(|err| io_error("read-matrix", path, err))?;
            matrix_from_bytes(&bytes)
        }
    }
}

/// Writes `matrix` in the format implied by `path`.
pub fn write_matrix(path: &Path, matrix: &Matrix<f64>) -> Result<(), RewireError> {
    let bytes = match MatrixFormat::from_path(path)? {
        MatrixFormat::Json => matrix_to_json(matrix)?.into_bytes(),
        MatrixFormat::Csv => matrix_to_csv(matrix)?.into_bytes(),
        MatrixFormat::Binary => matrix_to_bytes(matrix)?,
    };
    fs::write(path, bytes).map_err(|err| io_error("write-matrix", path, err))
}

pub fn matrix_from_csv(text: &str) -> Result<Matrix<f64>, RewireError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record
            .map_err(|err| RewireError::Serde(ErrorInfo::new("parse-csv", err.to_string())))?;
        let values = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                field.parse::<f64>().map_err(|err| {
                    RewireError::Serde(
                        ErrorInfo::new("parse-csv", err.to_string())
                            .with_context("row", row.to_string())
                            .with_context("col", col.to_string()),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(values);
    }
    Matrix::from_rows(rows)
}

pub fn matrix_to_csv(matrix: &Matrix<f64>) -> Result<String, RewireError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for row in matrix.row_iter() {
        writer
            .write_record(row.iter().map(|value| value.to_string()))
            .map_err(|err| RewireError::Serde(ErrorInfo::new("write-csv", err.to_string())))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| RewireError::Serde(ErrorInfo::new("write-csv", err.to_string())))?;
    String::from_utf8(bytes)
        .map_err(|err| RewireError::Serde(ErrorInfo::new("write-csv", err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_parses_rows_and_rejects_ragged_input() {
        let matrix = matrix_from_csv("0, 1.5, 0\n1.5, 0, -2\n0, -2, 0\n").unwrap();
        assert_eq!(matrix.shape(), (3, 3));
        assert_eq!(matrix[(1, 2)], -2.0);

        let err = matrix_from_csv("0,1\n1\n").unwrap_err();
        assert_eq!(err.code(), "ragged-rows");
        let err = matrix_from_csv("0,x\n").unwrap_err();
        assert_eq!(err.code(), "parse-csv");
    }

    #[test]
    fn every_format_roundtrips_through_disk() {
        let dir = tempdir().unwrap();
        let matrix = Matrix::from_rows(vec![vec![0.0, 0.1], vec![0.1, 0.0]]).unwrap();
        for name in ["graph.json", "graph.csv", "graph.bin"] {
            let path = dir.path().join(name);
            write_matrix(&path, &matrix).unwrap();
            assert_eq!(read_matrix(&path).unwrap(), matrix, "{name}");
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = MatrixFormat::from_path(Path::new("graph.mat")).unwrap_err();
        assert_eq!(err.code(), "unknown-format");
    }
}
