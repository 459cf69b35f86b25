use crate::file::csv::{
    error::FileError,
    metadata::{CsvTableSpec, normalize_col_name},
};
use csv::ReaderBuilder;
use model::records::row::{FieldValue, RowData};
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads one comma-separated UTF-8 file into typed rows. Cells are typed per
/// the table spec; unparseable or empty cells become null field values and
/// are left for the transformer to account for.
#[derive(Debug)]
pub struct CsvDataSource {
    spec: CsvTableSpec,
    path: PathBuf,
}

impl CsvDataSource {
    pub fn open(path: impl AsRef<Path>, spec: CsvTableSpec) -> Result<Self, FileError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(FileError::NotFound(path.display().to_string()));
        }
        Ok(CsvDataSource {
            spec,
            path: path.to_path_buf(),
        })
    }

    pub fn read_all(&self) -> Result<Vec<RowData>, FileError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        // Map spec columns onto header ordinals up front.
        let headers = reader.headers()?.clone();
        let mut ordinals = Vec::with_capacity(self.spec.columns.len());
        for col in &self.spec.columns {
            let ordinal = headers
                .iter()
                .position(|hdr| normalize_col_name(hdr) == col.name)
                .ok_or_else(|| FileError::MissingColumn {
                    column: col.name.clone(),
                    file: self.path.display().to_string(),
                })?;
            ordinals.push(ordinal);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let fields = self
                .spec
                .columns
                .iter()
                .zip(&ordinals)
                .map(|(col, ordinal)| {
                    let cell = record.get(*ordinal).unwrap_or("");
                    FieldValue {
                        name: col.name.clone(),
                        value: col.data_type.parse(cell),
                        data_type: col.data_type,
                    }
                })
                .collect();
            rows.push(RowData::new(&self.spec.name, fields));
        }

        info!(
            file = %self.path.display(),
            entity = %self.spec.name,
            rows = rows.len(),
            "Extracted raw rows"
        );
        Ok(rows)
    }
}
