use model::core::data_type::DataType;

#[derive(Debug, Clone)]
pub struct CsvColumnSpec {
    pub name: String,
    pub data_type: DataType,
}

impl CsvColumnSpec {
    pub fn new(name: &str, data_type: DataType) -> Self {
        CsvColumnSpec {
            name: name.to_string(),
            data_type,
        }
    }
}

/// Expected shape of one tabular source file. The header row of the file is
/// matched against these columns by normalized name.
#[derive(Debug, Clone)]
pub struct CsvTableSpec {
    pub name: String,
    pub columns: Vec<CsvColumnSpec>,
}

impl CsvTableSpec {
    pub fn new(name: &str, columns: Vec<CsvColumnSpec>) -> Self {
        CsvTableSpec {
            name: name.to_string(),
            columns,
        }
    }
}

pub fn normalize_col_name(name: &str) -> String {
    name.replace(" ", "_")
        .replace("-", "_")
        .replace(".", "_")
        .replace("(", "_")
        .replace(")", "_")
        .replace(",", "_")
        .to_lowercase()
}
