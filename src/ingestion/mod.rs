pub mod labels;
pub mod transcript;

use std::{
    collections::HashMap,
    str::FromStr,
};

use crate::core::StutterlensError;

/// Column lookup built from a source file's header line. Extra columns are
/// tolerated; a missing required column is fatal for the whole file.
pub struct Header {
    file: String,
    index: HashMap<String, usize>,
}

impl Header {
    pub fn parse(file: &str, line: &str) -> Self {
        let index = split_fields(line)
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name, i))
            .collect();

        Header { file: file.to_string(), index }
    }

    pub fn column(&self, name: &str) -> Result<usize, StutterlensError> {
        self.index.get(name).copied().ok_or_else(|| StutterlensError::MissingColumn {
            file: self.file.clone(),
            column: name.to_string(),
        })
    }
}

/// One data row, carrying enough context to report errors by file and line.
pub struct Row<'a> {
    pub file: &'a str,
    pub number: usize,
    fields: Vec<String>,
}

impl<'a> Row<'a> {
    pub fn parse(file: &'a str, number: usize, line: &str) -> Self {
        Row { file, number, fields: split_fields(line) }
    }

    pub fn get(&self, column: usize, name: &str) -> Result<&str, StutterlensError> {
        self.fields
            .get(column)
            .map(|s| s.as_str())
            .ok_or_else(|| self.invalid(format!("missing value for '{}'", name)))
    }

    pub fn parse_field<T: FromStr>(
        &self,
        column: usize,
        name: &str,
    ) -> Result<T, StutterlensError> {
        let value = self.get(column, name)?;
        value
            .trim()
            .parse::<T>()
            .map_err(|_| self.invalid(format!("'{}' is not a valid {}", value, name)))
    }

    pub fn invalid(&self, message: String) -> StutterlensError {
        StutterlensError::InvalidRow { file: self.file.to_string(), row: self.number, message }
    }
}

/// Splits one CSV record into fields. Double-quoted fields may contain commas
/// and escaped quotes ("") so show names and letter lists survive intact.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
