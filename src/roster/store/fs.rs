use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::{Employee, COLUMNS};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CSV-backed store. The file is opened only for the duration of a single
/// `load` or `save` call.
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for CsvFileStore {
    fn load(&self) -> Result<Vec<Employee>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no roster file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RosterError::Io(e)),
        };

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        if !headers.iter().eq(COLUMNS.iter().copied()) {
            return Err(RosterError::InvalidHeader {
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut employees = Vec::new();
        for row in reader.deserialize() {
            let employee: Employee = row?;
            employees.push(employee);
        }

        debug!(path = %self.path.display(), count = employees.len(), "loaded roster");
        Ok(employees)
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_path(&self.path)?;

        writer.write_record(COLUMNS)?;
        for employee in employees {
            writer.write_record(employee.fields())?;
        }
        writer.flush().map_err(RosterError::Io)?;

        debug!(path = %self.path.display(), count = employees.len(), "saved roster");
        Ok(())
    }
}
