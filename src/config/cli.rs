use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

/// Writes each rendered document to stdout, one per line.
#[derive(Debug, Clone, Default)]
pub struct StdoutStorage;

impl Storage for StdoutStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(data)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(format!("stdout ({})", path))
    }
}
