// crates/countries-core/src/source/file.rs
use super::{read_dataset, DataSource};
use crate::error::{DirectoryError, Result};
use crate::model::Country;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Dataset stored on the local file system.
///
/// Files ending in `.gz` are gunzipped on the fly when the `compact`
/// feature is enabled.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file, buffers it, and wraps it in a gzip decoder if needed.
    fn open_stream(&self) -> Result<Box<dyn Read>> {
        let file = File::open(&self.path).map_err(|e| {
            DirectoryError::NotFound(format!("{}: {}", self.path.display(), e))
        })?;
        let reader = BufReader::new(file);

        if is_gzip(&self.path) {
            #[cfg(feature = "compact")]
            {
                use flate2::read::GzDecoder;
                return Ok(Box::new(GzDecoder::new(reader)));
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(DirectoryError::invalid_config(format!(
                    "{} is gzipped but 'compact' is disabled",
                    self.path.display()
                )));
            }
        }

        Ok(Box::new(reader))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

impl DataSource for FileSource {
    fn fetch(&self) -> Result<Vec<Country>> {
        tracing::debug!(path = %self.path.display(), "reading dataset");
        read_dataset(self.open_stream()?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"[{"name": "Chile", "region": "Americas", "alpha3Code": "CHL"}]"#;

    #[test]
    fn reads_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, DATA).unwrap();

        let countries = FileSource::new(&path).fetch().unwrap();
        assert_eq!(countries[0].alpha3(), "CHL");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzipped_json() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(DATA.as_bytes()).unwrap();
        enc.finish().unwrap();

        let countries = FileSource::new(&path).fetch().unwrap();
        assert_eq!(countries[0].name(), "Chile");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = FileSource::new("/definitely/not/here.json").fetch().unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound(_)));
    }
}
