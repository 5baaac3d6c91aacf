use crate::domain::ports::CitySource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

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
}

impl CitySource for FileSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Reading cities from file: {}", self.path.display());
        let data = tokio::fs::read_to_string(&self.path).await?;
        Ok(data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GeoError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_whole_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{"1": {"city": "Leeds", "lat": 53.8, "lon": -1.55}}"#)
            .unwrap();

        let source = FileSource::new(temp_file.path());
        let data = tokio_test::block_on(source.fetch()).unwrap();
        assert!(data.contains("Leeds"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FileSource::new("does/not/exist/cities.json");
        let err = tokio_test::block_on(source.fetch()).unwrap_err();
        assert!(matches!(err, GeoError::IoError(_)));
    }
}
