//! INI file configuration adapter.

use crate::domain::error::CongressError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CongressError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config
            .load(path)
            .map_err(|reason| CongressError::ConfigParse {
                file: path.display().to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, CongressError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| CongressError::ConfigParse {
                file: "<string>".to_string(),
                reason,
            })?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[data]
path = ./data/congress

[algorithm]
start_date = 2022-02-14
end_date = 2022-02-18
cash = 100000
history_periods = 1
transaction = buy

[log]
level = debug
"#;

    #[test]
    fn get_string_reads_sections() {
        let adapter = FileConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(
            adapter.get_string("data", "path"),
            Some("./data/congress".to_string())
        );
        assert_eq!(adapter.get_string("log", "level"), Some("debug".to_string()));
        assert_eq!(adapter.get_string("algorithm", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_date_parses_or_reports_raw_value() {
        let adapter = FileConfigAdapter::from_string(
            "[algorithm]\nstart_date = 2022-02-14\nend_date = Feb 18\n",
        )
        .unwrap();
        assert_eq!(
            adapter.get_date("algorithm", "start_date"),
            Some(Ok(NaiveDate::from_ymd_opt(2022, 2, 14).unwrap()))
        );
        assert_eq!(
            adapter.get_date("algorithm", "end_date"),
            Some(Err("Feb 18".to_string()))
        );
        assert_eq!(adapter.get_date("algorithm", "missing"), None);
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("algorithm", "end_date"),
            Some("2022-02-18".to_string())
        );
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = FileConfigAdapter::from_file("/nonexistent/path/config.ini").unwrap_err();
        assert!(
            matches!(err, CongressError::ConfigParse { file, .. } if file == "/nonexistent/path/config.ini")
        );
    }
}
