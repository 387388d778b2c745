use std::io::Read as _;
use std::path::Path;

use super::{ConfigError, MatchCase, parse_case};

/// Trait for loading case files.
pub trait CaseLoader {
    fn load(&self, path: &Path) -> Result<MatchCase, ConfigError>;
}

/// Reads case files from the filesystem. `-` reads standard input.
#[derive(Debug, Default)]
pub struct FileCaseLoader;

impl FileCaseLoader {
    pub fn new() -> Self {
        Self
    }

    fn read_source(path: &Path) -> Result<String, ConfigError> {
        if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        Ok(std::fs::read_to_string(path)?)
    }
}

impl CaseLoader for FileCaseLoader {
    fn load(&self, path: &Path) -> Result<MatchCase, ConfigError> {
        let yaml = Self::read_source(path)?;
        let case = parse_case(&yaml)?;
        case.validate()?;
        Ok(case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatternEntry;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    fn write_case(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
        let path = dir.path().join("case.yml");
        fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn loads_case_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_case(
            &dir,
            indoc! {"
                pattern:
                  command: ship
                tokens:
                  - argument: ship
            "},
        );
        let case = FileCaseLoader::new().load(&path).unwrap();
        assert_eq!(case.pattern, PatternEntry::Command("ship".into()));
        assert_eq!(case.tokens.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = FileCaseLoader::new().load(&dir.path().join("absent.yml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let dir = TempDir::new().unwrap();
        let path = write_case(&dir, "pattern: [unclosed");
        let result = FileCaseLoader::new().load(&path);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn invalid_case_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_case(
            &dir,
            indoc! {"
                pattern:
                  argument: { name: '' }
            "},
        );
        let result = FileCaseLoader::new().load(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
