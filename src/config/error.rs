#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_saphyr::Error),
    #[error("validation errors:\n{}", bullet_list(.0))]
    Validation(Vec<String>),
}

fn bullet_list(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CaseLoader, FileCaseLoader, parse_case};
    use indoc::indoc;
    use std::error::Error as _;
    use tempfile::TempDir;

    #[test]
    fn missing_case_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = FileCaseLoader::new()
            .load(&dir.path().join("absent.yml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("io error: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn malformed_case_is_yaml_error() {
        let err = parse_case("pattern: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
        assert!(err.to_string().starts_with("yaml parse error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn validation_lists_each_problem_on_its_own_line() {
        let case = parse_case(indoc! {"
            pattern:
              required:
                - argument: { name: '' }
                - option: { name: -v, value: 0 }
                - option: { name: -v, value: [] }
            tokens:
              - option: { name: '' }
        "})
        .unwrap();
        let err = case.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            concat!(
                "validation errors:\n",
                "  - pattern.required[0].argument: name must not be empty\n",
                "  - pattern.required[2].option: '-v' declared as list conflicts with counter ",
                "at pattern.required[1].option\n",
                "  - tokens[0].option: name must not be empty",
            )
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn validation_error_surfaces_through_anyhow() {
        let case = parse_case("pattern:\n  command: ''\n").unwrap();
        let err: anyhow::Error = case.validate().unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "validation errors:\n  - pattern.command: name must not be empty"
        );
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}
