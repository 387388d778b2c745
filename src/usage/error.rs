use super::Value;

#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("cannot merge {increment:?} into accumulated value {existing:?}")]
    IncompatibleMerge { existing: Value, increment: Value },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incompatible_merge_display() {
        let error = ValueError::IncompatibleMerge {
            existing: Value::Str("a".into()),
            increment: Value::Int(1),
        };
        assert_eq!(
            error.to_string(),
            r#"cannot merge Int(1) into accumulated value Str("a")"#
        );
    }

    #[test]
    fn value_error_implements_std_error() {
        let error: &dyn std::error::Error = &ValueError::IncompatibleMerge {
            existing: Value::Bool(true),
            increment: Value::Bool(true),
        };
        assert!(error.source().is_none());
    }

    #[test]
    fn value_error_into_anyhow() {
        let error = ValueError::IncompatibleMerge {
            existing: Value::Int(1),
            increment: Value::List(vec![]),
        };
        let anyhow_err: anyhow::Error = error.into();
        assert_eq!(
            anyhow_err.to_string(),
            "cannot merge List([]) into accumulated value Int(1)"
        );
    }
}
