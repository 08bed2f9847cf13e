use crate::utils::error::{ExportError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExportError::MissingFieldError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed: &str) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if extension.eq_ignore_ascii_case(allowed) => Ok(()),
        Some(extension) => Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Expected: {}",
                extension, allowed
            ),
        }),
        None => Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("jrv", "2507").is_ok());
        assert!(validate_non_empty_string("jrv", "").is_err());
        assert!(validate_non_empty_string("jrv", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("input", "acta.json", "json").is_ok());
        assert!(validate_file_extension("input", "acta.JSON", "json").is_ok());
        assert!(validate_file_extension("input", "acta.txt", "json").is_err());
        assert!(validate_file_extension("input", "acta", "json").is_err());
    }
}
