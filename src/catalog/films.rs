use std::path::Path;

use tracing::debug;

use crate::catalog::CatalogError;

/// Default location of the film list, relative to the working directory
pub const DEFAULT_FILM_LIST: &str = "film-slugs.json";

/// Load the film list from a JSON file.
///
/// The file must contain a JSON array of strings; any other shape fails
/// with [`CatalogError::Parse`].
///
/// # Errors
///
/// Returns [`CatalogError::Read`] if the file cannot be read, or
/// [`CatalogError::Parse`] if the content is not an array of strings.
pub fn load_films(path: &Path) -> Result<Vec<String>, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    let films = parse_film_list(&content)?;
    debug!("loaded {} films from {}", films.len(), path.display());
    Ok(films)
}

/// Parse film list JSON text into titles.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the text is not a JSON array of strings.
pub fn parse_film_list(json: &str) -> Result<Vec<String>, CatalogError> {
    let films: Vec<String> = serde_json::from_str(json)?;
    Ok(films)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_film_list() {
        let films = parse_film_list(r#"["Matrix-1999", "Inception-2010"]"#).unwrap();
        assert_eq!(films, vec!["Matrix-1999", "Inception-2010"]);
    }

    #[test]
    fn test_parse_empty_list() {
        let films = parse_film_list("[]").unwrap();
        assert!(films.is_empty());
    }

    #[test]
    fn test_parse_rejects_object() {
        let err = parse_film_list(r#"{"films": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_mixed_array() {
        let err = parse_film_list(r#"["Matrix-1999", 42]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_film_list("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = load_films(Path::new("no/such/film-slugs.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read(_)));
    }
}
