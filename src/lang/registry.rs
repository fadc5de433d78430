//! Language registry: the five columns of the stopword table, in CSV order.

use std::sync::OnceLock;

/// Configuration for one column of the stopword table.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// CSV header and lookup key (e.g., "en", "formal_id")
    pub header: &'static str,

    /// English name of the column language
    pub name: &'static str,

    /// Native name of the column language
    pub native_name: &'static str,

    /// ISO 639-1 code sent to the translation API ("formal_id" maps to "id")
    pub iso_code: &'static str,

    /// Whether this column is the translation target (only one should be true)
    pub is_canonical: bool,
}

/// Global registry of table columns.
pub struct LanguageRegistry {
    columns: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            columns: default_columns(),
        })
    }

    /// Get a column configuration by its header.
    pub fn get_by_header(&self, header: &str) -> Option<&LanguageConfig> {
        self.columns.iter().find(|column| column.header == header)
    }

    /// Position of a column in CSV order.
    pub fn position(&self, header: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.header == header)
    }

    /// All columns in CSV order.
    pub fn columns(&self) -> &[LanguageConfig] {
        &self.columns
    }

    /// CSV headers in order.
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.header).collect()
    }

    /// The translation target column.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one canonical column.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical: Vec<_> = self
            .columns
            .iter()
            .filter(|column| column.is_canonical)
            .collect();

        match canonical.len() {
            0 => panic!("No canonical column found in registry"),
            1 => canonical[0],
            _ => panic!("Multiple canonical columns found in registry"),
        }
    }
}

fn default_columns() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            header: "en",
            name: "English",
            native_name: "English",
            iso_code: "en",
            is_canonical: true,
        },
        LanguageConfig {
            header: "id",
            name: "Indonesian (colloquial)",
            native_name: "Bahasa gaul",
            iso_code: "id",
            is_canonical: false,
        },
        LanguageConfig {
            header: "jv",
            name: "Javanese",
            native_name: "Basa Jawa",
            iso_code: "jv",
            is_canonical: false,
        },
        LanguageConfig {
            header: "su",
            name: "Sundanese",
            native_name: "Basa Sunda",
            iso_code: "su",
            is_canonical: false,
        },
        LanguageConfig {
            header: "formal_id",
            name: "Indonesian (formal)",
            native_name: "Bahasa Indonesia baku",
            iso_code: "id",
            is_canonical: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_headers_are_in_csv_order() {
        assert_eq!(
            LanguageRegistry::get().headers(),
            vec!["en", "id", "jv", "su", "formal_id"]
        );
    }

    #[test]
    fn test_get_by_header_formal_indonesian() {
        let config = LanguageRegistry::get()
            .get_by_header("formal_id")
            .expect("formal_id should exist");

        assert_eq!(config.iso_code, "id");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_header_nonexistent() {
        assert!(LanguageRegistry::get().get_by_header("fr").is_none());
    }

    #[test]
    fn test_position() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.position("en"), Some(0));
        assert_eq!(registry.position("formal_id"), Some(4));
        assert_eq!(registry.position("xx"), None);
    }

    #[test]
    fn test_canonical_is_english() {
        let canonical = LanguageRegistry::get().canonical();
        assert_eq!(canonical.header, "en");
        assert_eq!(canonical.iso_code, "en");
    }
}
