//! List Configuration

/// Storage key the list has always been persisted under
pub const DEFAULT_STORAGE_KEY: &str = "todoItems";

/// Settings for where and how the item list is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Key of the single storage entry holding the serialized list
    pub storage_key: String,
}

impl ListConfig {
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::with_storage_key(DEFAULT_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(ListConfig::default().storage_key, "todoItems");
    }
}
