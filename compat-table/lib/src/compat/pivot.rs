//! Decoding the platform-major payload and pivoting it feature-major.

use std::collections::HashMap;

use serde_json::Value;

use super::types::{CompatError, CompatResult, FeatureRecord, SupportEntry, json_kind};

/// The decoded payload: platforms in input order, each with its feature records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompatDocument {
    platforms: Vec<(String, Vec<FeatureRecord>)>,
}

impl CompatDocument {
    /// Parses raw JSON text.
    ///
    /// ## Errors
    ///
    /// - [`CompatError::MalformedPayload`] when the text is not valid JSON
    /// - [`CompatError::NotAnObject`] when the top level is not an object
    ///
    /// ## Examples
    ///
    /// ```
    /// use compat_table::CompatDocument;
    ///
    /// let doc = CompatDocument::parse(r#"{"Linux": [{"feature": "Sockets", "support": "full"}]}"#).unwrap();
    /// assert_eq!(doc.platform_names(), vec!["Linux"]);
    ///
    /// assert!(CompatDocument::parse(r#"{"Linux": [],}"#).is_err());
    /// ```
    pub fn parse(raw_json: &str) -> CompatResult<Self> {
        let value: Value = serde_json::from_str(raw_json)?;
        Self::from_value(&value)
    }

    /// Builds a document from an already-parsed JSON value.
    ///
    /// Platforms whose value is not an array contribute no records; records
    /// without a `feature` are skipped.
    pub fn from_value(value: &Value) -> CompatResult<Self> {
        let object = value.as_object().ok_or(CompatError::NotAnObject {
            found: json_kind(value),
        })?;

        let platforms = object
            .iter()
            .map(|(platform, features)| {
                let records = match features.as_array() {
                    Some(items) => items.iter().filter_map(FeatureRecord::from_value).collect(),
                    None => {
                        tracing::debug!(platform = %platform, "Platform feature list is not an array");
                        Vec::new()
                    }
                };
                (platform.clone(), records)
            })
            .collect();

        Ok(Self { platforms })
    }

    pub fn platform_names(&self) -> Vec<&str> {
        self.platforms.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Regroups the records by feature.
    ///
    /// Rows follow the order in which feature names are first seen, scanning
    /// platforms in input order. When a platform lists the same feature more
    /// than once, the last record wins.
    pub fn pivot(&self) -> PivotTable {
        let mut rows: Vec<PivotRow> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for (platform, records) in &self.platforms {
            for record in records {
                let row = *index.entry(record.feature.as_str()).or_insert_with(|| {
                    rows.push(PivotRow {
                        feature: record.feature.clone(),
                        cells: HashMap::new(),
                    });
                    rows.len() - 1
                });
                rows[row]
                    .cells
                    .insert(platform.clone(), record.entry.clone());
            }
        }

        PivotTable {
            platforms: self.platforms.iter().map(|(name, _)| name.clone()).collect(),
            rows,
        }
    }
}

/// Feature-major view of a [`CompatDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PivotTable {
    platforms: Vec<String>,
    rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Column headers in input order.
    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    pub fn row(&self, feature: &str) -> Option<&PivotRow> {
        self.rows.iter().find(|row| row.feature == feature)
    }
}

/// One feature and the platforms that list it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    pub feature: String,
    cells: HashMap<String, SupportEntry>,
}

impl PivotRow {
    /// The platform's entry, or `None` when the platform does not list this feature.
    pub fn cell(&self, platform: &str) -> Option<&SupportEntry> {
        self.cells.get(platform)
    }
}
