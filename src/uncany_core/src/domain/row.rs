use chrono::{DateTime, SecondsFormat, Utc};

/// A value assigned to a column by a row update.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchValue {
    Text(String),
    Timestamp(DateTime<Utc>),
    Null,
}

impl PatchValue {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            PatchValue::Text(text) => serde_json::Value::String(text.clone()),
            PatchValue::Timestamp(at) => {
                serde_json::Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            PatchValue::Null => serde_json::Value::Null,
        }
    }
}

/// Ordered column assignments applied by a row update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowPatch {
    assignments: Vec<(String, PatchValue)>,
}

impl RowPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: impl Into<String>, value: PatchValue) -> Self {
        self.assignments.push((column.into(), value));
        self
    }

    pub fn assignments(&self) -> &[(String, PatchValue)] {
        &self.assignments
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// The patch as a JSON object, later assignments winning.
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .assignments
            .iter()
            .map(|(column, value)| (column.clone(), value.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(object)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowFilterCondition {
    Eq { column: String, value: String },
    IsNull { column: String },
}

impl RowFilterCondition {
    pub fn column(&self) -> &str {
        match self {
            RowFilterCondition::Eq { column, .. } | RowFilterCondition::IsNull { column } => {
                column
            }
        }
    }
}

/// Conjunction of conditions selecting the rows an update applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    conditions: Vec<RowFilterCondition>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.push(RowFilterCondition::Eq {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    pub fn is_null(mut self, column: impl Into<String>) -> Self {
        self.conditions.push(RowFilterCondition::IsNull {
            column: column.into(),
        });
        self
    }

    pub fn conditions(&self) -> &[RowFilterCondition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
