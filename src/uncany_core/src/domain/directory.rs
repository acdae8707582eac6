use serde::Serialize;

/// Projection of an upstream school record.
///
/// Only these fields ever reach a caller; everything else the upstream sends
/// is dropped when the record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryRecord {
    pub school_id: String,
    pub name: String,
    pub address: String,
    pub edu_office_code: String,
    pub edu_office_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl DirectoryRecord {
    /// The variant returned by searches, without contact details.
    pub fn summary(self) -> Self {
        Self {
            phone: None,
            homepage: None,
            ..self
        }
    }
}

/// A page of directory records together with the upstream's total count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolListing {
    pub total: u64,
    pub records: Vec<DirectoryRecord>,
}
