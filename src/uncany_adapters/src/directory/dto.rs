//! Wire format of the NEIS `schoolInfo` dataset.
//!
//! A successful response looks like
//! `{"schoolInfo": [{"head": [{"list_total_count": 3}, {"RESULT": {...}}]}, {"row": [...]}]}`.
//! When nothing matches, or the request is refused, only a top level
//! `{"RESULT": {"CODE": ..., "MESSAGE": ...}}` is sent, still with status 200.

use serde::Deserialize;
use uncany_core::{DirectoryRecord, SchoolListing};

const ERROR_CODE_PREFIX: &str = "ERROR-";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NeisResponseDto {
    #[serde(rename = "schoolInfo", default)]
    school_info: Option<Vec<SectionDto>>,
    #[serde(rename = "RESULT", default)]
    result: Option<ResultDto>,
}

#[derive(Debug, Default, Deserialize)]
struct SectionDto {
    #[serde(default)]
    head: Option<Vec<HeadEntryDto>>,
    #[serde(default)]
    row: Option<Vec<SchoolRowDto>>,
}

#[derive(Debug, Default, Deserialize)]
struct HeadEntryDto {
    #[serde(default)]
    list_total_count: Option<u64>,
    #[serde(rename = "RESULT", default)]
    result: Option<ResultDto>,
}

#[derive(Debug, Default, Deserialize)]
struct ResultDto {
    #[serde(rename = "CODE", default)]
    code: String,
    #[serde(rename = "MESSAGE", default)]
    message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
struct SchoolRowDto {
    sd_schul_code: Option<String>,
    schul_nm: Option<String>,
    org_rdnma: Option<String>,
    atpt_ofcdc_sc_code: Option<String>,
    atpt_ofcdc_sc_nm: Option<String>,
    org_telno: Option<String>,
    hmpg_adres: Option<String>,
}

impl SchoolRowDto {
    fn into_record(self) -> Option<DirectoryRecord> {
        let school_id = self.sd_schul_code.filter(|code| !code.trim().is_empty())?;
        Some(DirectoryRecord {
            school_id,
            name: self.schul_nm.unwrap_or_default(),
            address: self.org_rdnma.unwrap_or_default(),
            edu_office_code: self.atpt_ofcdc_sc_code.unwrap_or_default(),
            edu_office_name: self.atpt_ofcdc_sc_nm.unwrap_or_default(),
            phone: self.org_telno.filter(|v| !v.is_empty()),
            homepage: self.hmpg_adres.filter(|v| !v.is_empty()),
        })
    }
}

impl NeisResponseDto {
    /// The `ERROR-*` code and message, if the upstream refused the request.
    pub(crate) fn rejection(&self) -> Option<(&str, &str)> {
        let head_results = self
            .school_info
            .iter()
            .flatten()
            .flat_map(|section| section.head.iter().flatten())
            .filter_map(|entry| entry.result.as_ref());

        self.result
            .iter()
            .chain(head_results)
            .find(|result| result.code.starts_with(ERROR_CODE_PREFIX))
            .map(|result| (result.code.as_str(), result.message.as_str()))
    }

    /// The listing carried by the envelope, `None` if there is no envelope.
    ///
    /// Missing levels count as empty; rows without a school code are dropped.
    pub(crate) fn into_listing(self) -> Option<SchoolListing> {
        let sections = self.school_info?;

        let mut listing = SchoolListing::default();
        for section in sections {
            if let Some(total) = section
                .head
                .iter()
                .flatten()
                .find_map(|entry| entry.list_total_count)
            {
                listing.total = total;
            }

            for row in section.row.into_iter().flatten() {
                match row.into_record() {
                    Some(record) => listing.records.push(record),
                    None => tracing::warn!("Dropping school row without a school code"),
                }
            }
        }

        Some(listing)
    }
}
