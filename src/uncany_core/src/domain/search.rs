use std::{num::IntErrorKind, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

/// Characters a directory query may not contain.
pub const FORBIDDEN_QUERY_CHARACTERS: [char; 5] = ['<', '>', '\'', '"', '&'];

pub const MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_PAGE_INDEX: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 50;

static SCHOOL_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("school id pattern is valid"));
static EDU_OFFICE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").expect("office code pattern is valid"));

/// Rejected directory input. The messages are shown to callers as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchInputError {
    #[error("query must be at least 2 characters")]
    QueryTooShort,
    #[error("special characters not allowed")]
    ForbiddenCharacters,
    #[error("schoolId is required")]
    MissingSchoolId,
    #[error("schoolId must be numeric")]
    MalformedSchoolId,
    #[error("eduOfficeCode must be 1-10 alphanumeric characters")]
    MalformedEduOfficeCode,
}

/// School name search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolQuery(String);

impl SchoolQuery {
    /// Validate a raw query parameter.
    ///
    /// Length is checked before content. A query that sanitizing would alter
    /// is rejected outright instead of being forwarded in sanitized form.
    pub fn parse(raw: Option<&str>) -> Result<Self, SearchInputError> {
        let raw = raw.ok_or(SearchInputError::QueryTooShort)?;
        if raw.chars().count() < MIN_QUERY_CHARS {
            return Err(SearchInputError::QueryTooShort);
        }

        let sanitized: String = raw
            .chars()
            .filter(|c| !FORBIDDEN_QUERY_CHARACTERS.contains(c))
            .collect();
        if sanitized != raw {
            return Err(SearchInputError::ForbiddenCharacters);
        }

        Ok(Self(sanitized))
    }
}

impl AsRef<str> for SchoolQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Positive integer input, saturating when too large to represent.
fn parse_positive(raw: Option<&str>) -> Option<u64> {
    match raw?.trim().parse::<i64>() {
        Ok(value) if value >= 1 => Some(value as u64),
        Ok(_) => None,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

/// 1-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndex(u32);

impl PageIndex {
    /// Absent, unparseable and non-positive values fall back to the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        parse_positive(raw)
            .map(|page| Self(u32::try_from(page).unwrap_or(u32::MAX)))
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self(DEFAULT_PAGE_INDEX)
    }
}

/// Page size, always within `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Absent, unparseable and non-positive values fall back to the default;
    /// oversized values are clamped rather than rejected.
    pub fn parse(raw: Option<&str>) -> Self {
        parse_positive(raw)
            .map(|limit| Self(limit.min(u64::from(MAX_PAGE_SIZE)) as u32))
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// Provincial education office code used to narrow a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EduOfficeCode(String);

impl EduOfficeCode {
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, SearchInputError> {
        match raw {
            None | Some("") => Ok(None),
            Some(code) if EDU_OFFICE_CODE_REGEX.is_match(code) => Ok(Some(Self(code.to_string()))),
            Some(_) => Err(SearchInputError::MalformedEduOfficeCode),
        }
    }
}

impl AsRef<str> for EduOfficeCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Upstream school code, digits only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolId(String);

impl SchoolId {
    pub fn parse(raw: Option<&str>) -> Result<Self, SearchInputError> {
        let raw = raw.ok_or(SearchInputError::MissingSchoolId)?;
        if raw.is_empty() {
            return Err(SearchInputError::MissingSchoolId);
        }
        if !SCHOOL_ID_REGEX.is_match(raw) {
            return Err(SearchInputError::MalformedSchoolId);
        }
        Ok(Self(raw.to_string()))
    }
}

impl AsRef<str> for SchoolId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SchoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated `search_schools` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolSearch {
    pub query: SchoolQuery,
    pub page: PageIndex,
    pub limit: PageSize,
    pub edu_office_code: Option<EduOfficeCode>,
}

impl SchoolSearch {
    pub fn parse(
        query: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
        edu_office_code: Option<&str>,
    ) -> Result<Self, SearchInputError> {
        Ok(Self {
            query: SchoolQuery::parse(query)?,
            page: PageIndex::parse(page),
            limit: PageSize::parse(limit),
            edu_office_code: EduOfficeCode::parse(edu_office_code)?,
        })
    }
}
