use reqwest::{Client, Url, header::USER_AGENT};
use secrecy::{ExposeSecret, Secret};
use uncany_core::{DirectoryError, SchoolDirectory, SchoolId, SchoolListing, SchoolSearch};

use super::dto::NeisResponseDto;
use crate::http::endpoint;

/// School directory backed by the NEIS Open API `schoolInfo` dataset.
///
/// The API key travels as a query parameter, so transport errors are
/// stripped of their URL before they are reported.
pub struct NeisSchoolDirectory {
    http_client: Client,
    base_url: Url,
    api_key: Secret<String>,
    client_id: String,
}

impl NeisSchoolDirectory {
    pub fn new(
        base_url: Url,
        api_key: Secret<String>,
        client_id: String,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
            client_id,
        }
    }

    fn school_info_url<'a>(
        &self,
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Url, DirectoryError> {
        let mut url =
            endpoint(&self.base_url, &[SCHOOL_INFO]).map_err(DirectoryError::Transport)?;
        url.query_pairs_mut()
            .append_pair("KEY", self.api_key.expose_secret())
            .append_pair("Type", "json")
            .extend_pairs(params);
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<SchoolListing, DirectoryError> {
        let response = self
            .http_client
            .get(url)
            .header(USER_AGENT, &self.client_id)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::Transport(e.without_url().to_string()))?;
        let dto: NeisResponseDto =
            serde_json::from_str(&body).map_err(|e| DirectoryError::Decode(e.to_string()))?;

        if let Some((code, message)) = dto.rejection() {
            tracing::error!(code, message, "School directory rejected the request");
            return Err(DirectoryError::Rejected(code.to_string()));
        }

        Ok(dto.into_listing().unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl SchoolDirectory for NeisSchoolDirectory {
    #[tracing::instrument(name = "Searching school directory", skip_all)]
    async fn search(&self, search: &SchoolSearch) -> Result<SchoolListing, DirectoryError> {
        let page = search.page.get().to_string();
        let limit = search.limit.get().to_string();

        let mut params = vec![
            ("pIndex", page.as_str()),
            ("pSize", limit.as_str()),
            ("SCHUL_NM", search.query.as_ref()),
        ];
        if let Some(code) = &search.edu_office_code {
            params.push(("ATPT_OFCDC_SC_CODE", code.as_ref()));
        }

        let url = self.school_info_url(params)?;
        self.fetch(url).await
    }

    #[tracing::instrument(name = "Looking up school", skip_all, fields(school_id = %school_id))]
    async fn lookup(&self, school_id: &SchoolId) -> Result<SchoolListing, DirectoryError> {
        let url = self.school_info_url([("SD_SCHUL_CODE", school_id.as_ref())])?;
        self.fetch(url).await
    }
}

const SCHOOL_INFO: &str = "schoolInfo";
