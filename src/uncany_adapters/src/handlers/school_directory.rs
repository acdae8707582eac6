//! Framework-agnostic school directory proxy handler.

use uncany_application::{GetSchoolInfoUseCase, SearchSchoolsUseCase};
use uncany_core::{
    AuthenticatedCaller, CorsPolicy, CorsResponseHelpers, EdgeRequest, EdgeResponseBuilder,
    IdentityProvider, SchoolDirectory, SchoolId, SchoolSearch,
};

use super::{METHOD_OPTIONS, authenticate};
use crate::error::EdgeApiError;

pub const SCHOOL_DIRECTORY_CORS: CorsPolicy = CorsPolicy::new("GET, OPTIONS");

const METHOD_GET: &str = "GET";
const ACTION_SEARCH_SCHOOLS: &str = "search_schools";
const ACTION_GET_SCHOOL_INFO: &str = "get_school_info";

/// Framework-agnostic school directory handler.
///
/// Authenticates the caller, validates the action's parameters and forwards
/// one request to the upstream directory. `directory` is `None` when the
/// upstream API key is not configured.
///
/// # Returns
/// The HTTP response, or an `EdgeApiError` for the route to render with
/// [`SCHOOL_DIRECTORY_CORS`]
#[tracing::instrument(name = "School directory", skip_all)]
pub async fn handle_school_directory<I, D, Q, B>(
    identity_provider: &I,
    directory: Option<&D>,
    request: &Q,
    builder: B,
) -> Result<B::Response, EdgeApiError>
where
    I: IdentityProvider,
    D: SchoolDirectory,
    Q: EdgeRequest,
    B: EdgeResponseBuilder,
{
    match request.method() {
        METHOD_OPTIONS => return Ok(builder.preflight(&SCHOOL_DIRECTORY_CORS)),
        METHOD_GET => {}
        _ => return Err(EdgeApiError::MethodNotAllowed),
    }

    let caller = authenticate(identity_provider, request).await?;

    let directory = directory.ok_or_else(|| {
        EdgeApiError::Configuration("school directory API key is not configured".to_string())
    })?;

    match request.query_param("action") {
        Some(ACTION_SEARCH_SCHOOLS) => search_schools(&caller, directory, request, builder).await,
        Some(ACTION_GET_SCHOOL_INFO) => get_school_info(&caller, directory, request, builder).await,
        _ => Err(EdgeApiError::UnsupportedAction),
    }
}

async fn search_schools<D, Q, B>(
    caller: &AuthenticatedCaller,
    directory: &D,
    request: &Q,
    builder: B,
) -> Result<B::Response, EdgeApiError>
where
    D: SchoolDirectory,
    Q: EdgeRequest,
    B: EdgeResponseBuilder,
{
    let search = SchoolSearch::parse(
        request.query_param("query"),
        request.query_param("page"),
        request.query_param("limit"),
        request.query_param("eduOfficeCode"),
    )?;

    let page = SearchSchoolsUseCase::new(directory).execute(&search).await?;

    tracing::info!(
        actor = %caller.id(),
        query = search.query.as_ref(),
        results = page.schools.len(),
        "School search"
    );

    let body = serde_json::to_value(&page).map_err(|e| EdgeApiError::Internal(e.to_string()))?;
    Ok(builder.cors_json(&SCHOOL_DIRECTORY_CORS, 200, body))
}

async fn get_school_info<D, Q, B>(
    caller: &AuthenticatedCaller,
    directory: &D,
    request: &Q,
    builder: B,
) -> Result<B::Response, EdgeApiError>
where
    D: SchoolDirectory,
    Q: EdgeRequest,
    B: EdgeResponseBuilder,
{
    let school_id = SchoolId::parse(request.query_param("schoolId"))?;

    let record = GetSchoolInfoUseCase::new(directory).execute(&school_id).await?;

    tracing::info!(
        actor = %caller.id(),
        school_id = %school_id,
        results = 1,
        "School info"
    );

    let body =
        serde_json::to_value(&record).map_err(|e| EdgeApiError::Internal(e.to_string()))?;
    Ok(builder.cors_json(&SCHOOL_DIRECTORY_CORS, 200, body))
}
