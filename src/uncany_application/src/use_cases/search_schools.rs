use serde::Serialize;
use uncany_core::{DirectoryError, DirectoryRecord, SchoolDirectory, SchoolSearch};

/// Body of a successful `search_schools` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolPage {
    pub schools: Vec<DirectoryRecord>,
    pub total: u64,
}

/// Search use case - one upstream call, contact details stripped.
pub struct SearchSchoolsUseCase<'a, D>
where
    D: SchoolDirectory,
{
    directory: &'a D,
}

impl<'a, D> SearchSchoolsUseCase<'a, D>
where
    D: SchoolDirectory,
{
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    #[tracing::instrument(name = "SearchSchoolsUseCase::execute", skip_all)]
    pub async fn execute(&self, search: &SchoolSearch) -> Result<SchoolPage, DirectoryError> {
        let listing = self.directory.search(search).await?;

        Ok(SchoolPage {
            schools: listing
                .records
                .into_iter()
                .map(DirectoryRecord::summary)
                .collect(),
            total: listing.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use uncany_core::{SchoolId, SchoolListing};

    #[derive(Clone, Default)]
    struct MockDirectory {
        searches: Arc<Mutex<Vec<SchoolSearch>>>,
    }

    #[async_trait::async_trait]
    impl SchoolDirectory for MockDirectory {
        async fn search(&self, search: &SchoolSearch) -> Result<SchoolListing, DirectoryError> {
            self.searches.lock().unwrap().push(search.clone());
            Ok(SchoolListing {
                total: 42,
                records: vec![DirectoryRecord {
                    school_id: "7010569".to_string(),
                    name: "Seoul Elementary School".to_string(),
                    address: "Jongno-gu".to_string(),
                    edu_office_code: "B10".to_string(),
                    edu_office_name: "Seoul Office of Education".to_string(),
                    phone: Some("02-000-0000".to_string()),
                    homepage: Some("http://school.example".to_string()),
                }],
            })
        }

        async fn lookup(&self, _school_id: &SchoolId) -> Result<SchoolListing, DirectoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_search_strips_contact_details() {
        let directory = MockDirectory::default();
        let use_case = SearchSchoolsUseCase::new(&directory);
        let search = SchoolSearch::parse(Some("Seoul"), None, None, None).unwrap();

        let page = use_case.execute(&search).await.unwrap();

        assert_eq!(page.total, 42);
        assert_eq!(page.schools.len(), 1);
        assert_eq!(page.schools[0].phone, None);
        assert_eq!(page.schools[0].homepage, None);
        assert_eq!(directory.searches.lock().unwrap().as_slice(), [search]);
    }
}
