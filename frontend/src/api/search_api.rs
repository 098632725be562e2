//! Client API calls for the course search endpoint.

use common::course_record::CourseRecord;
use dioxus::prelude::*;


#[server]
pub async fn search_courses(q: String) -> Result<Vec<CourseRecord>, ServerFnError> {
    let x = backend::api::search_courses_from_env(q).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
