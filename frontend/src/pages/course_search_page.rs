//! The course catalog search page.

use dioxus::prelude::*;

use common::course_record::CourseRecord;

use crate::api::search_api::search_courses;
use crate::components::course_list::CourseList;
use crate::components::search_input::SearchInput;
use crate::debounce::{QUIET_PERIOD_MS, use_debounced_term};

#[component]
pub fn CourseSearchPage() -> Element {
    rsx! {
        Title { "Course Catalog" }
        CourseSearchRootComponent {}
    }
}

#[component]
fn CourseSearchRootComponent() -> Element {
    let mut debounced = use_debounced_term(QUIET_PERIOD_MS);
    let committed_term = debounced.committed_term();

    // Restarts whenever the committed term changes; the superseded in-flight
    // request is dropped, so a response for an older term is never applied
    // over a newer one. Exactly one request goes out per committed term.
    let search_result = use_resource(move || {
        let q = committed_term.read().clone();
        search_courses(q)
    });

    // Last successful result set. A failed fetch keeps it on screen instead
    // of blanking the list; the next committed term supersedes the failure.
    let mut courses = use_signal(Vec::<CourseRecord>::new);
    let mut fetch_failed = use_signal(|| false);
    use_effect(move || match search_result.read().as_ref() {
        Some(Ok(results)) => {
            courses.set(results.clone());
            fetch_failed.set(false);
        }
        Some(Err(_)) => {
            fetch_failed.set(true);
        }
        None => {}
    });

    rsx! {
        main {
            id: "x-course-search-root",
            style: "
                padding: 20px;
                max-width: 800px;
                margin: auto;
            ",
            h1 { "Course Catalog" }
            SearchInput {
                term: debounced.typed_term(),
                on_input: move |new_term: String| {
                    debounced.on_input(new_term);
                },
            }
            if fetch_failed() {
                div {
                    id: "x-course-search-fetch-error",
                    style: "color: darkred; font-size: 14px; margin-bottom: 8px;",
                    "Search is temporarily unavailable, showing previous results."
                }
            }
            CourseList { courses: courses() }
        }
    }
}
