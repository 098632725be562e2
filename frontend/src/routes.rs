use dioxus::prelude::*;

use crate::pages::course_search_page::CourseSearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    CourseSearchPage {},
}
