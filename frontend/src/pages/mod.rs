pub mod course_search_page;
