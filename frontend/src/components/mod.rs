pub mod course_list;
pub mod error_boundary;
pub mod search_input;
