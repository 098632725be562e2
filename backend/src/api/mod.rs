//! Search API entry points.

mod search_courses;
pub use search_courses::{search_courses, search_courses_from_env};

#[cfg(test)]
mod tests;
