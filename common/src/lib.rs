//! Shared data model between frontend and backend.

extern crate serde;


pub mod course_record;
