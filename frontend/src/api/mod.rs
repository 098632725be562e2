pub mod search_api;
