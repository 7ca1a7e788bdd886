//! busydates CLI: fetch a calendar feed, extract busy dates, write JSON.

pub mod cli;
pub mod error;
pub mod persist;
