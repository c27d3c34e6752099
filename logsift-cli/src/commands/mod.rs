//! Command handlers -- the report flow lives here

pub mod report;
