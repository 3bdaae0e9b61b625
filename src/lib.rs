pub mod categories;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod filtering;
pub mod io;
pub mod lang;
pub mod pipeline;
pub mod prompt;
