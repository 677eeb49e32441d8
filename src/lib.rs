//! A GraphQL API over a fixed catalog of books and authors.
//!
//! The catalog lives in [`catalog`], the schema and its resolvers in [`schema`], and the HTTP
//! entry point in [`service`]: `POST /api/BookListGQL` executes queries, `GET` on the same path
//! serves an explorer.

pub mod catalog;
pub use catalog::{Author, Book, Catalog, SEED};

pub mod schema;
pub use schema::{BookListSchema, build_schema};

pub mod config;
pub use config::Config;

pub mod errors;

pub mod service;
pub use service::{ENDPOINT, router, run};

#[cfg(test)]
mod api_testing;
