//! Administration console endpoints, all under the admin session

pub mod books;
pub mod borrows;
pub mod posts;
pub mod readers;
pub mod upload;
