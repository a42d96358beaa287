//! Typed call sites for the library backend
//!
//! Every function states the session scope it runs under; the reader side
//! lives at the top level and the administration console under [`admin`].

pub mod admin;
pub mod auth;
pub mod books;
pub mod borrow;
pub mod portal;
pub mod user;
