//! Integration tests
//!
//! `scenarios` drives the whole client against a scripted transport;
//! `live_api` talks to a running backend and is ignored by default.

mod live_api;
mod scenarios;
mod support;
