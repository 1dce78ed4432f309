//! Attendance Calendar Engine
//!
//! This crate derives the attendance calendar of an employee self-service
//! app: which days were present, absent, in progress or holidays, given punch
//! records, the holiday list and the branch's weekly holiday. It also carries
//! the session, screen and HTTP layers around that derivation.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod screen;
pub mod session;
