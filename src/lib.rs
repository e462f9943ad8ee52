//! Attendance time-calculation engine
//!
//! This crate turns raw arrival/departure text into worked minutes, mandatory
//! break deductions, afternoon and weekend/holiday buckets and monthly totals,
//! using the Czech public holiday calendar. A small HTTP API exposes the same
//! calculations to sheet and export front-ends.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
