//! Workout progress analytics and exercise catalog resolution.
//!
//! The core lives in [`analytics`] and [`catalog`]: pure functions over
//! session snapshots and name lists. [`service`] and [`controller`] feed them
//! from the SQLite stores and the remote catalog, and [`routes`] exposes the
//! result as a small JSON API.

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod service;
pub mod version;
