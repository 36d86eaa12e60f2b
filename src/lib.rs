pub mod error;
pub mod validation;
pub mod config;
pub mod model;
pub mod db;
pub mod ops;
pub mod queries;
pub mod cli;
