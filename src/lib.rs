pub mod calendar;
pub mod config;
pub mod logging;
pub mod tables;
pub mod web;
