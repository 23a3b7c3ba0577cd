//! Organize Exam - exam organization service
//!
//! This crate manages organized exams: an exam definition with scheduled
//! sessions, the rooms inside each session and the candidates assigned to
//! each room. Every change is validated first and then applied to the stored
//! aggregate under an optimistic version check.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
