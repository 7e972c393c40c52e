//! Callscope - Conversation analysis for customer-service calls
//!
//! Turns a two-party transcript into a structured assessment: sentiment
//! trajectory, agent tone flags, policy violations, sensitive-data
//! exposure and an overall risk verdict.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
