//! Backend API
//!
//! Thin REST client over the external backend collaborator.

pub mod client;

pub use client::*;
