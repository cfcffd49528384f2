//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate collection changes and persistence into use-case APIs.
//! - Keep front ends decoupled from storage details.

pub mod library_service;
