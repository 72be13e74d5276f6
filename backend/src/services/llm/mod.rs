//! LLM Service Module
//!
//! Turns a person's name and optional self-description into candidate
//! Chinese names through a remote chat-completion provider.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────┐
//! │  NameGenerationService   │  ← Trait (handlers depend on this)
//! └────────────┬─────────────┘
//!              ▼
//! ┌──────────────────────────┐     ┌──────────────────────┐
//! │ NameGenerationServiceImpl│ ──▶ │ LLMClient (reqwest)  │
//! └────────────┬─────────────┘     └──────────────────────┘
//!              ▼
//!   scenarios::naming (prompt, extraction, placeholder)
//! ```

mod client;
mod models;
mod scenarios;
mod service;

pub use models::*;
pub use scenarios::naming::{
    build_naming_prompt, extract_json_array, parse_generated_names, placeholder_name,
};
pub use service::{NameGenerationService, NameGenerationServiceImpl};

#[allow(unused_imports)]
pub(crate) use client::LLMClient;
