//! LLM Scenarios
//!
//! Each scenario owns its prompt and the interpretation of the reply.

pub mod naming;
