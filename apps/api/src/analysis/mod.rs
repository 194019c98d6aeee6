//! The analysis pipeline: gap analysis feeds the timeline, resource, and
//! project selectors. Everything here except the LLM project path is pure.

pub mod gap;
pub mod handlers;
pub mod projects;
pub mod prompts;
pub mod resources;
pub mod timeline;
