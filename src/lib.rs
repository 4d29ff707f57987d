//! # cua-tools
//!
//! Mouse click tools for a computer-use agent.
//!
//! This library provides:
//! - A `click` tool and a `coordinates_click` tool with screen bounds validation
//! - A desktop automation layer backed by `enigo`, with a corner fail-safe
//! - A tool registry exposing function-calling schemas for a language model
//! - A JSON-lines bridge so an external agent loop can call the tools
//!
//! ## Contract
//!
//! Every tool call returns a human-readable string. Validation and automation
//! failures come back as strings starting with `Error` and are never raised to
//! the caller, so the agent loop can always continue.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cua_tools::{config::Config, desktop::EnigoDesktop, tools::ToolRegistry};
//!
//! let desktop = Arc::new(EnigoDesktop::new(Config::from_env()?));
//! let tools = ToolRegistry::new(desktop);
//! let result = tools.call("click", serde_json::json!({"x": 500, "y": 300})).await;
//! ```

pub mod bridge;
pub mod config;
pub mod desktop;
pub mod tools;

pub use config::Config;
