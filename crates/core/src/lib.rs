//! Core library for pd2st
//!
//! This crate implements the **Functional Core** of the pd2st application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The pd2st project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`pd2st_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pd2st`**: configuration, the HTTP client, the web server and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`convert`]: Prompt assembly, input validation, chat-completion wire types,
//!   fence stripping and the downloadable artifact
//! - [`page`]: HTML rendering of the converter page
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pd2st_core::convert::{build_user_payload, strip_fences, ConversionRequest};
//!
//! let request = ConversionRequest::new("df = pd.read_csv('data.csv')", None);
//! let payload = build_user_payload(&request);
//! assert!(payload.starts_with("Convert this pandas code:"));
//!
//! assert_eq!(strip_fences("```python\nimport streamlit as st\n```"), "import streamlit as st");
//! ```

pub mod convert;
pub mod page;
