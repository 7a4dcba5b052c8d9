//! Utility functions for code generation, URL encoding, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_codec`] - Query-string encoding of calculator state
//! - [`extract_origin`] - Public origin extraction from HTTP headers

pub mod code_generator;
pub mod extract_origin;
pub mod url_codec;
