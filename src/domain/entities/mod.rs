//! Core domain entities for the short-code registry.
//!
//! # Entity Types
//!
//! - [`ShortCode`] - Public identifier of a short link
//! - [`ParameterSet`] / [`ScenarioList`] - Calculator state carried by a link
//! - [`StoredEntry`] - Value persisted behind a code
//! - [`OriginInfo`] - Public scheme and host a request arrived on

pub mod origin;
pub mod parameter_set;
pub mod short_code;
pub mod stored_entry;

pub use origin::OriginInfo;
pub use parameter_set::{PARAMETER_KEYS, ParameterSet, ScenarioList};
pub use short_code::ShortCode;
pub use stored_entry::{StoredEntry, StoredValue};
