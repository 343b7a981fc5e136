#![deny(missing_debug_implementations)]

//! Query parameter extraction for the URL Parameter Extractor page.
//!
//! [`extract`] turns a pasted URL into a [`ParamsMap`], and [`FormState`]
//! holds everything the page renders: the typed text, the parameters found on
//! the last submit, and an error line.
//!
//! ```rust
//! use param_extractor::{extract, FormState};
//!
//! let params = extract("https://example.com?name=Alice&city=Paris");
//! assert_eq!(params.get("name"), Some("Alice"));
//!
//! let mut form = FormState::new();
//! form.set_input("https://example.com?a=1&a=2");
//! form.submit();
//! assert_eq!(form.params().get("a"), Some("2"));
//! ```

mod config;
mod errors;
mod extract;
mod form;
mod params;
#[cfg(test)]
mod tests;

pub use config::{Config, Env, ENV_VAR, LOG_VAR};
pub use errors::{ConfigError, ExtractError};
pub use extract::{extract, try_extract};
pub use form::{FormState, INVALID_URL_MESSAGE};
pub use params::{ParamsMap, ParamsMapIter};
