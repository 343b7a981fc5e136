use crate::{errors::ExtractError, extract::extract, params::ParamsMap};

/// Shown when extraction fails unexpectedly.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// The state behind the extractor page: the text the user typed, the
/// parameters found on the last submit, and the error line.
///
/// The parameters and the error are never both non-empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    input: String,
    params: ParamsMap,
    error: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The URL text as currently typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Parameters found by the last submit.
    pub fn params(&self) -> &ParamsMap {
        &self.params
    }

    /// The error line. Empty when there is nothing to report.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Replaces the URL text. Results are left untouched until the next submit.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Extracts parameters from the current input.
    pub fn submit(&mut self) {
        self.submit_with(|input| Ok(extract(input)));
    }

    /// Runs `extractor` on the current input and stores its outcome.
    ///
    /// On success the parameters replace the previous ones and the error is
    /// cleared. On failure the parameters are cleared and the error line is
    /// set to [`INVALID_URL_MESSAGE`].
    pub fn submit_with<F>(&mut self, extractor: F)
    where
        F: FnOnce(&str) -> Result<ParamsMap, ExtractError>,
    {
        match extractor(&self.input) {
            Ok(params) => {
                log::debug!("extracted {} parameter(s)", params.len());
                self.params = params;
                self.error.clear();
            }
            Err(err) => {
                log::warn!("extraction failed for {:?}: {err}", self.input);
                self.params.clear();
                self.error = INVALID_URL_MESSAGE.to_string();
            }
        }
    }

    pub fn shows_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn shows_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// Something was typed, but there are no parameters and no error to show.
    pub fn shows_empty_notice(&self) -> bool {
        !self.input.is_empty()
            && self.params.is_empty()
            && self.error.is_empty()
    }
}
