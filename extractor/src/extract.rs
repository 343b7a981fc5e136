use crate::{errors::ExtractError, params::ParamsMap};
use url::Url;

/// Parses `input` as an absolute URL and collects its query parameters.
///
/// Names and values are decoded the way `application/x-www-form-urlencoded`
/// data is (`+` becomes a space, percent escapes are decoded). When a name
/// repeats, the later value replaces the earlier one.
pub fn try_extract(input: &str) -> Result<ParamsMap, ExtractError> {
    let url = Url::parse(input)?;
    let mut params = ParamsMap::new();
    params.extend(url.query_pairs());
    Ok(params)
}

/// Like [`try_extract`], but malformed input simply has no parameters.
pub fn extract(input: &str) -> ParamsMap {
    try_extract(input).unwrap_or_else(|err| {
        log::debug!("no parameters extracted from {input:?}: {err}");
        ParamsMap::new()
    })
}
