//! Extraction of the generated URL from the signing tool output

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Prefix of the line carrying the presigned URL
pub const SHARE_MARKER: &str = "Share:";

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s"']+"#).expect("Invalid regex"));

/// Output did not contain a usable URL
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No non-empty `Share:` line
    #[error("could not find Share: line in mc output")]
    NoShareLine,

    /// No http(s) URL anywhere in the output
    #[error("could not find a URL in mc output")]
    NoUrlFound,
}

/// Returns the remainder of the first line starting with [`SHARE_MARKER`]
///
/// # Errors
///
/// Returns `ParseError::NoShareLine` if there is no such line, or the first
/// one is empty after the marker
pub fn extract_share_line(output: &str) -> Result<String, ParseError> {
    output
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(SHARE_MARKER))
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(ToString::to_string)
        .ok_or(ParseError::NoShareLine)
}

/// Returns the first http(s) URL anywhere in the output
///
/// # Errors
///
/// Returns `ParseError::NoUrlFound` if the output contains no URL
pub fn extract_url_pattern(output: &str) -> Result<String, ParseError> {
    URL_PATTERN
        .find(output)
        .map(|m| m.as_str().to_string())
        .ok_or(ParseError::NoUrlFound)
}

/// How the signing tool output is turned into a URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Only the `Share:` line
    ShareLine,
    /// Only the first URL-looking substring
    UrlPattern,
    /// `Share:` line, then the URL pattern when no line matches
    #[default]
    ShareLineWithFallback,
}

impl ParseStrategy {
    /// Extracts the URL
    ///
    /// With the fallback strategy, a failure reports the `Share:` line error.
    ///
    /// # Errors
    ///
    /// Returns the `ParseError` of the primary extractor
    pub fn extract(self, output: &str) -> Result<String, ParseError> {
        match self {
            Self::ShareLine => extract_share_line(output),
            Self::UrlPattern => extract_url_pattern(output),
            Self::ShareLineWithFallback => extract_share_line(output).or_else(|err| {
                extract_url_pattern(output)
                    .inspect(|_| tracing::debug!("No Share: line, fell back to URL pattern"))
                    .map_err(|_| err)
            }),
        }
    }
}

/// Unrecognised `MC_OUTPUT_PARSER` value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown output parser {0:?}, expected share-line, url-pattern or share-line-with-fallback")]
pub struct UnknownParseStrategy(pub String);

impl FromStr for ParseStrategy {
    type Err = UnknownParseStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "share-line" => Ok(Self::ShareLine),
            "url-pattern" => Ok(Self::UrlPattern),
            "share-line-with-fallback" => Ok(Self::ShareLineWithFallback),
            _ => Err(UnknownParseStrategy(s.to_string())),
        }
    }
}
