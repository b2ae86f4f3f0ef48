//! Page-range parsing
//!
//! Turns user-typed range strings like `"1-3, 5-10, 11"` into 0-based page
//! indices. Tokens are comma-separated; each token is either a single page
//! number or a closed interval `start-end`, both 1-based inclusive. Token
//! order and the low-to-high order within each interval are preserved, so
//! the result is exactly the sequence of pages the user asked for.
//!
//! Indices are not checked against any document's page count here; an
//! out-of-range index surfaces later as a codec error.

use crate::error::{Error, Result};

/// Parse a page-range string into a flat list of 0-based page indices.
///
/// ```
/// # use pdfman::pages::parse_page_ranges;
/// assert_eq!(parse_page_ranges("1-3,5").unwrap(), vec![0, 1, 2, 4]);
/// ```
pub fn parse_page_ranges(range: &str) -> Result<Vec<u32>> {
    if range.trim().is_empty() {
        return Err(Error::InvalidPageRange {
            range: range.to_string(),
        });
    }

    let mut pages = Vec::new();

    for part in range.split(',') {
        pages.extend(parse_token(part, range)?);
    }

    Ok(pages)
}

/// Parse a page-range string into one index set per comma-separated token.
///
/// `"1-3,5"` becomes `[[0, 1, 2], [4]]`. Split uses this to write one
/// output document per token.
pub fn parse_range_groups(range: &str) -> Result<Vec<Vec<u32>>> {
    if range.trim().is_empty() {
        return Err(Error::InvalidPageRange {
            range: range.to_string(),
        });
    }

    range
        .split(',')
        .map(|part| parse_token(part, range))
        .collect()
}

/// Parse one token (`"N"` or `"A-B"`, 1-based) into 0-based indices.
fn parse_token(part: &str, whole: &str) -> Result<Vec<u32>> {
    let part = part.trim();
    if part.is_empty() {
        return Err(Error::InvalidPageRange {
            range: whole.to_string(),
        });
    }

    if let Some((start, end)) = part.split_once('-') {
        let start = parse_page_number(start, whole)?;
        let end = parse_page_number(end, whole)?;

        if start > end {
            return Err(Error::InvalidPageRange {
                range: whole.to_string(),
            });
        }

        Ok((start - 1..end).collect())
    } else {
        let page = parse_page_number(part, whole)?;
        Ok(vec![page - 1])
    }
}

/// Parse a single 1-based page number. Zero is rejected; 0-based conversion
/// happens in the caller.
fn parse_page_number(s: &str, whole: &str) -> Result<u32> {
    let page: u32 = s.trim().parse().map_err(|_| Error::InvalidPageRange {
        range: whole.to_string(),
    })?;

    if page == 0 {
        return Err(Error::InvalidPageRange {
            range: whole.to_string(),
        });
    }

    Ok(page)
}
