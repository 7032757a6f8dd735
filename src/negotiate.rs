//! Request culture negotiation.
//!
//! Provider order follows the usual request-localization chain: explicit
//! query-string values win, then `Accept-Language`, then the configured
//! default.

/// The two cultures resolved for a request: one governs date/number/currency
/// formatting, the other governs string lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCultures {
    pub culture: String,
    pub ui_culture: String,
}

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
struct LanguageRange {
    tag: String,
    quality: f32,
}

/// Resolves the request cultures from the query string and `Accept-Language`.
///
/// When only one of the two query values is present it stands in for both,
/// matching the query-string provider of the original pipeline.
#[must_use]
pub fn negotiate(
    supported: &[String],
    default_culture: &str,
    accept_language: Option<&str>,
    query_culture: Option<&str>,
    query_ui_culture: Option<&str>,
) -> RequestCultures {
    let from_query = |requested: Option<&str>| {
        requested.and_then(|tag| match_supported(supported, tag))
    };

    let negotiated = accept_language
        .and_then(|header| from_accept_language(supported, header))
        .unwrap_or_else(|| default_culture.to_string());

    let culture = from_query(query_culture.or(query_ui_culture));
    let ui_culture = from_query(query_ui_culture.or(query_culture));

    RequestCultures {
        culture: culture.unwrap_or_else(|| negotiated.clone()),
        ui_culture: ui_culture.unwrap_or(negotiated),
    }
}

/// Picks the best supported culture from an `Accept-Language` header.
fn from_accept_language(supported: &[String], header: &str) -> Option<String> {
    let mut ranges = parse_accept_language(header);
    ranges.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(std::cmp::Ordering::Equal));

    ranges.iter().find_map(|range| match_supported(supported, &range.tag))
}

fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
    header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() {
                return None;
            }

            let quality = pieces
                .find_map(|piece| piece.trim().strip_prefix("q=").map(str::trim))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            Some(LanguageRange { tag: tag.to_string(), quality })
        })
        .collect()
}

/// Matches a requested tag against the supported list.
///
/// Exact case-insensitive match first, then a primary-subtag match so that
/// `sv` resolves to `sv-SE`.
fn match_supported(supported: &[String], requested: &str) -> Option<String> {
    if let Some(exact) = supported.iter().find(|tag| tag.eq_ignore_ascii_case(requested)) {
        return Some(exact.clone());
    }

    let primary = requested.split('-').next().unwrap_or(requested);
    supported
        .iter()
        .find(|tag| {
            tag.split('-').next().is_some_and(|p| p.eq_ignore_ascii_case(primary))
        })
        .cloned()
}
