//! `application/x-www-form-urlencoded` decoding for query strings and POST bodies.

/// Split `a=1&b=two+words` into decoded key/value pairs, in order.
///
/// A pair without `=` gets an empty value. Malformed `%` escapes are kept as-is
/// and invalid UTF-8 is replaced, so decoding never fails.
pub fn parse_pairs(input: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(input.as_bytes()).into_owned().collect()
}
