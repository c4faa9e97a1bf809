use once_cell::sync::Lazy;
use regex::Regex;

/// A dynamic segment: `:name` optionally followed by `(constraint)`
static PARAM_SEGMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^:([A-Za-z_][A-Za-z0-9_]*)(?:\((.+)\))?$")
        .expect("param segment regex should be valid")
});

/// Convert a registered route pattern to a regex and extract parameter names
///
/// Transforms patterns like `/posts/:post_id(\d+)/comments` into
/// `^/posts/(\d+)/comments$` and extracts `["post_id"]`. Parameters without a
/// constraint match a single path segment. Static segments are escaped.
///
/// # Errors
///
/// Returns the regex compilation error when a constraint is not a valid
/// regular expression.
pub fn pattern_to_regex(pattern: &str) -> Result<(Regex, Vec<String>), regex::Error> {
    if pattern == "/" {
        return Ok((Regex::new(r"^/$")?, Vec::new()));
    }

    let mut re = String::with_capacity(pattern.len() + 8);
    re.push('^');
    let mut param_names = Vec::with_capacity(pattern.matches(':').count());

    for segment in pattern.split('/') {
        if let Some(caps) = PARAM_SEGMENT_REGEX.captures(segment) {
            let constraint = caps.get(2).map_or("[^/]+", |m| m.as_str());
            re.push_str("/(");
            re.push_str(constraint);
            re.push(')');
            param_names.push(caps[1].to_string());
        } else if !segment.is_empty() {
            re.push('/');
            re.push_str(&regex::escape(segment));
        }
    }

    re.push('$');
    Ok((Regex::new(&re)?, param_names))
}

/// Render a registered route pattern in OpenAPI `{param}` style
///
/// `/posts/:id(\d+)/edit` becomes `/posts/{id}/edit`.
#[must_use]
pub fn openapi_path(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|segment| match PARAM_SEGMENT_REGEX.captures(segment) {
            Some(caps) => format!("{{{}}}", &caps[1]),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
