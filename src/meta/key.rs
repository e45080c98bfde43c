/// Folds a colon-delimited meta key into a camelCase identifier.
///
/// `og:title` becomes `ogTitle`, `og:image:width` becomes `ogImageWidth`.
/// The first segment is kept verbatim and empty segments vanish.
pub(crate) fn normalize(key: &str) -> String {
    let mut segments = key.split(':');
    let mut normalized = String::with_capacity(key.len());

    if let Some(first) = segments.next() {
        normalized.push_str(first);
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            normalized.extend(head.to_uppercase());
            normalized.push_str(chars.as_str());
        }
    }

    normalized
}
