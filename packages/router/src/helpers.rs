/// Split a navigation target into the normalized path used for matching and its query.
///
/// The fragment is dropped, the query is returned without its `?`, and an empty path becomes `/`.
pub(crate) fn split_path(target: &str) -> (&str, Option<&str>) {
    let without_fragment = target.split_once('#').map_or(target, |(before, _)| before);

    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, (!query.is_empty()).then_some(query)),
        None => (without_fragment, None),
    };

    let path = if path.is_empty() { "/" } else { path };
    (path, query)
}
