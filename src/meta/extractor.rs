use super::{normalize, PageData};
use scraper::{ElementRef, Html};

const OPEN_GRAPH_PREFIX: &str = "og:";
const DESCRIPTION_KEY: &str = "description";

/// Collects the description and Open Graph tags of a parsed document.
///
/// Every `<meta>` element in the tree is visited. Its key is taken from
/// `property` or, when that is missing, from `name`. A tag carrying both
/// always resolves to `property`, regardless of the attribute order in the
/// source markup, which the parsed element does not keep. Later tags
/// overwrite earlier ones with the same key.
pub(crate) fn extract(document: &Html) -> PageData {
    let mut data = PageData::default();

    let meta_tags = document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "meta");

    for element in meta_tags {
        let element = element.value();
        let Some(key) = element.attr("property").or_else(|| element.attr("name")) else {
            continue;
        };
        let value = element.attr("content").unwrap_or_default();

        if key.starts_with(OPEN_GRAPH_PREFIX) {
            data.og_tags.insert(normalize(key), value.to_string());
        } else if key == DESCRIPTION_KEY {
            data.description = value.to_string();
        }
    }

    data
}
