//! Extraction of mass rows from the diocese search results page.
//!
//! The page renders one `table.resultados` whose body rows carry, in
//! order: the church (a link, followed by a `span.obs` holding the street
//! address and extra notes after a `<br>`), the neighborhood, the city and
//! the start time.

use scraper::{ElementRef, Html, Selector};
use url::form_urlencoded;

use crate::error::{MissasError, Result};
use crate::models::MassOccurrence;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

struct Selectors {
    row: Selector,
    cell: Selector,
    link: Selector,
    obs: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: parse_selector("table.resultados tbody tr")?,
            cell: parse_selector("td")?,
            link: parse_selector("a")?,
            obs: parse_selector("span.obs")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MissasError::Parse(format!("Invalid selector '{css}': {e}")))
}

/// Parses every results row with at least four cells. A page without the
/// results table yields no rows.
pub fn parse_results_table(html: &str) -> Result<Vec<MassOccurrence>> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);

    let items = document
        .select(&selectors.row)
        .filter_map(|row| {
            let cells: Vec<ElementRef> = row.select(&selectors.cell).collect();
            if cells.len() < 4 {
                return None;
            }

            let name = cells[0]
                .select(&selectors.link)
                .next()
                .map(|a| collapse_whitespace(&element_text(a)))
                .unwrap_or_default();
            let address = cells[0]
                .select(&selectors.obs)
                .next()
                .map(address_from_obs)
                .filter(|address| !address.is_empty());
            let maps_url = address.as_deref().map(maps_search_url);

            Some(MassOccurrence {
                name,
                neighborhood: collapse_whitespace(&element_text(cells[1])),
                city: collapse_whitespace(&element_text(cells[2])),
                start_time_label: element_text(cells[3]).trim().to_string(),
                address,
                maps_url,
            })
        })
        .collect();

    Ok(items)
}

/// Google Maps search link for a street address.
pub fn maps_search_url(address: &str) -> String {
    format!("{MAPS_SEARCH_URL}?api=1&query={}", encode_uri_component(address))
}

/// Percent-encodes like a browser's `encodeURIComponent`: spaces become
/// `%20` and `!~'()` stay literal.
fn encode_uri_component(value: &str) -> String {
    let form: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
    // A literal '%' is serialized as %25, so these sequences only come
    // from the characters they stand for.
    [("+", "%20"), ("%21", "!"), ("%7E", "~"), ("%27", "'"), ("%28", "("), ("%29", ")")]
        .iter()
        .fold(form, |acc, (from, to)| acc.replace(from, to))
}

/// The address is everything in the notes span before its first line break.
fn address_from_obs(obs: ElementRef) -> String {
    let inner = obs.inner_html();
    let fragment = inner.split("<br").next().unwrap_or_default();
    let text: String = Html::parse_fragment(fragment).root_element().text().collect();
    collapse_whitespace(&text)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
