use std::sync::LazyLock;

use regex::Regex;

use crate::models::MassOccurrence;

static HOUR_H_MINUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}h[0-9]{2}$").expect("valid time label regex"));

/// Rewrites the site's `"HHhMM"` labels to `"HH:MM"`. Any other label is
/// returned unchanged, so applying this twice is a no-op.
pub fn normalize_time_label(label: &str) -> String {
    if HOUR_H_MINUTE.is_match(label) {
        label.replacen('h', ":", 1)
    } else {
        label.to_string()
    }
}

pub fn normalize_occurrence(mut item: MassOccurrence) -> MassOccurrence {
    item.start_time_label = normalize_time_label(&item.start_time_label);
    item
}
