mod aggregator;
mod lookup;
mod normalize;
mod slots;

pub use aggregator::{
    WindowAggregator, FALLBACK_CEILING_MINUTES, FALLBACK_EXTRA_PROBES, SLOT_STEP_MINUTES,
    WINDOW_SPAN_MINUTES,
};
pub use lookup::MassLookup;
pub use normalize::{normalize_occurrence, normalize_time_label};
pub use slots::generate_slots;
