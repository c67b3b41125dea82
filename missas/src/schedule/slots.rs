use crate::error::{MissasError, Result};
use crate::models::TimePoint;

/// Time points `start, start+step, …` up to `min(start + span, 23:59)`,
/// inclusive and strictly ascending.
pub fn generate_slots(
    start: TimePoint,
    span_minutes: u32,
    step_minutes: u32,
) -> Result<Vec<TimePoint>> {
    if step_minutes == 0 {
        return Err(MissasError::Validation(
            "Slot step must be greater than zero".to_string(),
        ));
    }

    let end = start
        .minutes()
        .saturating_add(span_minutes)
        .min(TimePoint::LAST.minutes());

    (start.minutes()..=end)
        .step_by(step_minutes as usize)
        .map(TimePoint::from_minutes)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(slots: &[TimePoint]) -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    }

    fn at(label: &str) -> TimePoint {
        label.parse().unwrap()
    }

    #[test]
    fn one_hour_every_quarter() {
        let slots = generate_slots(at("10:00"), 60, 15).unwrap();
        assert_eq!(
            labels(&slots),
            vec!["10:00", "10:15", "10:30", "10:45", "11:00"]
        );
    }

    #[test]
    fn clamps_before_midnight() {
        let slots = generate_slots(at("23:50"), 60, 15).unwrap();
        assert_eq!(labels(&slots), vec!["23:50"]);
    }

    #[test]
    fn partial_window_near_midnight() {
        let slots = generate_slots(at("23:20"), 60, 15).unwrap();
        assert_eq!(labels(&slots), vec!["23:20", "23:35", "23:50"]);
    }

    #[test]
    fn last_minute_is_a_singleton() {
        let slots = generate_slots(TimePoint::LAST, 60, 15).unwrap();
        assert_eq!(slots, vec![TimePoint::LAST]);
    }

    #[test]
    fn zero_span_yields_start_only() {
        let slots = generate_slots(at("07:00"), 0, 15).unwrap();
        assert_eq!(labels(&slots), vec!["07:00"]);
    }

    #[test]
    fn step_not_dividing_span() {
        let slots = generate_slots(at("07:00"), 60, 25).unwrap();
        assert_eq!(labels(&slots), vec!["07:00", "07:25", "07:50"]);
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(generate_slots(at("07:00"), 60, 0).is_err());
    }

    #[test]
    fn huge_span_does_not_overflow() {
        let slots = generate_slots(at("23:00"), u32::MAX, 30).unwrap();
        assert_eq!(labels(&slots), vec!["23:00", "23:30"]);
    }
}
