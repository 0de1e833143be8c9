use gloo_timers::callback::Interval;
use web_sys::js_sys::Math;
use web_sys::Document;

use crate::config;
use crate::dom::registry::select_all_in;

pub const STATUS_LINES: [&str; 4] = [
    "Updated just now",
    "Updated 1m ago",
    "Updated 2m ago",
    "Updated 3m ago",
];

/// Chance a card keeps its text on a given tick.
const KEEP_PROBABILITY: f64 = 0.7;

/// `roll` and `pick` are uniform in `[0, 1)`.
pub fn pick_status_line(roll: f64, pick: f64) -> Option<&'static str> {
    if roll <= KEEP_PROBABILITY {
        return None;
    }
    let index = ((pick * STATUS_LINES.len() as f64) as usize).min(STATUS_LINES.len() - 1);
    Some(STATUS_LINES[index])
}

fn refresh(document: &Document) {
    for card in select_all_in(document, ".status-card") {
        let Ok(Some(badge)) = card.query_selector(".status-badge") else {
            continue;
        };
        // Coming-soon cards never claim a fresh update.
        if !badge.class_list().contains("operational") {
            continue;
        }
        let Ok(Some(updated)) = card.query_selector(".last-update") else {
            continue;
        };
        if let Some(line) = pick_status_line(Math::random(), Math::random()) {
            updated.set_text_content(Some(line));
        }
    }
}

/// Touches the "last updated" line of operational products every so often.
/// Runs on its own timer and never looks at the wizard.
pub fn install(document: &Document) -> Interval {
    let document = document.clone();
    Interval::new(config::STATUS_REFRESH_INTERVAL_MS, move || refresh(&document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_ticks_keep_the_text() {
        assert_eq!(pick_status_line(0.0, 0.5), None);
        assert_eq!(pick_status_line(0.7, 0.5), None);
    }

    #[test]
    fn pick_spans_every_line() {
        assert_eq!(pick_status_line(0.9, 0.0), Some("Updated just now"));
        assert_eq!(pick_status_line(0.9, 0.3), Some("Updated 1m ago"));
        assert_eq!(pick_status_line(0.9, 0.6), Some("Updated 2m ago"));
        assert_eq!(pick_status_line(0.9, 0.99), Some("Updated 3m ago"));
        assert_eq!(pick_status_line(0.9, 1.0), Some("Updated 3m ago"));
    }
}
