//! "Our Impact in Numbers" counters.

use std::time::Duration;

use dioxus::prelude::*;
use domain::stats::{animated_value, COUNT_UP_DURATION, STATS};

use crate::timer::sleep;

const FRAME: Duration = Duration::from_millis(40);

/// Counts every figure up from zero once, starting when the section mounts.
#[component]
pub fn StatsSection() -> Element {
    let mut elapsed = use_signal(|| Duration::ZERO);

    use_future(move || async move {
        while *elapsed.peek() < COUNT_UP_DURATION {
            sleep(FRAME).await;
            let next = (*elapsed.peek() + FRAME).min(COUNT_UP_DURATION);
            elapsed.set(next);
        }
    });

    rsx! {
        section { class: "stats",
            h2 { class: "section-title", "Our Impact in Numbers" }
            div { class: "stats-grid",
                for stat in STATS.iter() {
                    div { key: "{stat.label}", class: "stat",
                        strong { "{animated_value(stat.value, elapsed(), COUNT_UP_DURATION)}+" }
                        span { class: "muted", "{stat.label}" }
                    }
                }
            }
        }
    }
}
