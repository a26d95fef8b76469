//! Figures for the "Our Impact in Numbers" section.

use std::time::Duration;

/// Length of the count-up animation.
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
}

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Expert Tutors",
        value: 250,
    },
    Stat {
        label: "5★ Reviews",
        value: 4280,
    },
    Stat {
        label: "Languages",
        value: 15,
    },
    Stat {
        label: "Happy Students",
        value: 3200,
    },
];

/// Value shown `elapsed` into a count-up towards `target`.
///
/// Linear, rounded down, and pinned to `target` once `duration` has passed.
pub fn animated_value(target: u32, elapsed: Duration, duration: Duration) -> u32 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let shown = u128::from(target) * elapsed.as_millis() / duration.as_millis().max(1);
    u32::try_from(shown).unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(animated_value(250, Duration::ZERO, COUNT_UP_DURATION), 0);
    }

    #[test]
    fn test_halfway_is_floored() {
        assert_eq!(
            animated_value(15, Duration::from_millis(1000), COUNT_UP_DURATION),
            7
        );
    }

    #[test]
    fn test_clamps_at_target() {
        assert_eq!(
            animated_value(4280, Duration::from_secs(10), COUNT_UP_DURATION),
            4280
        );
        assert_eq!(animated_value(10, Duration::from_millis(1), Duration::ZERO), 10);
    }

    #[test]
    fn test_never_decreases() {
        let mut last = 0;
        for ms in (0..=2000).step_by(50) {
            let v = animated_value(3200, Duration::from_millis(ms), COUNT_UP_DURATION);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(last, 3200);
    }
}
