pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEP_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suffix {
    Plus,
    Percent,
}

impl Suffix {
    fn as_str(self) -> &'static str {
        match self {
            Suffix::Plus => "+",
            Suffix::Percent => "%",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub suffix: Suffix,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Apps Delivered", target: 50, suffix: Suffix::Plus },
    Stat { label: "Happy Clients", target: 30, suffix: Suffix::Plus },
    Stat { label: "Years Experience", target: 5, suffix: Suffix::Plus },
    Stat { label: "Client Satisfaction", target: 98, suffix: Suffix::Percent },
];

/// Linear count-up from 0 to `target` in fixed increments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    steps: u32,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: u32, step_ms: u32) -> Self {
        Self {
            target,
            steps: (duration_ms / step_ms.max(1)).max(1),
        }
    }

    #[cfg(test)]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Value after `step` ticks, clamped at the target.
    pub fn value_at(&self, step: u32) -> u32 {
        let increment = f64::from(self.target) / f64::from(self.steps);
        let value = (increment * f64::from(step)).floor();
        (value as u32).min(self.target)
    }

    pub fn is_done(&self, step: u32) -> bool {
        step >= self.steps
    }
}

pub fn format_counter(value: u32, suffix: Suffix) -> String {
    format!("{}{}", value, suffix.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_to_the_target_and_stops() {
        let animation = CounterAnimation::new(98, COUNTER_DURATION_MS, COUNTER_STEP_MS);
        assert_eq!(animation.steps(), 125);
        assert_eq!(animation.value_at(0), 0);

        let mut previous = 0;
        for step in 0..=animation.steps() + 10 {
            let value = animation.value_at(step);
            assert!(value >= previous);
            assert!(value <= 98);
            previous = value;
        }
        assert_eq!(animation.value_at(animation.steps()), 98);
        assert!(animation.is_done(animation.steps()));
    }

    #[test]
    fn tiny_durations_still_finish() {
        let animation = CounterAnimation::new(5, 10, 16);
        assert_eq!(animation.steps(), 1);
        assert_eq!(animation.value_at(1), 5);
    }

    #[test]
    fn suffixes() {
        assert_eq!(format_counter(50, Suffix::Plus), "50+");
        assert_eq!(format_counter(98, Suffix::Percent), "98%");
    }
}
