//! Sustainability figures and their count-up animation

use serde::Serialize;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// `1 - (1 - p)^4`, with `p` clamped to `[0, 1]`
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// A number that counts up from zero to `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    pub target: u64,
    pub duration: Duration,
    /// Nothing moves before this much time has passed
    pub start_delay: Duration,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration: Duration::from_millis(2000),
            start_delay: Duration::from_millis(200),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Measured from when the view appeared, not from the end of the delay
    fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value `elapsed` after the view appeared
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if elapsed < self.start_delay {
            return 0;
        }
        (self.target as f64 * ease_out_quart(self.progress(elapsed))).floor() as u64
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.start_delay && self.progress(elapsed) >= 1.0
    }
}

/// Run a count-up, calling `on_frame` with each displayed value.
///
/// The task ends on its own once the target is shown and yields the final
/// value. Abort the handle when the owning view goes away.
pub fn animate<F>(count_up: CountUp, frame: Duration, mut on_frame: F) -> JoinHandle<u64>
where
    F: FnMut(u64) + Send + 'static,
{
    let frame = frame.max(Duration::from_millis(1));
    tokio::spawn(async move {
        let started = Instant::now();
        tokio::time::sleep(count_up.start_delay).await;
        let mut ticker = tokio::time::interval(frame);
        loop {
            ticker.tick().await;
            let elapsed = started.elapsed();
            let value = count_up.value_at(elapsed);
            on_frame(value);
            if count_up.is_finished(elapsed) {
                return value;
            }
        }
    })
}

/// `12500` → `"12,500"`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Tab of the impact page a figure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactSection {
    Impact,
    Community,
    Environment,
}

impl ImpactSection {
    pub const ALL: [ImpactSection; 3] = [
        ImpactSection::Impact,
        ImpactSection::Community,
        ImpactSection::Environment,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ImpactSection::Impact => "Impact",
            ImpactSection::Community => "Community",
            ImpactSection::Environment => "Environment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactStat {
    pub section: ImpactSection,
    pub label: &'static str,
    pub value: u64,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl ImpactStat {
    const fn new(section: ImpactSection, label: &'static str, value: u64) -> Self {
        Self {
            section,
            label,
            value,
            prefix: "",
            suffix: "",
        }
    }

    const fn prefixed(self, prefix: &'static str) -> Self {
        Self { prefix, ..self }
    }

    const fn suffixed(self, suffix: &'static str) -> Self {
        Self { suffix, ..self }
    }

    /// Render `value` (not necessarily the target) with prefix and suffix
    pub fn render(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, format_thousands(value), self.suffix)
    }
}

use ImpactSection::{Community, Environment, Impact};

pub static IMPACT_STATS: &[ImpactStat] = &[
    ImpactStat::new(Impact, "Cheaper than solo rides", 40).suffixed("%"),
    ImpactStat::new(Impact, "Saved per family per month", 2340).prefixed("৳"),
    ImpactStat::new(Impact, "Emission rides", 0),
    ImpactStat::new(Impact, "CO₂ prevented this year", 12500).suffixed(" kg"),
    ImpactStat::new(Impact, "Families served", 1250),
    ImpactStat::new(Community, "Women drivers earn per week", 3200).prefixed("৳"),
    ImpactStat::new(Community, "Extra income per family per month", 1920).prefixed("৳"),
    ImpactStat::new(Community, "Faster emergency response times", 85).suffixed("%"),
    ImpactStat::new(Community, "Increase in farmer market reach", 60).suffixed("%"),
    ImpactStat::new(Community, "Villages connected daily", 500).suffixed("+"),
    ImpactStat::new(Environment, "kg CO₂ saved", 12500),
    ImpactStat::new(Environment, "Diesel saved", 8500).suffixed("L"),
    ImpactStat::new(Environment, "Solar kWh generated", 45000),
    ImpactStat::new(Environment, "Trees planted equivalent", 625),
];

pub fn stats_in(section: ImpactSection) -> impl Iterator<Item = &'static ImpactStat> {
    IMPACT_STATS.iter().filter(move |s| s.section == section)
}
