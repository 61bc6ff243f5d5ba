use std::time::Duration;

use rand::Rng;
use warp::Filter;

use crate::logging::format_duration;

/// Per-request delay drawn uniformly from `[min, max]`.
///
/// A zero `min` disables injection entirely; `max <= min` means a fixed
/// delay of `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySimulator {
    min: Duration,
    max: Duration,
}

impl LatencySimulator {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn is_enabled(&self) -> bool {
        !self.min.is_zero()
    }

    pub fn sample(&self) -> Duration {
        self.sample_with(rand::thread_rng().r#gen::<f64>())
    }

    /// `unit` is a uniform draw in `[0, 1)`.
    pub fn sample_with(&self, unit: f64) -> Duration {
        if !self.is_enabled() {
            Duration::ZERO
        } else if self.max > self.min {
            self.min + (self.max - self.min).mul_f64(unit)
        } else {
            self.min
        }
    }

    /// Suspends only the calling task.
    pub async fn delay(&self) {
        let latency = self.sample();
        if latency.is_zero() {
            return;
        }
        log::debug!("injecting {} latency", format_duration(latency));
        tokio::time::sleep(latency).await;
    }

    pub fn describe(&self) -> String {
        if !self.is_enabled() {
            "disabled".to_string()
        } else if self.max > self.min {
            format!(
                "min={} max={}",
                humantime::format_duration(self.min),
                humantime::format_duration(self.max)
            )
        } else {
            format!("fixed {}", humantime::format_duration(self.min))
        }
    }
}

/// Pipeline stage that delays every request before it reaches dispatch.
pub fn latency_stage(
    simulator: LatencySimulator,
) -> impl Filter<Extract = (), Error = warp::Rejection> + Clone {
    warp::any()
        .and_then(move || async move {
            simulator.delay().await;
            Ok::<_, warp::Rejection>(())
        })
        .untuple_one()
}
