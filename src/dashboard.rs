//! Dashboard view-model shared by the TUI, GUI and CLI
//!
//! A [`Dashboard`] owns everything that changes over time: the clock, the
//! metrics simulator and the two tickers that drive them. Frontends call
//! [`Dashboard::advance`] from their event loop and render afterwards, so a
//! frame always sees a fully applied tick.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::clock::{self, Clock};
use crate::config::Config;
use crate::gauge::RingGauge;
use crate::layout::{self, MenuEntry, StatTile, GAUGE_SLOTS};
use crate::metrics::{MetricsSimulator, MetricsState, RandomSource, RngSource};
use crate::ticker::Ticker;

/// Which tickers fired during one [`Dashboard::advance`] call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub clock: bool,
    pub metrics: bool,
}

impl TickOutcome {
    /// Whether anything visible changed
    pub fn any(&self) -> bool {
        self.clock || self.metrics
    }
}

/// Serializable picture of the dashboard at one instant
#[derive(Clone, Debug, Serialize)]
pub struct DashboardSnapshot {
    pub title: &'static str,
    pub time: String,
    pub date: String,
    pub menu: Vec<MenuEntry>,
    pub tiles: Vec<StatTile>,
    pub metrics: MetricsState,
    pub gauges: Vec<RingGauge>,
    pub metric_ticks: u64,
}

pub struct Dashboard<S: RandomSource = RngSource> {
    clock: Clock,
    metrics: MetricsSimulator<S>,
    clock_ticker: Ticker,
    metrics_ticker: Ticker,
    gauge_diameter: f64,
    gauge_stroke: f64,
}

impl Dashboard<RngSource> {
    /// Dashboard seeded from `config.simulation.seed`, or from entropy
    pub fn from_config(config: &Config) -> Self {
        let source = RngSource::from_seed_option(config.simulation.seed);
        Self::new(config, source, Instant::now(), Local::now())
    }
}

impl<S: RandomSource> Dashboard<S> {
    /// Mount the view: read the clock and arm both tickers
    pub fn new(config: &Config, source: S, now: Instant, wall_now: DateTime<Local>) -> Self {
        let general = &config.general;
        log::info!(
            "dashboard mounted (clock every {} ms, metrics every {} ms)",
            general.clock_interval_ms,
            general.metrics_interval_ms
        );

        Self {
            clock: Clock::with_formats(
                wall_now,
                general.time_format.clone(),
                general.date_format.clone(),
            )
            .with_locale(clock::resolve_locale(general.locale.as_deref())),
            metrics: MetricsSimulator::new(source),
            clock_ticker: Ticker::start(
                "clock",
                Duration::from_millis(general.clock_interval_ms),
                now,
            ),
            metrics_ticker: Ticker::start(
                "metrics",
                Duration::from_millis(general.metrics_interval_ms),
                now,
            ),
            gauge_diameter: config.gauge.diameter,
            gauge_stroke: config.gauge.stroke_width,
        }
    }

    /// Apply every tick that is due at `now`
    pub fn advance(&mut self, now: Instant, wall_now: DateTime<Local>) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.clock_ticker.poll(now) {
            self.clock.tick(wall_now);
            outcome.clock = true;
        }
        if self.metrics_ticker.poll(now) {
            let state = self.metrics.tick();
            log::debug!(
                "metrics: cpu {:.1}% mem {:.1}% disk {:.1}% down {:.2} up {:.2}",
                state.cpu,
                state.mem,
                state.disk,
                state.download_rate,
                state.upload_rate
            );
            outcome.metrics = true;
        }

        outcome
    }

    /// Run `n` metrics ticks immediately, outside the ticker schedule
    ///
    /// Does nothing once the dashboard is torn down.
    pub fn run_metric_ticks(&mut self, n: u64) {
        if !self.is_live() {
            return;
        }
        for _ in 0..n {
            self.metrics.tick();
        }
    }

    /// Delay until the earliest pending tick; `None` after teardown
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        match (
            self.clock_ticker.time_until_next(now),
            self.metrics_ticker.time_until_next(now),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Stop both tickers. Later [`advance`](Self::advance) calls are no-ops.
    pub fn teardown(&mut self) {
        if self.is_live() {
            log::info!("dashboard torn down");
        }
        self.clock_ticker.stop();
        self.metrics_ticker.stop();
    }

    /// Whether any ticker is still armed
    pub fn is_live(&self) -> bool {
        self.clock_ticker.is_running() || self.metrics_ticker.is_running()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn metrics(&self) -> &MetricsState {
        self.metrics.state()
    }

    pub fn metric_ticks(&self) -> u64 {
        self.metrics.ticks()
    }

    /// CPU, memory and disk gauges for the current reading
    pub fn gauges(&self) -> Vec<RingGauge> {
        GAUGE_SLOTS
            .iter()
            .map(|slot| slot.gauge(self.metrics(), self.gauge_diameter, self.gauge_stroke))
            .collect()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            title: layout::BRAND_TITLE,
            time: self.clock.formatted_time(),
            date: self.clock.formatted_date(),
            menu: layout::MENU.to_vec(),
            tiles: layout::STAT_TILES.to_vec(),
            metrics: *self.metrics(),
            gauges: self.gauges(),
            metric_ticks: self.metric_ticks(),
        }
    }
}

impl<S: RandomSource> Drop for Dashboard<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wall(s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 12, 0, s).single().unwrap()
    }

    fn posix_config() -> Config {
        let mut config = Config::default();
        config.general.locale = Some("POSIX".to_string());
        config
    }

    fn neutral_dashboard(t0: Instant) -> Dashboard<fn() -> f64> {
        fn half() -> f64 {
            0.5
        }
        Dashboard::new(&posix_config(), half as fn() -> f64, t0, wall(0))
    }

    #[test]
    fn test_ticks_follow_intervals() {
        let t0 = Instant::now();
        let mut dash = Dashboard::new(&posix_config(), RngSource::seeded(1), t0, wall(0));

        let out = dash.advance(t0 + Duration::from_millis(1000), wall(1));
        assert_eq!(out, TickOutcome { clock: true, metrics: false });
        assert_eq!(dash.clock().formatted_time(), "12:00:01");

        let out = dash.advance(t0 + Duration::from_millis(1400), wall(1));
        assert_eq!(out, TickOutcome { clock: false, metrics: true });
        assert_eq!(dash.metric_ticks(), 1);

        assert_eq!(
            dash.time_until_next_tick(t0 + Duration::from_millis(1400)),
            Some(Duration::from_millis(600))
        );
    }

    #[test]
    fn test_neutral_tick_keeps_seed_state() {
        let t0 = Instant::now();
        let mut dash = neutral_dashboard(t0);
        let out = dash.advance(t0 + Duration::from_millis(1400), wall(1));
        assert!(out.metrics);
        assert_eq!(*dash.metrics(), MetricsState::SEED);
    }

    #[test]
    fn test_no_mutation_after_teardown() {
        let t0 = Instant::now();
        let mut dash = Dashboard::new(&posix_config(), RngSource::seeded(9), t0, wall(0));
        dash.advance(t0 + Duration::from_millis(1400), wall(1));
        let before = *dash.metrics();
        let time_before = dash.clock().formatted_time();

        dash.teardown();
        assert!(!dash.is_live());
        for hours in 1..24 {
            let out = dash.advance(t0 + Duration::from_secs(3600 * hours), wall(59));
            assert!(!out.any());
        }
        dash.run_metric_ticks(3);
        assert_eq!(*dash.metrics(), before);
        assert_eq!(dash.clock().formatted_time(), time_before);
        assert_eq!(dash.metric_ticks(), 1);
        assert_eq!(dash.time_until_next_tick(t0), None);
    }

    #[test]
    fn test_gauges_use_configured_size() {
        let mut config = posix_config();
        config.gauge.diameter = 100.0;
        config.gauge.stroke_width = 10.0;
        let dash = Dashboard::new(&config, RngSource::seeded(3), Instant::now(), wall(0));
        let gauges = dash.gauges();
        assert_eq!(gauges.len(), 3);
        assert_eq!(gauges[0].geometry.radius, 45.0);
        assert_eq!(gauges[0].geometry.value, 47.1);
        assert_eq!(gauges[2].label.as_deref(), Some("Disk Usage"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut dash = Dashboard::new(&posix_config(), RngSource::seeded(5), Instant::now(), wall(0));
        dash.run_metric_ticks(10);
        let snapshot = dash.snapshot();
        assert_eq!(snapshot.metric_ticks, 10);
        assert_eq!(snapshot.menu.len(), 5);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["title"], "Private YouTube Scheduler");
        assert_eq!(json["time"], "12:00:00");
        assert_eq!(json["menu"][1]["label"], "Jadwal");
        assert_eq!(json["gauges"][1]["accent"], "#f472b6");
        assert!(json["metrics"]["cpu"].as_f64().is_some());
    }

    #[test]
    fn test_clock_uses_configured_locale() {
        let mut config = posix_config();
        config.general.locale = Some("id_ID".to_string());
        let dash = Dashboard::new(&config, RngSource::seeded(4), Instant::now(), wall(0));
        assert_eq!(dash.snapshot().date, "Senin, 19 Oktober 2026");
    }
}
