//! # tubedash
//!
//! The home dashboard of a Private YouTube Scheduler, rendered for the terminal
//! (and optionally a desktop window): a live clock, a navigation menu, summary
//! tiles, three ring gauges and a network-speed panel fed by a simulated
//! metrics source.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tubedash::{Config, Dashboard};
//!
//! let config = Config::load().unwrap_or_default();
//! let mut dash = Dashboard::from_config(&config);
//! dash.run_metric_ticks(3);
//! for gauge in dash.gauges() {
//!     println!("{}: {}", gauge.label.as_deref().unwrap_or("?"), gauge.value_text());
//! }
//! dash.teardown();
//! ```
//!
//! ### Gauge geometry
//!
//! ```
//! use tubedash::RingGeometry;
//!
//! let ring = RingGeometry::new(50.0, 160.0, 14.0);
//! assert_eq!(ring.radius, 73.0);
//! assert_eq!(ring.dash + ring.gap, ring.circumference);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default) - Command-line interface and TUI
//! - `gui` - Desktop window with painted ring gauges
//! - `full` - All features enabled

pub mod clock; // Wall clock with configurable formats
pub mod config; // Configuration management with TOML persistence
pub mod dashboard; // View-model owning clock, simulator and tickers
pub mod error;
pub mod gauge; // Ring gauge geometry and SVG output
pub mod layout; // Static menu, tiles and panel descriptors
pub mod metrics; // Bounded random-walk metrics simulator
pub mod palette;
pub mod ticker; // Owned recurring deadlines

#[cfg(feature = "cli")]
pub mod tui; // Terminal UI

#[cfg(feature = "gui")]
pub mod gui; // Graphical UI

// Re-export main types
pub use clock::Clock;
pub use config::{Config, GaugeConfig, GeneralConfig, SimulationConfig};
pub use dashboard::{Dashboard, DashboardSnapshot, TickOutcome};
pub use error::{DashError, Result};
pub use gauge::{RingGauge, RingGeometry};
pub use layout::{Icon, MenuEntry, StatTile, MENU, STAT_TILES};
pub use metrics::{MetricsSimulator, MetricsState, RandomSource, RngSource};
pub use palette::Rgb;
pub use ticker::Ticker;
