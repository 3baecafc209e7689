//! risk_gauge: value resolution, band classification and dial scene generation
//! for semicircular risk/status gauges

pub mod animation;
pub mod bands;
pub mod config;
pub mod data_types;
pub mod gauge;
pub mod geometry;
pub mod layout;
pub mod rendering;
pub mod resolver;
pub mod scales;
pub mod svg;

pub use animation::{Animator, FrameRequest, InterpolationState};
pub use bands::{BandClassifier, BandStyle, Classification};
pub use config::{GaugeConfig, GaugePreset, LabelPlacement};
pub use data_types::{Binding, DataAccessor, GaugeLabel, Scene, StopSet};
pub use gauge::{Gauge, GaugeFrame};
pub use resolver::{NumericReading, ValueResolver};
pub use scales::{MappedValue, ScaleConfig, ScaleMapper};
