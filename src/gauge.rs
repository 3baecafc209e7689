//! Host-facing gauge: owns configuration, surface size and needle animation,
//! and recomputes the scene on every data or size change.

use crate::animation::{Animator, FrameRequest};
use crate::config::GaugeConfig;
use crate::data_types::{Binding, GaugeLabel, Scene};
use crate::layout::{DialLayout, Viewport};
use crate::rendering::{render, GeometryConfig};
use crate::resolver::{NumericReading, ValueResolver};
use crate::scales::{MappedValue, ScaleMapper};
use tracing::debug;

/// Result of an update: the scene to draw now and, while the needle is
/// moving, the ticket for the next paint.
#[derive(Clone, Debug)]
pub struct GaugeFrame {
    pub scene: Scene,
    pub request: Option<FrameRequest>,
}

pub struct Gauge {
    config: GaugeConfig,
    viewport: Viewport,
    reading: NumericReading,
    mapped: MappedValue,
    animator: Option<Animator>,
    scene: Scene,
}

impl Gauge {
    pub fn new(config: GaugeConfig) -> Self {
        let viewport = Viewport::new(0.0, 0.0, config.min_size);
        let reading = NumericReading::missing();
        let mapped = ScaleMapper::map(&reading, &config.scale, &config.stops, config.snap_to_stops);
        let animator = config.animate.then(|| Animator::new(config.animation_ms));
        let scene = Self::draw(&config, viewport, &mapped);
        Self {
            config,
            viewport,
            reading,
            mapped,
            animator,
            scene,
        }
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Last resolved reading.
    pub fn reading(&self) -> NumericReading {
        self.reading
    }

    /// Target of the latest update, before interpolation.
    pub fn mapped(&self) -> MappedValue {
        self.mapped
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Value the needle currently shows (possibly mid-transition).
    pub fn current_value(&self) -> f64 {
        self.scene.value
    }

    /// Label text and color of the band currently shown.
    pub fn label(&self) -> &GaugeLabel {
        &self.scene.label
    }

    pub fn is_animating(&self) -> bool {
        self.animator.as_ref().is_some_and(Animator::is_animating)
    }

    /// Replaces the configuration and redraws the last reading with it.
    /// Animation continuity survives when the new configuration still animates.
    pub fn set_config(&mut self, config: GaugeConfig) -> Scene {
        self.viewport = Viewport::new(self.viewport.width, self.viewport.height, config.min_size);
        self.animator = match (self.animator.take(), config.animate) {
            (Some(mut animator), true) => {
                animator.set_duration_ms(config.animation_ms);
                Some(animator)
            }
            (None, true) => Some(Animator::new(config.animation_ms)),
            (_, false) => None,
        };
        self.config = config;
        let cfg = &self.config;
        self.mapped = ScaleMapper::map(&self.reading, &cfg.scale, &cfg.stops, cfg.snap_to_stops);
        self.redraw()
    }

    /// Resolves `binding` (or `fallback`) and redraws.
    ///
    /// With animation enabled the needle starts from whatever is on screen and the
    /// returned request must be passed to [`Gauge::frame`] on the next paint.
    pub fn update(&mut self, binding: &Binding, fallback: &Binding, now_ms: f64) -> GaugeFrame {
        let cfg = &self.config;
        self.reading = ValueResolver::resolve(binding, fallback);
        self.mapped = ScaleMapper::map(&self.reading, &cfg.scale, &cfg.stops, cfg.snap_to_stops);
        debug!(
            raw = self.mapped.raw,
            value = self.mapped.snapped,
            band = self.mapped.band_index,
            found = self.reading.found,
            "gauge updated"
        );

        let Some(animator) = self.animator.as_mut() else {
            self.scene = Self::draw(&self.config, self.viewport, &self.mapped);
            return GaugeFrame {
                scene: self.scene.clone(),
                request: None,
            };
        };

        let request = animator.animate(self.mapped.snapped, now_ms);
        let scene = match self.frame(request, now_ms) {
            Some(scene) => scene,
            None => {
                // First reading: nothing on screen to move from.
                self.scene = Self::draw(&self.config, self.viewport, &self.mapped);
                self.scene.clone()
            }
        };
        GaugeFrame {
            scene,
            request: self.is_animating().then_some(request),
        }
    }

    /// Draws the frame for `request`. `None` means the request is stale or the
    /// transition has finished: nothing is drawn and no further frame is needed.
    pub fn frame(&mut self, request: FrameRequest, now_ms: f64) -> Option<Scene> {
        let frame = self.animator.as_mut()?.frame(request, now_ms)?;
        let displayed = self
            .mapped
            .displayed_at(frame.value, &self.config.scale, &self.config.stops);
        self.scene = Self::draw(&self.config, self.viewport, &displayed);
        Some(self.scene.clone())
    }

    /// Applies a new surface size and redraws at the value currently shown.
    pub fn resize(&mut self, width: f64, height: f64) -> Scene {
        self.viewport = Viewport::new(width, height, self.config.min_size);
        self.redraw()
    }

    fn redraw(&mut self) -> Scene {
        let shown = self
            .animator
            .as_ref()
            .and_then(Animator::displayed)
            .map(|v| self.mapped.displayed_at(v, &self.config.scale, &self.config.stops))
            .unwrap_or(self.mapped);
        self.scene = Self::draw(&self.config, self.viewport, &shown);
        self.scene.clone()
    }

    fn draw(config: &GaugeConfig, viewport: Viewport, mapped: &MappedValue) -> Scene {
        let geometry = GeometryConfig::new(DialLayout::compute(viewport, config), config);
        render(mapped, &config.stops, &config.style, &geometry)
    }
}
