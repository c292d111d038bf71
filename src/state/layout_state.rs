//! LayoutState - Responsive Orientation
//!
//! Tracks the rendered card width and decides whether the configured
//! orientation is overridden to vertical. Every width sample is evaluated on
//! its own: no hysteresis, no debounce.

use crate::domain::{Orientation, WidgetConfig};

/// Responsive layout mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Configured orientation applies
    #[default]
    Natural,
    /// Card is narrower than the breakpoint
    ForcedVertical,
}

/// Mode for a card `width` pixels wide under `config`
pub fn mode_for(width: f32, config: &WidgetConfig) -> LayoutMode {
    match config.active_breakpoint() {
        Some(breakpoint) if width < breakpoint as f32 => LayoutMode::ForcedVertical,
        _ => LayoutMode::Natural,
    }
}

/// Responsive layout monitor state
#[derive(Clone, Debug, Default)]
pub struct LayoutState {
    mode: LayoutMode,
    last_width: Option<f32>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a width sample and return the resulting mode
    pub fn observe(&mut self, width: f32, config: &WidgetConfig) -> LayoutMode {
        self.last_width = Some(width);
        self.set_mode(mode_for(width, config))
    }

    /// Re-evaluate the last sample against a replaced config
    pub fn reevaluate(&mut self, config: &WidgetConfig) -> LayoutMode {
        match self.last_width {
            Some(width) => self.set_mode(mode_for(width, config)),
            None => self.mode,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn last_width(&self) -> Option<f32> {
        self.last_width
    }

    /// Orientation handed to the rendering layer
    pub fn effective_orientation(&self, config: &WidgetConfig) -> Orientation {
        match self.mode {
            LayoutMode::ForcedVertical => Orientation::Vertical,
            LayoutMode::Natural => config.orientation,
        }
    }

    fn set_mode(&mut self, mode: LayoutMode) -> LayoutMode {
        if self.mode != mode {
            tracing::debug!("Layout mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responsive(breakpoint: u32) -> WidgetConfig {
        WidgetConfig {
            responsive_orientation: true,
            responsive_breakpoint: Some(breakpoint),
            ..WidgetConfig::default()
        }
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        let config = responsive(480);
        let mut layout = LayoutState::new();

        assert_eq!(layout.observe(479.0, &config), LayoutMode::ForcedVertical);
        assert_eq!(layout.effective_orientation(&config), Orientation::Vertical);

        assert_eq!(layout.observe(480.0, &config), LayoutMode::Natural);
        assert_eq!(layout.effective_orientation(&config), config.orientation);
    }

    #[test]
    fn test_oscillating_widths_flip_every_sample() {
        let config = responsive(480);
        let mut layout = LayoutState::new();
        let samples = [479.5, 480.0, 479.9, 480.1, 479.0, 481.0, 479.99];
        let expected = [
            LayoutMode::ForcedVertical,
            LayoutMode::Natural,
            LayoutMode::ForcedVertical,
            LayoutMode::Natural,
            LayoutMode::ForcedVertical,
            LayoutMode::Natural,
            LayoutMode::ForcedVertical,
        ];

        for (width, mode) in samples.into_iter().zip(expected) {
            assert_eq!(layout.observe(width, &config), mode, "width {width}");
            assert_eq!(layout.mode(), mode);
        }
    }

    #[test]
    fn test_disabled_responsiveness_is_always_natural() {
        let mut config = responsive(480);
        config.responsive_orientation = false;
        let mut layout = LayoutState::new();
        assert_eq!(layout.observe(100.0, &config), LayoutMode::Natural);

        let config = WidgetConfig {
            responsive_breakpoint: None,
            ..WidgetConfig::default()
        };
        assert_eq!(layout.observe(100.0, &config), LayoutMode::Natural);
    }

    #[test]
    fn test_vertical_config_stays_vertical() {
        let config = WidgetConfig {
            orientation: Orientation::Vertical,
            ..responsive(480)
        };
        let mut layout = LayoutState::new();
        layout.observe(1000.0, &config);
        assert_eq!(layout.effective_orientation(&config), Orientation::Vertical);
    }

    #[test]
    fn test_reevaluate_uses_last_width() {
        let mut layout = LayoutState::new();
        assert_eq!(layout.reevaluate(&responsive(480)), LayoutMode::Natural);

        layout.observe(600.0, &responsive(480));
        assert_eq!(layout.mode(), LayoutMode::Natural);
        assert_eq!(layout.reevaluate(&responsive(700)), LayoutMode::ForcedVertical);
        assert_eq!(layout.last_width(), Some(600.0));
    }
}
