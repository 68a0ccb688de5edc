use anyhow::Result;
use winit::dpi::LogicalSize;

use stipple_engine::coords::ColorRgba;
use stipple_engine::device::GpuInit;
use stipple_engine::logging::{init_logging, LoggingConfig};
use stipple_engine::window::{Runtime, RuntimeConfig};

use crate::canvas::CanvasApp;
use crate::config::CanvasConfig;
use crate::controls::HELP;
use crate::selection::Selection;

/// Application builder: configure the window and canvas, then [`run`](Studio::run).
///
/// ```rust,ignore
/// Studio::new()
///     .title("stipple")
///     .size(800.0, 800.0)
///     .circle_segments(24)
///     .run()?;
/// ```
pub struct Studio {
    title: String,
    width: f64,
    height: f64,
    canvas: CanvasConfig,
    logging: LoggingConfig,
    gpu: GpuInit,
}

impl Studio {
    pub fn new() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            title:   runtime.title,
            width:   runtime.initial_size.width,
            height:  runtime.initial_size.height,
            canvas:  CanvasConfig::default(),
            logging: LoggingConfig::default(),
            gpu:     GpuInit::default(),
        }
    }

    /// Set the window title prefix; status follows it.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    pub fn background(mut self, color: ColorRgba) -> Self {
        self.canvas.background = color;
        self
    }

    /// Wedges per circle; values below 3 are raised to 3.
    pub fn circle_segments(mut self, segments: u32) -> Self {
        self.canvas.circle_segments = segments;
        self
    }

    /// Brush state at startup.
    pub fn selection(mut self, selection: Selection) -> Self {
        self.canvas.selection = selection;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }

    /// Initializes logging, opens the window and blocks until it closes.
    pub fn run(self) -> Result<()> {
        init_logging(self.logging);

        log::info!("starting {} ({}x{})", self.title, self.width, self.height);
        log::info!("{HELP}");

        let config = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        };
        Runtime::run(config, self.gpu, CanvasApp::new(self.title, self.canvas))
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}
