//! Viewport controller
//!
//! Owns the loaded sample buffer and the three viewport parameters
//! (`start`, `end`, `pos`) and turns them into an axis window on a
//! [`PlotSurface`].
//!
//! ## States
//!
//! `NoFileLoaded` -> `FileLoaded`. Opening another file re-enters
//! `FileLoaded` with a new buffer and reset parameters; there is no way
//! back to `NoFileLoaded`.
//!
//! ## Rendering
//!
//! Every control's change listener raises a shared render flag. Each
//! controller operation that can move a control flushes that flag before
//! returning, so a drag tick or a committed entry redraws immediately.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::control::PairedControl;
use crate::audio::{decode_wav, DecodeError, DecodedAudio, SampleBuffer};
use crate::render::{AxisWindow, PlotSurface};

/// Margin factor applied to the buffer-wide amplitude extrema
const Y_MARGIN: f64 = 1.1;

/// Which of the three paired controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    Start,
    End,
    Pos,
}

impl ControlId {
    pub const ALL: [ControlId; 3] = [ControlId::Start, ControlId::End, ControlId::Pos];

    pub fn label(&self) -> &'static str {
        match self {
            ControlId::Start => "X Start",
            ControlId::End => "X End",
            ControlId::Pos => "X Pos",
        }
    }
}

/// The file currently on screen
#[derive(Debug)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub sample_rate: u32,
    pub buffer: SampleBuffer,
}

#[derive(Debug)]
pub enum ViewportState {
    NoFileLoaded,
    FileLoaded(LoadedFile),
}

/// Compute the visible axis window.
///
/// X follows the controls directly; Y is the buffer-wide extrema scaled by
/// 1.1, independent of which slice is visible.
pub fn visible_window(buffer: &SampleBuffer, start: i64, end: i64, pos: i64) -> AxisWindow {
    AxisWindow {
        x_min: start + pos,
        x_max: end + pos,
        y_min: buffer.min() * Y_MARGIN,
        y_max: buffer.max() * Y_MARGIN,
    }
}

pub struct ViewportController<S: PlotSurface> {
    state: ViewportState,
    start: PairedControl,
    end: PairedControl,
    pos: PairedControl,
    surface: S,
    x_readout: String,
    y_readout: String,
    status: String,
    render_requested: Rc<Cell<bool>>,
}

impl<S: PlotSurface> ViewportController<S> {
    pub fn new(surface: S) -> Self {
        let render_requested = Rc::new(Cell::new(false));

        let mut controller = Self {
            state: ViewportState::NoFileLoaded,
            start: PairedControl::new(ControlId::Start.label()),
            end: PairedControl::new(ControlId::End.label()),
            pos: PairedControl::new(ControlId::Pos.label()),
            surface,
            x_readout: String::new(),
            y_readout: String::new(),
            status: "Program Startup".to_string(),
            render_requested,
        };

        for id in ControlId::ALL {
            let flag = Rc::clone(&controller.render_requested);
            controller
                .control_mut(id)
                .on_change(move |_| flag.set(true));
        }

        controller
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ViewportState::FileLoaded(_))
    }

    pub fn control(&self, id: ControlId) -> &PairedControl {
        match id {
            ControlId::Start => &self.start,
            ControlId::End => &self.end,
            ControlId::Pos => &self.pos,
        }
    }

    fn control_mut(&mut self, id: ControlId) -> &mut PairedControl {
        match id {
            ControlId::Start => &mut self.start,
            ControlId::End => &mut self.end,
            ControlId::Pos => &mut self.pos,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// `x=(x_min, x_max)` from the last render
    pub fn x_readout(&self) -> &str {
        &self.x_readout
    }

    /// `y=(y_min, y_max)` from the last render
    pub fn y_readout(&self) -> &str {
        &self.y_readout
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// Editable entry text; committed with [`commit_entry`](Self::commit_entry)
    pub fn entry_text_mut(&mut self, id: ControlId) -> &mut String {
        self.control_mut(id).entry_text_mut()
    }

    /// Slider drag tick
    pub fn drag(&mut self, id: ControlId, value: i64) {
        self.control_mut(id).drag_to(value);
        self.flush();
    }

    /// Enter pressed in an entry box
    pub fn commit_entry(&mut self, id: ControlId) {
        self.control_mut(id).commit_entry();
        self.flush();
    }

    fn flush(&mut self) {
        if self.render_requested.replace(false) {
            self.render();
        }
    }

    /// Decode `path` and load it. On error nothing changes.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<(), DecodeError> {
        let path = path.as_ref();
        let audio = decode_wav(path)?;
        self.load(path, audio);
        Ok(())
    }

    /// Replace the current file with decoded audio and render once
    pub fn load(&mut self, path: impl Into<PathBuf>, audio: DecodedAudio) {
        let path = path.into();
        let buffer = audio.first_channel();
        let len = i64::try_from(buffer.len()).unwrap_or(i64::MAX);

        log::info!(
            "Loaded {} ({} ch, {} frames @ {} Hz)",
            path.display(),
            audio.channels,
            audio.frames(),
            audio.sample_rate
        );

        self.status = format!("Loaded {} @ {} Hz", path.display(), audio.sample_rate);
        self.state = ViewportState::FileLoaded(LoadedFile {
            path,
            sample_rate: audio.sample_rate,
            buffer,
        });

        self.start.set_bounds(0, len);
        self.start.set_value(0);

        self.end.set_bounds(0, len);
        self.end.set_value(len);

        self.pos.set_bounds(0, len - self.end.value());
        self.pos.set_value(0);

        // Configuration above raises the flag; the load renders exactly once
        self.render_requested.set(false);
        self.render();
    }

    /// Redraw the plot from the current parameters. No-op without a file.
    pub fn render(&mut self) {
        let ViewportState::FileLoaded(file) = &self.state else {
            return;
        };
        let buffer = &file.buffer;

        self.surface.clear();
        self.surface.plot_series(buffer);

        let window = visible_window(
            buffer,
            self.start.value(),
            self.end.value(),
            self.pos.value(),
        );
        self.surface.set_axis(window);

        // `end` may just have moved; pos keeps its value even past the bound
        let len = i64::try_from(buffer.len()).unwrap_or(i64::MAX);
        self.pos.set_bounds(0, len - self.end.value());

        self.x_readout = format!("x=({}, {})", window.x_min, window.x_max);
        self.y_readout = format!("y=({}, {})", window.y_min, window.y_max);

        if window.is_inverted() {
            log::debug!("Render {:?} (inverted x range)", window);
        } else {
            log::debug!("Render {:?}", window);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every command the controller issues
    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        series_lens: Vec<usize>,
        windows: Vec<AxisWindow>,
    }

    impl RecordingSurface {
        fn renders(&self) -> usize {
            self.windows.len()
        }

        fn last_window(&self) -> AxisWindow {
            *self.windows.last().expect("no render recorded")
        }
    }

    impl PlotSurface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn plot_series(&mut self, series: &SampleBuffer) {
            self.series_lens.push(series.len());
        }

        fn set_axis(&mut self, window: AxisWindow) {
            self.windows.push(window);
        }
    }

    fn mono(samples: Vec<f64>) -> DecodedAudio {
        DecodedAudio {
            sample_rate: 44100,
            channels: 1,
            samples,
        }
    }

    fn ramp(len: usize) -> DecodedAudio {
        mono((0..len).map(|i| i as f64).collect())
    }

    fn loaded(len: usize) -> ViewportController<RecordingSurface> {
        let mut vc = ViewportController::new(RecordingSurface::default());
        vc.load("test.wav", ramp(len));
        vc
    }

    fn values(vc: &ViewportController<RecordingSurface>) -> (i64, i64, i64) {
        (
            vc.control(ControlId::Start).value(),
            vc.control(ControlId::End).value(),
            vc.control(ControlId::Pos).value(),
        )
    }

    #[test]
    fn test_render_without_file_is_noop() {
        let mut vc = ViewportController::new(RecordingSurface::default());
        vc.render();
        vc.drag(ControlId::Start, 10);
        assert!(!vc.is_loaded());
        assert_eq!(vc.surface().clears, 0);
        assert_eq!(vc.surface().renders(), 0);
        assert_eq!(vc.status(), "Program Startup");
    }

    #[test]
    fn test_load_resets_parameters_and_renders_once() {
        let vc = loaded(1000);
        assert!(vc.is_loaded());
        assert_eq!(values(&vc), (0, 1000, 0));
        assert_eq!(vc.control(ControlId::Pos).max(), 0);
        assert_eq!(vc.surface().renders(), 1);
        assert_eq!(vc.status(), "Loaded test.wav @ 44100 Hz");
        assert_eq!(vc.x_readout(), "x=(0, 1000)");
    }

    #[test]
    fn test_second_load_replaces_everything() {
        let mut vc = loaded(1000);
        vc.drag(ControlId::End, 600);
        vc.drag(ControlId::Start, 100);
        vc.drag(ControlId::Pos, 50);
        let before = vc.surface().renders();

        vc.load("short.wav", ramp(300));
        assert_eq!(values(&vc), (0, 300, 0));
        assert_eq!(vc.control(ControlId::Start).max(), 300);
        assert_eq!(vc.control(ControlId::End).max(), 300);
        assert_eq!(vc.control(ControlId::Pos).max(), 0);
        assert_eq!(vc.surface().renders(), before + 1);
        assert_eq!(vc.surface().series_lens.last(), Some(&300));
    }

    #[test]
    fn test_end_change_refreshes_pos_bound() {
        let mut vc = loaded(1000);
        vc.drag(ControlId::End, 600);
        assert_eq!(vc.control(ControlId::Pos).max(), 400);
        assert_eq!(vc.surface().renders(), 2);
    }

    #[test]
    fn test_x_window_follows_controls() {
        let mut vc = loaded(1000);
        vc.drag(ControlId::End, 500);
        vc.drag(ControlId::Start, 100);
        vc.drag(ControlId::Pos, 50);

        let window = vc.surface().last_window();
        assert_eq!((window.x_min, window.x_max), (150, 550));
        assert_eq!(vc.x_readout(), "x=(150, 550)");
    }

    #[test]
    fn test_y_window_uses_buffer_extrema() {
        let mut vc = ViewportController::new(RecordingSurface::default());
        vc.load("peaks.wav", mono(vec![0.0, -1000.0, 250.0, 900.0]));

        let window = vc.surface().last_window();
        assert!((window.y_min - -1100.0).abs() < 1e-9);
        assert!((window.y_max - 990.0).abs() < 1e-9);

        // Zooming does not change the y window
        vc.drag(ControlId::End, 2);
        let zoomed = vc.surface().last_window();
        assert_eq!(zoomed.y_min, window.y_min);
        assert_eq!(zoomed.y_max, window.y_max);
    }

    #[test]
    fn test_full_series_drawn_regardless_of_zoom() {
        let mut vc = loaded(1000);
        vc.drag(ControlId::End, 10);
        assert!(vc.surface().series_lens.iter().all(|&n| n == 1000));
        assert_eq!(vc.surface().clears, vc.surface().renders());
    }

    #[test]
    fn test_stereo_uses_first_channel() {
        let mut vc = ViewportController::new(RecordingSurface::default());
        vc.load(
            "stereo.wav",
            DecodedAudio {
                sample_rate: 8000,
                channels: 2,
                samples: vec![1.0, -50.0, 2.0, -60.0, 3.0, -70.0],
            },
        );

        assert_eq!(values(&vc), (0, 3, 0));
        let window = vc.surface().last_window();
        assert!((window.y_min - 1.1).abs() < 1e-9);
        assert!((window.y_max - 3.3).abs() < 1e-9);
        match vc.state() {
            ViewportState::FileLoaded(file) => {
                assert_eq!(file.buffer.samples(), &[1.0, 2.0, 3.0]);
                assert_eq!(file.sample_rate, 8000);
            }
            ViewportState::NoFileLoaded => panic!("expected a loaded file"),
        }
    }

    #[test]
    fn test_pos_not_clamped_when_bound_shrinks() {
        let mut vc = loaded(1000);
        vc.drag(ControlId::End, 600);
        vc.drag(ControlId::Pos, 300);
        vc.drag(ControlId::End, 900);

        assert_eq!(vc.control(ControlId::Pos).max(), 100);
        assert_eq!(vc.control(ControlId::Pos).value(), 300);
        let window = vc.surface().last_window();
        assert_eq!((window.x_min, window.x_max), (300, 1200));
    }

    #[test]
    fn test_inverted_range_is_rendered() {
        let mut vc = loaded(1000);
        vc.drag(ControlId::End, 200);
        vc.drag(ControlId::Start, 800);

        let window = vc.surface().last_window();
        assert!(window.is_inverted());
        assert_eq!(vc.x_readout(), "x=(800, 200)");
    }

    #[test]
    fn test_entry_commit_renders() {
        let mut vc = loaded(1000);
        *vc.entry_text_mut(ControlId::Start) = "250".to_string();
        vc.commit_entry(ControlId::Start);
        assert_eq!(vc.control(ControlId::Start).value(), 250);
        assert_eq!(vc.surface().renders(), 2);

        *vc.entry_text_mut(ControlId::Start) = "not a number".to_string();
        vc.commit_entry(ControlId::Start);
        assert_eq!(vc.control(ControlId::Start).value(), 0);
        assert_eq!(vc.entry_text_mut(ControlId::Start).as_str(), "0");
        assert_eq!(vc.surface().renders(), 3);
    }

    #[test]
    fn test_unchanged_value_does_not_render() {
        let mut vc = loaded(1000);
        vc.drag(ControlId::Start, 0);
        assert_eq!(vc.surface().renders(), 1);
    }

    #[test]
    fn test_open_missing_file_keeps_state() {
        let mut vc = ViewportController::new(RecordingSurface::default());
        assert!(vc.open_file("/nonexistent/monocle/missing.wav").is_err());
        assert!(!vc.is_loaded());
        assert_eq!(vc.surface().renders(), 0);
    }

    #[test]
    fn test_open_file_loads_from_disk() {
        let path = std::env::temp_dir().join(format!("monocle-open-{}.wav", std::process::id()));
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        {
            let mut writer = hound::WavWriter::create(&path, spec).unwrap();
            for i in 0..500i16 {
                writer.write_sample(i).unwrap();
                writer.write_sample(-i).unwrap();
            }
            writer.finalize().unwrap();
        }

        let mut vc = ViewportController::new(RecordingSurface::default());
        let result = vc.open_file(&path);
        std::fs::remove_file(&path).ok();
        result.unwrap();

        assert!(vc.is_loaded());
        assert_eq!(values(&vc), (0, 500, 0));
        assert_eq!(vc.status(), format!("Loaded {} @ 22050 Hz", path.display()));
        assert_eq!(vc.surface().renders(), 1);
        assert_eq!(vc.surface().series_lens, vec![500]);
        assert_eq!(vc.x_readout(), "x=(0, 500)");
    }

    #[test]
    fn test_visible_window() {
        let buffer = SampleBuffer::new(vec![-1000.0, 900.0]);
        let window = visible_window(&buffer, 100, 500, 50);
        assert_eq!((window.x_min, window.x_max), (150, 550));
        assert!((window.y_min - -1100.0).abs() < 1e-9);
        assert!((window.y_max - 990.0).abs() < 1e-9);
    }
}
