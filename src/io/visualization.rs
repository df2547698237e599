//! Generation capture and animated GIF export

use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, RgbaImage};

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MazeError, Result};
use crate::io::image::{rasterize, validate_image_size};
use crate::io::render::WalkView;
use crate::maze::builder::GenerationObserver;
use crate::maze::grid::{Cell, Grid};
use crate::maze::walk::{Step, WalkPath};

/// A single recorded generation event
#[derive(Debug, Clone)]
pub enum CaptureEvent {
    /// The walk moved; trail and head at that moment
    Walk {
        /// Trail steps in order
        steps: Vec<Step>,
        /// Head of the walk
        current: Cell,
    },
    /// A walk was grafted onto the tree
    Commit {
        /// Steps written into the grid
        steps: Vec<Step>,
    },
}

/// Records generation events for later replay as an animation
///
/// Only events are stored; frames are rendered on export by replaying the
/// commits onto a copy of the starting grid.
pub struct VisualizationCapture {
    initial: Grid,
    events: Vec<CaptureEvent>,
    capture_walks: bool,
}

impl VisualizationCapture {
    /// Start capturing from the grid's current state
    ///
    /// With `capture_walks` every walk move becomes a frame; otherwise only
    /// commits do.
    pub fn new(grid: &Grid, capture_walks: bool) -> Self {
        Self {
            initial: grid.clone(),
            events: Vec::new(),
            capture_walks,
        }
    }

    /// Records a move of the walk in progress
    pub fn record_walk(&mut self, path: &WalkPath, current: Cell) {
        self.events.push(CaptureEvent::Walk {
            steps: path.steps().to_vec(),
            current,
        });
    }

    /// Records a committed walk
    pub fn record_commit(&mut self, steps: &[Step]) {
        self.events.push(CaptureEvent::Commit {
            steps: steps.to_vec(),
        });
    }

    /// Returns the total number of recorded events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Recorded events in order
    pub fn events(&self) -> &[CaptureEvent] {
        &self.events
    }

    /// Export the captured generation as a GIF with automatic frame skipping
    ///
    /// Frame rates above what viewers support are reduced by keeping every
    /// n-th frame, preserving the apparent speed of the animation. Frames are
    /// encoded as they are rendered, so only the latest one is held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image would exceed `MAX_IMAGE_PIXELS`
    /// - A recorded commit cannot be replayed onto the starting grid
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        validate_image_size(&self.initial)?;

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
        } else {
            1
        };

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        self.render_frames(effective_delay_ms, skip_factor as usize, |frame| {
            encoder
                .encode_frame(frame)
                .map_err(|e| MazeError::ImageExport {
                    path: output_path.to_path_buf(),
                    source: e,
                })
        })?;

        Ok(())
    }

    /// Replay the recorded events, handing each animation frame to `emit`
    ///
    /// Every `skip_factor`-th event produces a frame, after the starting grid.
    /// A trailing partial batch produces one more, and the last image is
    /// repeated with a longer delay. Returns the number of frames emitted.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorded commit cannot be applied to the grid,
    /// or if `emit` fails
    pub fn render_frames<F>(
        &self,
        delay_ms: u32,
        skip_factor: usize,
        mut emit: F,
    ) -> Result<usize>
    where
        F: FnMut(Frame) -> Result<()>,
    {
        let skip_factor = skip_factor.max(1);
        let mut grid = self.initial.clone();
        let mut last = rasterize(&grid, None);
        emit(timed_frame(last.clone(), delay_ms))?;
        let mut emitted = 1;
        let mut pending = false;

        for (count, event) in self.events.iter().enumerate() {
            let view = match event {
                CaptureEvent::Commit { steps } => {
                    for step in steps {
                        grid.mark_connected(step.cell, step.direction)?;
                    }
                    None
                }
                CaptureEvent::Walk { steps, current } => Some(WalkView {
                    steps,
                    current: *current,
                }),
            };

            pending = true;
            if (count + 1) % skip_factor == 0 {
                last = rasterize(&grid, view.as_ref());
                emit(timed_frame(last.clone(), delay_ms))?;
                emitted += 1;
                pending = false;
            }
        }

        if pending {
            last = rasterize(&grid, None);
            emit(timed_frame(last.clone(), delay_ms))?;
            emitted += 1;
        }

        // Final frame displays longer so the finished maze stays visible
        emit(timed_frame(last, delay_ms * FINAL_FRAME_HOLD))?;

        Ok(emitted + 1)
    }
}

fn timed_frame(buffer: RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
}

impl GenerationObserver for VisualizationCapture {
    fn on_step(&mut self, _grid: &Grid, path: &WalkPath, current: Cell) -> Result<()> {
        if self.capture_walks {
            self.record_walk(path, current);
        }
        Ok(())
    }

    fn on_commit(&mut self, _grid: &Grid, committed: &[Step]) -> Result<()> {
        self.record_commit(committed);
        Ok(())
    }
}
