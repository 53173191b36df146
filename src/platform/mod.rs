//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the logic thread via channels and
// presents the frames it publishes.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputSystem     │
//  │   ↓                      │    │  ↓               │
//  │  InputBuffer             │    │  GameState       │
//  │   ↓ (about_to_wait)      │    │  ↓               │
//  │  Channel ────────────────┼───→│  MazeSnapshot    │
//  │                          │    │                  │
//  │  MazePainter ←───────────┼────┤  Channel         │
//  │   ↓                      │    └──────────────────┘
//  │  softbuffer Surface      │
//  └──────────────────────────┘
//
//  Frame Boundary: about_to_wait
//    → Buffered key events sent as one batch (empty batches are not sent)
//    → Latest snapshot pulled; redraw requested only if one arrived
// ```
//
// Key Design Decisions:
// - **Snapshot-driven repaint**: The canvas is only re-rasterized when a
//   new snapshot arrives. OS-requested redraws re-present the cached canvas.
// - **Graceful channel disconnect**: A dead logic thread is logged and the
//   event loop exits.
// - **Main thread requirement**: winit needs the main thread on
//   macOS/iOS, so this runs on the thread that called `Game::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== Standard Library Imports ============================================

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use softbuffer::{Context, Surface};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::game::MazeSnapshot;
use crate::render::{colors, Canvas, MazePainter};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Constants ===========================================================

const WINDOW_TITLE: &str = "Perfect Maze";

/// How often the loop wakes to flush input and poll for snapshots.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Title text: the game name followed by the snapshot's status line.
fn window_title(snapshot: &MazeSnapshot) -> String {
    format!("{} - {}", WINDOW_TITLE, snapshot.status_line())
}

//=== Platform ============================================================

/// Window owner, input aggregator and frame presenter.
///
/// Not `Send`: it lives and dies on the main thread. The logic thread is
/// reached only through `event_sender` and `frame_receiver`.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Rc<Window>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    window_size: (u32, u32),

    buffer: InputBuffer,
    input_processor: InputProcessor,
    event_sender: Sender<PlatformEvent>,

    frame_receiver: Receiver<MazeSnapshot>,
    painter: MazePainter,
    canvas: Option<Canvas>,
    latest: Option<MazeSnapshot>,
    needs_paint: bool,

    /// First fatal error seen inside the event loop, reported by `run()`.
    fatal: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(
        event_sender: Sender<PlatformEvent>,
        frame_receiver: Receiver<MazeSnapshot>,
        painter: MazePainter,
        window_size: (u32, u32),
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            surface: None,
            window_size,
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            event_sender,
            frame_receiver,
            painter,
            canvas: None,
            latest: None,
            needs_paint: false,
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Event loop creation/execution failures, and any surface failure
    /// that stopped the loop.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread on platforms where winit
    /// requires it.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    //--- Input ------------------------------------------------------------

    /// Sends buffered key events to the logic thread as one batch.
    ///
    /// A disconnected channel drops the events with a warning; shutdown is
    /// detected separately through the frame channel.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };
        let count = events.len();

        trace!(target: "platform::input", "Flushing {} key events", count);

        if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                count
            );
        }
    }

    //--- Snapshots --------------------------------------------------------

    /// Pulls every pending snapshot and keeps the newest.
    ///
    /// Reports `Disconnected` once the logic thread has hung up.
    fn receive_snapshots(&mut self) -> SnapshotPoll {
        let mut received = false;

        loop {
            match self.frame_receiver.try_recv() {
                Ok(snapshot) => {
                    self.latest = Some(snapshot);
                    received = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return SnapshotPoll::Disconnected,
            }
        }

        if received {
            self.needs_paint = true;
            SnapshotPoll::Updated
        } else {
            SnapshotPoll::Unchanged
        }
    }

    fn update_title(&self) {
        if let (Some(window), Some(snapshot)) = (&self.window, &self.latest) {
            window.set_title(&window_title(snapshot));
        }
    }

    //--- Presentation -----------------------------------------------------

    /// Re-rasterizes if a new snapshot arrived, then presents the canvas.
    ///
    /// Does nothing before the first snapshot or while minimized.
    fn redraw(&mut self) -> Result<(), PlatformError> {
        let (Some(window), Some(surface), Some(snapshot)) =
            (&self.window, &mut self.surface, &self.latest)
        else {
            return Ok(());
        };

        let size = window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        let canvas = self.canvas.get_or_insert_with(|| self.painter.canvas_for(snapshot));
        if self.needs_paint {
            self.painter.paint(canvas, snapshot);
            self.needs_paint = false;
        }

        surface.resize(width, height)?;
        let mut buffer = surface.buffer_mut()?;
        canvas.blit_into(&mut buffer, width.get(), colors::GAINSBORO);
        buffer.present()?;

        Ok(())
    }

    /// Records a fatal error, tells the logic thread, and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        error!(target: "platform", "{}", err);
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        self.fatal.get_or_insert(err);
        event_loop.exit();
    }

    fn create_surface(window: &Rc<Window>) -> Result<Surface<Rc<Window>, Rc<Window>>, PlatformError> {
        let context = Context::new(window.clone())?;
        Ok(Surface::new(&context, window.clone())?)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

/// Result of draining the frame channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotPoll {
    Updated,
    Unchanged,
    Disconnected,
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window and its pixel surface on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let (width, height) = self.window_size;
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                self.fail(event_loop, PlatformError::WindowCreation(e.to_string()));
                return;
            }
        };

        match Self::create_surface(&window) {
            Ok(surface) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.surface = Some(surface);
                self.window = Some(window);
                self.update_title();
                self.needs_paint = self.latest.is_some();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Resized to {}x{}", size.width, size.height);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }

            _ => {}
        }
    }

    /// Frame boundary: flush input, then pick up what the logic thread
    /// published since the last wake-up.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.flush_input_buffer();

        match self.receive_snapshots() {
            SnapshotPoll::Updated => {
                self.update_title();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            SnapshotPoll::Unchanged => {}
            SnapshotPoll::Disconnected => {
                warn!(target: "platform", "Logic thread hung up, closing window");
                event_loop.exit();
                return;
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
