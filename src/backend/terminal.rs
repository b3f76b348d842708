//! ANSI terminal backend.
//!
//! Puts the terminal in raw mode through crossterm, reads stdin on a
//! dedicated thread and discovers the screen size with cursor position
//! reports, so it works on any VT-compatible terminal without ioctls.

use std::io::{self, Read, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use tracing::{debug, trace, warn};

use super::input::InputParser;
use super::Backend;
use crate::config::TerminalConfig;
use crate::renderer::{ansi, OutputBuffer, Screen, ScreenEncoder};
use crate::types::{Color, Point, Size, SpecialChar};

// =============================================================================
// StdinReader
// =============================================================================

/// Raw bytes read from stdin.
enum StdinMessage {
    Data(Vec<u8>),
    /// stdin closed or failed.
    Closed,
}

/// Dedicated stdin reader thread.
///
/// The thread blocks in `read`, so stopping only takes effect after the next
/// chunk arrives or stdin closes. It is never joined.
struct StdinReader {
    handle: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
}

impl StdinReader {
    fn spawn() -> io::Result<(Self, Receiver<StdinMessage>)> {
        let (tx, rx) = mpsc::channel();
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::Builder::new()
            .name("spark-grid-stdin".to_string())
            .spawn(move || Self::read_loop(flag, tx))?;

        Ok((
            Self {
                handle: Some(handle),
                running,
            },
            rx,
        ))
    }

    fn read_loop(running: Arc<AtomicBool>, tx: Sender<StdinMessage>) {
        let stdin = io::stdin();
        let mut buf = [0u8; 512];

        while running.load(Ordering::SeqCst) {
            match stdin.lock().read(&mut buf) {
                Ok(0) => {
                    let _ = tx.send(StdinMessage::Closed);
                    break;
                }
                Ok(n) => {
                    if tx.send(StdinMessage::Data(buf[..n].to_vec())).is_err() {
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => {
                    let _ = tx.send(StdinMessage::Closed);
                    break;
                }
            }
        }
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.handle.take();
    }
}

impl Drop for StdinReader {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// TerminalBackend
// =============================================================================

/// Backend driving the process's own terminal over stdin/stdout.
pub struct TerminalBackend {
    encoder: ScreenEncoder<Stdout>,
    reader: StdinReader,
    rx: Receiver<StdinMessage>,
    input: InputParser,
    listeners: Vec<Box<dyn FnMut(Size)>>,
    reported: Option<Size>,
    config: TerminalConfig,
    active: bool,
    stdin_closed: bool,
}

impl TerminalBackend {
    /// Take over the terminal: raw mode, hidden cursor, cleared screen, and
    /// optionally the alternate screen and mouse reporting.
    pub fn new(config: TerminalConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if config.capture_mouse {
            execute!(stdout, EnableMouseCapture)?;
        }

        let mut out = OutputBuffer::with_capacity(64);
        ansi::cursor_hide(&mut out)?;
        ansi::clear_screen(&mut out)?;
        out.flush_to(&mut stdout)?;

        let (reader, rx) = StdinReader::spawn()?;
        debug!(target: "spark_grid::terminal", ?config, "terminal backend started");

        Ok(Self {
            encoder: ScreenEncoder::with_capacity(stdout, config.glyphs, config.buffer_capacity),
            reader,
            rx,
            input: InputParser::new(),
            listeners: Vec::new(),
            reported: None,
            config,
            active: true,
            stdin_closed: false,
        })
    }

    /// Whether stdin has reached end of file.
    pub fn stdin_closed(&self) -> bool {
        self.stdin_closed
    }

    fn request_size(&mut self) {
        if !self.active || !self.input.request_size() {
            return;
        }
        let mut out = OutputBuffer::with_capacity(32);
        let written = ansi::request_screen_size(&mut out)
            .and_then(|()| self.encoder.write_raw(out.as_bytes()));
        if let Err(err) = written {
            warn!(target: "spark_grid::terminal", %err, "screen size request failed");
            self.input.cancel_size_request();
        }
    }

    fn pump_input(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(StdinMessage::Data(bytes)) => {
                    if let Some(size) = self.input.feed(&bytes) {
                        self.report_size(size);
                    }
                }
                Ok(StdinMessage::Closed) | Err(TryRecvError::Disconnected) => {
                    if !self.stdin_closed {
                        debug!(target: "spark_grid::terminal", "stdin closed");
                    }
                    self.stdin_closed = true;
                    break;
                }
                Err(TryRecvError::Empty) => break,
            }
        }
    }

    fn report_size(&mut self, size: Size) {
        if self.reported == Some(size) {
            return;
        }
        trace!(target: "spark_grid::terminal", ?size, "screen size reported");
        self.reported = Some(size);
        for listener in &mut self.listeners {
            listener(size);
        }
    }
}

impl Screen for TerminalBackend {
    fn begin_draw(&mut self) {
        self.encoder.begin_draw();
    }

    fn set_char(&mut self, ch: char, fg: Color, bg: Color, x: i32, y: i32) {
        self.encoder.set_char(ch, fg, bg, x, y);
    }

    fn set_special_char(&mut self, glyph: SpecialChar, fg: Color, bg: Color, x: i32, y: i32) {
        self.encoder.set_special_char(glyph, fg, bg, x, y);
    }

    fn end_draw(&mut self) -> io::Result<()> {
        self.encoder.end_draw()
    }
}

impl Backend for TerminalBackend {
    fn screen_size(&mut self) -> Option<Size> {
        self.request_size();
        self.input.screen_size()
    }

    fn on_screen_size_changed(&mut self, listener: Box<dyn FnMut(Size)>) {
        self.listeners.push(listener);
    }

    fn update(&mut self) {
        self.pump_input();
        self.request_size();
    }

    fn read_input(&mut self) -> String {
        self.pump_input();
        self.input.take_text()
    }

    fn mouse_position(&self) -> Option<Point> {
        self.input.mouse_position()
    }

    fn destroy(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.reader.stop();

        let stdout = self.encoder.sink_mut();
        if self.config.capture_mouse {
            execute!(stdout, DisableMouseCapture)?;
        }
        let mut out = OutputBuffer::with_capacity(32);
        ansi::soft_reset(&mut out)?;
        ansi::reset(&mut out)?;
        ansi::cursor_show(&mut out)?;
        out.flush_to(stdout)?;
        if self.config.alternate_screen {
            execute!(stdout, LeaveAlternateScreen)?;
        }
        stdout.flush()?;

        terminal::disable_raw_mode()?;
        debug!(target: "spark_grid::terminal", "terminal restored");
        Ok(())
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        if let Err(err) = self.destroy() {
            warn!(target: "spark_grid::terminal", %err, "terminal restore failed");
        }
    }
}
