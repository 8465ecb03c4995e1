//! TUI module for brightwave
//!
//! Shows the engine's telemetry (pitch estimates, window fill, snapshots),
//! runs the display mode state machine, and polls the keyboard gate.

pub mod state;
mod readout;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::{Duration, Instant};

use brightwave::{
    io::{EdgeDetector, GateInput},
    quantize::Quantizer,
    ControlMessage, Telemetry, SNAPSHOT_LEN,
};

pub use state::DisplayMode;

use readout::{render_readout, Readout};
use waveform::render_waveform;

/// How often the mode state machine advances (snapshot cadence)
const MODE_REFRESH: Duration = Duration::from_millis(500);

/// Gate driven from the keyboard: Space toggles it high/low
#[derive(Default)]
pub struct KeyGate {
    high: bool,
}

impl KeyGate {
    fn toggle(&mut self) {
        self.high = !self.high;
    }
}

impl GateInput for KeyGate {
    fn read(&mut self) -> f32 {
        if self.high {
            1.0
        } else {
            0.0
        }
    }
}

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for telemetry from the audio thread
    telemetry_rx: Consumer<Telemetry>,
    /// Ring buffer sender for control messages to the audio thread
    control_tx: Producer<ControlMessage>,
    /// Latest telemetry received
    telemetry: Option<Telemetry>,
    quantizer: Quantizer,
    gate: EdgeDetector<KeyGate>,
    mode: DisplayMode,
    last_refresh: Instant,
    /// Last snapshot drawn (kept until the next capture)
    snapshot: [f32; SNAPSHOT_LEN],
    snapshot_len: usize,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        telemetry_rx: Consumer<Telemetry>,
        control_tx: Producer<ControlMessage>,
        quantizer: Quantizer,
    ) -> Self {
        Self {
            telemetry_rx,
            control_tx,
            telemetry: None,
            quantizer,
            gate: EdgeDetector::new(KeyGate::default()),
            mode: DisplayMode::StartCount,
            last_refresh: Instant::now(),
            snapshot: [0.0; SNAPSHOT_LEN],
            snapshot_len: 0,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_telemetry();
            self.poll_gate();

            if self.last_refresh.elapsed() >= MODE_REFRESH {
                self.refresh_mode();
                self.last_refresh = Instant::now();
            }

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep only the latest telemetry
    fn poll_telemetry(&mut self) {
        while let Ok(telemetry) = self.telemetry_rx.pop() {
            self.telemetry = Some(telemetry);
        }
    }

    /// A rising gate edge arms a snapshot
    fn poll_gate(&mut self) {
        if self.gate.rising_edge() {
            tracing::debug!("gate rising edge, arming snapshot");
            self.send(ControlMessage::StartSnapshot);
        }
    }

    fn refresh_mode(&mut self) {
        let snapshot = self.telemetry.and_then(|t| t.snapshot);
        let (next, actions) = self.mode.refresh(snapshot.is_some());

        if actions.draw_snapshot {
            if let Some((samples, len)) = snapshot {
                self.snapshot = samples;
                self.snapshot_len = len;
            }
            // Stale copy would redraw until the next telemetry arrives
            if let Some(telemetry) = self.telemetry.as_mut() {
                telemetry.snapshot = None;
            }
        }
        for message in actions.messages() {
            self.send(message);
        }

        if next != self.mode {
            tracing::debug!(from = ?self.mode, to = ?next, "display mode");
        }
        self.mode = next;
    }

    fn send(&mut self, message: ControlMessage) {
        if self.control_tx.push(message).is_err() {
            tracing::warn!(?message, "control ring full, message dropped");
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                if self.mode.is_holding() {
                    self.mode = DisplayMode::StartCount;
                }
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                if !self.mode.is_holding() {
                    self.mode = DisplayMode::StartHold;
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.send(ControlMessage::ResetTracking);
            }
            KeyCode::Char(' ') => self.gate.gate_mut().toggle(),
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: readout, recent input, snapshot, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(11), // Readout
                Constraint::Min(6),     // Recent input
                Constraint::Min(6),     // Snapshot
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        let readout = Readout {
            telemetry: self.telemetry.as_ref(),
            mode: self.mode,
            gate_high: self.gate.last_value().is_some_and(|v| v > 0.0),
            quantizer: &self.quantizer,
        };
        render_readout(frame, chunks[0], &readout);

        let recent = self.telemetry.as_ref().map(|t| t.recent()).unwrap_or(&[]);
        render_waveform(frame, chunks[1], " Input (latest samples) ", recent, Color::Cyan);
        render_waveform(
            frame,
            chunks[2],
            " Snapshot ",
            &self.snapshot[..self.snapshot_len],
            Color::Yellow,
        );

        let help = Paragraph::new(" [Q] Quit  [C] Count  [H] Hold  [R] Reset tracking  [Space] Gate")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
