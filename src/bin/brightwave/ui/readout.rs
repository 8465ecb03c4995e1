//! Numeric readout panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use brightwave::{dsp::pitch::octave_fold, quantize::Quantizer, Telemetry};

use super::DisplayMode;

pub struct Readout<'a> {
    pub telemetry: Option<&'a Telemetry>,
    pub mode: DisplayMode,
    pub gate_high: bool,
    pub quantizer: &'a Quantizer,
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

/// Pitch shown on the Tone and CV rows: whatever the bank is tuned to, so
/// the readout follows the configured tracking source and Hold.
fn display_pitch(telemetry: &Telemetry) -> f32 {
    telemetry.fundamental_hz
}

pub fn render_readout(frame: &mut Frame, area: Rect, readout: &Readout<'_>) {
    let block = Block::default()
        .title(format!(" Brightwave [{}] ", readout.mode.label()))
        .borders(Borders::ALL);

    let mut lines = Vec::with_capacity(9);

    match readout.telemetry {
        None => lines.push(Line::from("waiting for audio...")),
        Some(t) => {
            let tracked = display_pitch(t);
            lines.push(row("Sampling", format!("{:.1} Hz", t.zero_crossing_hz)));
            lines.push(row("Sampling fft", format!("{:.1} Hz", t.spectral_hz)));

            let fundamental = Span::styled(
                format!("{:.1} Hz", t.fundamental_hz),
                if t.holding {
                    Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::LightGreen)
                },
            );
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", if t.holding { "Holding" } else { "Fundamental" }),
                    Style::default().fg(Color::DarkGray),
                ),
                fundamental,
            ]));

            lines.push(row("Tone", format!("{:.0}", readout.quantizer.remap(tracked))));
            lines.push(row("CV", format!("{:.3}", octave_fold(tracked))));
            lines.push(row(
                "Buffer",
                format!(
                    "{}/{}{}",
                    t.buffer_fill,
                    t.buffer_capacity,
                    if t.is_full() { " (full)" } else { "" }
                ),
            ));
            lines.push(row(
                "Snapshot",
                (if t.snapshot.is_some() { "ready" } else { "-" }).to_string(),
            ));
        }
    }

    lines.push(row(
        "Gate",
        (if readout.gate_high { "HIGH" } else { "low" }).to_string(),
    ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
