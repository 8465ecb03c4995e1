//! Display mode state machine
//!
//! The display either counts (follows the detected pitch and shows raw
//! snapshots) or holds (freezes the harmonizer on its current tuning). The
//! `Start*` modes are one-refresh entry states that do their setup work and
//! then settle into the steady mode.

use brightwave::ControlMessage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Count,
    Hold,
    StartCount,
    StartHold,
}

/// What one display refresh should do
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RefreshActions {
    /// Messages to send to the audio thread, in order
    pub messages: [Option<ControlMessage>; 3],
    /// Copy the ready snapshot onto the display
    pub draw_snapshot: bool,
}

impl RefreshActions {
    fn push(&mut self, message: ControlMessage) {
        if let Some(slot) = self.messages.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(message);
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = ControlMessage> + '_ {
        self.messages.iter().flatten().copied()
    }
}

impl DisplayMode {
    /// Advance one refresh. Returns the mode to continue in and the work to do.
    pub fn refresh(self, snapshot_ready: bool) -> (DisplayMode, RefreshActions) {
        let mut actions = RefreshActions::default();

        match self {
            DisplayMode::StartCount | DisplayMode::Count => {
                if self == DisplayMode::StartCount {
                    actions.push(ControlMessage::Hold(false));
                }

                if snapshot_ready {
                    actions.draw_snapshot = true;
                    actions.push(ControlMessage::CompleteSnapshot);
                } else {
                    actions.push(ControlMessage::StartSnapshot);
                }
                (DisplayMode::Count, actions)
            }
            DisplayMode::StartHold | DisplayMode::Hold => {
                if self == DisplayMode::StartHold {
                    actions.push(ControlMessage::CompleteSnapshot);
                    actions.push(ControlMessage::Hold(true));
                }
                (DisplayMode::Hold, actions)
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Count | DisplayMode::StartCount => "COUNT",
            DisplayMode::Hold | DisplayMode::StartHold => "HOLD",
        }
    }

    pub fn is_holding(self) -> bool {
        matches!(self, DisplayMode::Hold | DisplayMode::StartHold)
    }
}
