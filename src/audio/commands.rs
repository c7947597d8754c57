use std::fmt;

/// Everything that can move the transport state machine.
///
/// Button clicks and transport notifications arrive through the same enum so
/// there is only one way into the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportEvent {
    OpenSucceeded,
    PlayClicked,
    StopClicked,
    LoopToggled,
    TransportStarted,
    TransportStopped,
}

impl TransportEvent {
    pub const ALL: [TransportEvent; 6] = [
        TransportEvent::OpenSucceeded,
        TransportEvent::PlayClicked,
        TransportEvent::StopClicked,
        TransportEvent::LoopToggled,
        TransportEvent::TransportStarted,
        TransportEvent::TransportStopped,
    ];
}

impl fmt::Display for TransportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportEvent::OpenSucceeded => "open_succeeded",
            TransportEvent::PlayClicked => "play_clicked",
            TransportEvent::StopClicked => "stop_clicked",
            TransportEvent::LoopToggled => "loop_toggled",
            TransportEvent::TransportStarted => "transport_started",
            TransportEvent::TransportStopped => "transport_stopped",
        };
        f.write_str(name)
    }
}
