//=========================================================================
// Event Receivers
//=========================================================================
//
// Sink side of the event contract. The device hands every translated
// event, in native order, to a single receiver per poll call.
//
// Provided sinks:
//   Vec<Event>        → collects events in order (tests, replay)
//   Sender<Event>     → forwards events to another thread
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::warn;

//=== Internal Dependencies ===============================================

use super::event::Event;

//=== EventReceiver =======================================================

/// Consumer of engine events.
///
/// Returns `true` when the event was consumed. The device does not stop
/// delivering events based on the return value; it only informs callers
/// that chain receivers.
pub trait EventReceiver {
    fn on_event(&mut self, event: &Event) -> bool;
}

//--- Collecting Sink -----------------------------------------------------

impl EventReceiver for Vec<Event> {
    fn on_event(&mut self, event: &Event) -> bool {
        self.push(*event);
        false
    }
}

//--- Channel Sink --------------------------------------------------------

/// Forwards to a channel. A disconnected receiver drops the event and logs
/// a warning rather than failing the poll.
impl EventReceiver for Sender<Event> {
    fn on_event(&mut self, event: &Event) -> bool {
        if self.send(*event).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping {:?}", event);
            return false;
        }
        true
    }
}

//--- Borrowed Sink -------------------------------------------------------

impl<R: EventReceiver + ?Sized> EventReceiver for &mut R {
    fn on_event(&mut self, event: &Event) -> bool {
        (**self).on_event(event)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
