//! Observable search events.
//!
//! The engine produces abstract events; the transport that carries them to
//! another process (MQTT on the deployed dashboard) is an external
//! collaborator. `EventSink` is the seam.

use serde::{Deserialize, Serialize};

use crate::grid::GridPos;

/// Terminal outcome of one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Goal reached.
    Success,
    /// Frontier exhausted before the goal was found.
    Fail,
}

/// The single success/fail report produced at the end of one search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Whether the goal was reached.
    pub outcome: Outcome,
    /// Root-to-goal path of states, excluding the start state.
    /// Empty on failure.
    pub path: Vec<GridPos>,
}

impl SearchReport {
    /// Report a found solution path.
    #[must_use]
    pub fn success(path: Vec<GridPos>) -> Self {
        Self {
            outcome: Outcome::Success,
            path,
        }
    }

    /// Report an exhausted search.
    #[must_use]
    pub fn fail() -> Self {
        Self {
            outcome: Outcome::Fail,
            path: Vec::new(),
        }
    }
}

/// An event emitted by the search engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchEvent {
    /// One expansion step: the state just selected for expansion.
    Progress {
        /// State of the selected node.
        state: GridPos,
    },
    /// End of one search.
    Terminal(SearchReport),
}

/// Destination for search events.
///
/// Implemented for crossbeam senders (the driver's event stream) and for
/// `Vec<SearchEvent>` (test collection).
pub trait EventSink: Send {
    /// Deliver one event. Must never block on a slow observer.
    fn emit(&mut self, event: SearchEvent);
}

impl EventSink for crossbeam_channel::Sender<SearchEvent> {
    fn emit(&mut self, event: SearchEvent) {
        // A disconnected observer is not an engine error.
        if self.send(event).is_err() {
            log::debug!("Event observer disconnected, dropping event");
        }
    }
}

impl EventSink for Vec<SearchEvent> {
    fn emit(&mut self, event: SearchEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_wire_shape() {
        let event = SearchEvent::Progress {
            state: GridPos::new(3, 5),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"state":[3,5]}"#);
    }

    #[test]
    fn test_terminal_wire_shape() {
        let event = SearchEvent::Terminal(SearchReport::success(vec![
            GridPos::new(1, 0),
            GridPos::new(2, 0),
        ]));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"outcome":"success","path":[[1,0],[2,0]]}"#);
    }

    #[test]
    fn test_fail_report_has_empty_path() {
        let report = SearchReport::fail();
        assert_eq!(report.outcome, Outcome::Fail);
        assert!(report.path.is_empty());

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"outcome":"fail","path":[]}"#);
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<SearchEvent> = Vec::new();
        sink.emit(SearchEvent::Progress {
            state: GridPos::new(0, 0),
        });
        sink.emit(SearchEvent::Terminal(SearchReport::fail()));

        assert_eq!(sink.len(), 2);
        assert!(matches!(sink[0], SearchEvent::Progress { .. }));
    }

    #[test]
    fn test_channel_sink_survives_disconnected_receiver() {
        let (mut tx, rx) = crossbeam_channel::unbounded();
        drop(rx);

        // Must not panic.
        tx.emit(SearchEvent::Terminal(SearchReport::fail()));
    }
}
