//! External collaboration data consumed by the analytics engine.
//!
//! Peer feedback and the tutoring ledger live outside this service. The
//! analytics engine only sees them through [`CollaborationDataSource`], so a
//! real integration can be dropped in without touching the metric logic.

/// Peer rating reported until a feedback source is wired up
pub const PLACEHOLDER_PEER_RATING: f64 = 4.2;

/// Source of collaboration data not derivable from a session log
pub trait CollaborationDataSource: Send + Sync {
    /// Average rating the student received from peers
    fn peer_rating(&self, student_id: &str) -> f64;

    /// Number of tutoring sessions the student has given
    fn tutoring_sessions_given(&self, student_id: &str) -> u32;
}

/// Fixed values used while no feedback source or tutoring ledger exists
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderCollaborationData {
    pub peer_rating: f64,
    pub tutoring_sessions_given: u32,
}

impl PlaceholderCollaborationData {
    pub fn new(peer_rating: f64, tutoring_sessions_given: u32) -> Self {
        Self {
            peer_rating,
            tutoring_sessions_given,
        }
    }
}

impl Default for PlaceholderCollaborationData {
    fn default() -> Self {
        Self::new(PLACEHOLDER_PEER_RATING, 0)
    }
}

impl CollaborationDataSource for PlaceholderCollaborationData {
    fn peer_rating(&self, _student_id: &str) -> f64 {
        self.peer_rating
    }

    fn tutoring_sessions_given(&self, _student_id: &str) -> u32 {
        self.tutoring_sessions_given
    }
}
