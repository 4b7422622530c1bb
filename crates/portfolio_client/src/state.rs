use portfolio_common::Project;

use crate::error::FetchError;

/// Identifier of a single fetch invocation within one lifecycle.
///
/// Sequence numbers increase monotonically per lifecycle; they are the
/// guard that resolves overlapping refreshes (see [`FetchLifecycle::settle`]).
pub type RequestSeq = u64;

/// The fetch lifecycle as a pure state machine.
///
/// One instance exists per mounted provider. It owns the three derived
/// render states (loading, error, success) and enforces their
/// invariant: exactly one of `is_loading`, `error`-set, or neither is
/// observable at any point, so the view's three branches are mutually
/// exclusive and collectively exhaustive.
///
/// The machine knows nothing about signals, tasks, or HTTP. The reactive
/// wrapper (`ProjectsContext`) calls [`begin`](Self::begin) before each
/// request and [`settle`](Self::settle) with the completion; everything
/// else is derived reads. Keeping it pure makes every transition
/// testable without a browser or a network.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchLifecycle {
    projects: Vec<Project>,
    is_loading: bool,
    error: Option<String>,
    /// Sequence number of the most recently issued request. Completions
    /// carrying an older number are stale and get discarded.
    latest_seq: RequestSeq,
}

impl FetchLifecycle {
    /// A fresh lifecycle: no data, loading, no error.
    ///
    /// `is_loading` starts as `true` because a provider always issues the
    /// initial fetch on mount; there is no observable "idle" state before
    /// the first request.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            is_loading: true,
            error: None,
            latest_seq: 0,
        }
    }

    /// Records the start of a fetch and returns its sequence number.
    ///
    /// Sets `is_loading = true` and clears any prior error, so a retry
    /// never shows stale failure text while a new request is in flight.
    pub fn begin(&mut self) -> RequestSeq {
        self.latest_seq += 1;
        self.is_loading = true;
        self.error = None;
        self.latest_seq
    }

    /// Applies the completion of the request identified by `seq`.
    ///
    /// Returns `false` (and changes nothing) when `seq` is not the most
    /// recently issued request: an overlapping `refresh()` supersedes
    /// in-flight requests, and their late completions must not clobber
    /// the winner's result.
    ///
    /// On success the project list is replaced wholesale, in the order
    /// the backend returned it (an empty list is a valid result). On
    /// failure the previous list is kept: stale-but-present data is not
    /// cleared, it is merely not rendered while the error is set.
    pub fn settle(
        &mut self,
        seq: RequestSeq,
        result: Result<Vec<Project>, FetchError>,
    ) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(projects) => {
                self.projects = projects;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// The current project list (empty until the first successful fetch).
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Human-readable message of the last failed fetch, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for FetchLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u64, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: "d".to_string(),
            image: None,
            link: None,
            category: None,
            technologies: vec!["Go".to_string()],
        }
    }

    #[test]
    fn test_initial_state() {
        let state = FetchLifecycle::new();
        assert!(state.projects().is_empty());
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_success_path() {
        let mut state = FetchLifecycle::new();
        let seq = state.begin();

        assert!(state.settle(seq, Ok(vec![project(1, "A")])));
        assert_eq!(state.projects().len(), 1);
        assert_eq!(state.projects()[0].title, "A");
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_success_keeps_backend_order() {
        let mut state = FetchLifecycle::new();
        let seq = state.begin();
        state.settle(seq, Ok(vec![project(3, "C"), project(1, "A")]));

        let ids: Vec<u64> = state.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_status_failure_path() {
        let mut state = FetchLifecycle::new();
        let seq = state.begin();

        state.settle(seq, Err(FetchError::Status { status: 500 }));
        assert!(state.projects().is_empty());
        assert!(!state.is_loading());
        let message = state.error().unwrap();
        assert!(!message.is_empty());
        assert!(message.contains("500"));
    }

    #[test]
    fn test_network_failure_path_same_shape() {
        let mut state = FetchLifecycle::new();
        let seq = state.begin();

        state.settle(
            seq,
            Err(FetchError::Network {
                message: "connection refused".to_string(),
            }),
        );
        assert!(state.projects().is_empty());
        assert!(!state.is_loading());
        assert!(state.error().is_some());
    }

    #[test]
    fn test_refresh_clears_error_while_loading() {
        let mut state = FetchLifecycle::new();
        let seq = state.begin();
        state.settle(seq, Err(FetchError::Status { status: 500 }));

        // Retrying must not show stale failure text during the reload.
        state.begin();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_refresh_replaces_projects_on_success() {
        let mut state = FetchLifecycle::new();
        let seq = state.begin();
        state.settle(seq, Ok(vec![project(1, "A")]));

        let seq = state.begin();
        assert!(state.is_loading());
        state.settle(seq, Ok(vec![project(2, "B")]));

        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.projects().len(), 1);
        assert_eq!(state.projects()[0].id, 2);
    }

    #[test]
    fn test_empty_response_is_a_valid_success() {
        let mut state = FetchLifecycle::new();
        let seq = state.begin();
        state.settle(seq, Ok(vec![project(1, "A")]));

        // An empty list is distinct from never-loaded: it replaces data.
        let seq = state.begin();
        state.settle(seq, Ok(vec![]));
        assert!(state.projects().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failed_refresh_keeps_stale_data() {
        let mut state = FetchLifecycle::new();
        let seq = state.begin();
        state.settle(seq, Ok(vec![project(1, "A")]));

        let seq = state.begin();
        state.settle(seq, Err(FetchError::Status { status: 502 }));

        // The success branch is not rendered, but the data survives.
        assert_eq!(state.projects().len(), 1);
        assert!(state.error().is_some());
    }

    #[test]
    fn test_superseded_completion_is_discarded() {
        let mut state = FetchLifecycle::new();
        let first = state.begin();
        let second = state.begin();

        // The first request resolves after being superseded: ignored.
        assert!(!state.settle(first, Ok(vec![project(1, "stale")])));
        assert!(state.is_loading());
        assert!(state.projects().is_empty());

        assert!(state.settle(second, Ok(vec![project(2, "fresh")])));
        assert_eq!(state.projects()[0].id, 2);
    }

    #[test]
    fn test_stale_completion_after_winner_settled() {
        let mut state = FetchLifecycle::new();
        let first = state.begin();
        let second = state.begin();

        state.settle(second, Ok(vec![project(2, "fresh")]));

        // First request's completion arrives last; result must not flip.
        assert!(!state.settle(first, Err(FetchError::Status { status: 500 })));
        assert_eq!(state.projects()[0].id, 2);
        assert_eq!(state.error(), None);
        assert!(!state.is_loading());
    }
}
