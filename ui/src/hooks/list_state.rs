//! View-model for a fetched, paginated collection.
//!
//! Each list page drives one of these through a reducer so every state
//! transition is explicit: `Idle -> Loading -> Success | Error`, re-entered
//! whenever a filter, page or search dependency changes. Rows and total
//! are replaced together on success; a failed fetch keeps the last good
//! rows and surfaces the error alongside them.
//!
//! Responses carry the generation of the request that produced them and
//! are dropped unless that generation is still current, so a slow, stale
//! response can never overwrite the result of a newer fetch.

use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub total: i64,
    pub phase: ListPhase,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            phase: ListPhase::Idle,
            error: None,
            generation: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// True until the first fetch has settled.
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading() && self.rows.is_empty() && self.error.is_none()
    }
}

pub enum ListAction<T> {
    FetchStarted { generation: u64 },
    Loaded { generation: u64, rows: Vec<T>, total: i64 },
    Failed { generation: u64, message: String },
}

impl<T: Clone> Reducible for ListState<T> {
    type Action = ListAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ListAction::FetchStarted { generation } => Rc::new(Self {
                rows: self.rows.clone(),
                total: self.total,
                phase: ListPhase::Loading,
                error: None,
                generation,
            }),
            ListAction::Loaded {
                generation,
                rows,
                total,
            } if generation == self.generation => Rc::new(Self {
                rows,
                total,
                phase: ListPhase::Success,
                error: None,
                generation,
            }),
            ListAction::Failed {
                generation,
                message,
            } if generation == self.generation => Rc::new(Self {
                rows: self.rows.clone(),
                total: self.total,
                phase: ListPhase::Error,
                error: Some(message),
                generation,
            }),
            // A response for a superseded request: ignore it.
            ListAction::Loaded { .. } | ListAction::Failed { .. } => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(
        state: ListState<&'static str>,
        action: ListAction<&'static str>,
    ) -> ListState<&'static str> {
        Rc::unwrap_or_clone(Rc::new(state).reduce(action))
    }

    #[test]
    fn success_replaces_rows_and_total_atomically() {
        let state = reduce(
            ListState::default(),
            ListAction::FetchStarted { generation: 1 },
        );
        assert_eq!(state.phase, ListPhase::Loading);

        let state = reduce(
            state,
            ListAction::Loaded {
                generation: 1,
                rows: vec!["a", "b"],
                total: 10,
            },
        );
        assert_eq!(state.phase, ListPhase::Success);
        assert_eq!(state.rows, vec!["a", "b"]);
        assert_eq!(state.total, 10);
    }

    #[test]
    fn failure_keeps_last_good_rows() {
        let mut state = reduce(
            ListState::default(),
            ListAction::FetchStarted { generation: 1 },
        );
        state = reduce(
            state,
            ListAction::Loaded {
                generation: 1,
                rows: vec!["a"],
                total: 1,
            },
        );
        state = reduce(state, ListAction::FetchStarted { generation: 2 });
        state = reduce(
            state,
            ListAction::Failed {
                generation: 2,
                message: "boom".into(),
            },
        );

        assert_eq!(state.phase, ListPhase::Error);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(state.rows, vec!["a"]);
        assert_eq!(state.total, 1);
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = reduce(
            ListState::default(),
            ListAction::FetchStarted { generation: 1 },
        );
        // A newer request supersedes the first before it resolves.
        state = reduce(state, ListAction::FetchStarted { generation: 2 });

        // The older response arrives late and must not apply.
        state = reduce(
            state,
            ListAction::Loaded {
                generation: 1,
                rows: vec!["stale"],
                total: 99,
            },
        );
        assert_eq!(state.phase, ListPhase::Loading);
        assert!(state.rows.is_empty());

        // The current response lands normally.
        state = reduce(
            state,
            ListAction::Loaded {
                generation: 2,
                rows: vec!["fresh"],
                total: 1,
            },
        );
        assert_eq!(state.rows, vec!["fresh"]);
    }

    #[test]
    fn stale_failure_does_not_clobber_fresh_rows() {
        let mut state = reduce(
            ListState::default(),
            ListAction::FetchStarted { generation: 1 },
        );
        state = reduce(state, ListAction::FetchStarted { generation: 2 });
        state = reduce(
            state,
            ListAction::Loaded {
                generation: 2,
                rows: vec!["fresh"],
                total: 1,
            },
        );
        state = reduce(
            state,
            ListAction::Failed {
                generation: 1,
                message: "late failure".into(),
            },
        );

        assert_eq!(state.phase, ListPhase::Success);
        assert_eq!(state.error, None);
        assert_eq!(state.rows, vec!["fresh"]);
    }
}
