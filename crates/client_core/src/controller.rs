//! Session orchestration: the Draw and Solve actions, their deduplication
//! and mutual-exclusion policy, and the state the presentation layer reads.

use std::sync::Arc;

use futures::future;
use shared::{
    domain::{DrawingMethod, Relation},
    protocol::{GraphPayload, PosetCoverResponse, PosetResult},
};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    notify::NotificationSink,
    service::{PosetService, ServiceError},
};

const ERROR_TITLE: &str = "Error rendering the plot";
const DUPLICATE_TITLE: &str = "Duplicate request";
const SOLVE_TITLE: &str = "Poset Cover Result";

#[derive(Debug, Error)]
pub enum ActionError {
    /// Malformed input or size/length mismatch; surfaced before any network
    /// call.
    #[error("{0}")]
    Validation(String),
    /// Identical repeat of the last successful action; informational, the
    /// network layer is untouched.
    #[error("request repeats the last successful one")]
    DuplicateRequest,
    /// Another orchestration is still in flight. Rejected without queueing.
    #[error("another request is still in flight")]
    Busy,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Parsed input for the Draw action, dispatched once at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawInput {
    LinearOrders(Vec<String>),
    Poset(Vec<Relation>),
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub loading: bool,
    pub last_draw_key: Option<Vec<String>>,
    pub last_solve_key: Option<Vec<String>>,
    pub primary_graph: Option<GraphPayload>,
    pub results: Vec<PosetResult>,
    /// Index into `results`, or -1 when nothing is highlighted.
    pub highlighted_index: isize,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            loading: false,
            last_draw_key: None,
            last_solve_key: None,
            primary_graph: None,
            results: Vec::new(),
            highlighted_index: -1,
        }
    }
}

impl SessionState {
    /// The graph the presentation should render: the highlighted result's
    /// graph when one is selected, the primary graph otherwise.
    pub fn displayed_graph(&self) -> Option<&GraphPayload> {
        if self.highlighted_index >= 0 {
            self.results
                .get(self.highlighted_index as usize)
                .map(|result| &result.graph_data)
        } else {
            self.primary_graph.as_ref()
        }
    }
}

/// Normalized request key: trimmed items, compared element-wise against the
/// previous action's key. Independent of session state.
pub fn request_key<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.as_ref().trim().to_owned())
        .collect()
}

fn relation_key(relations: &[Relation]) -> Vec<String> {
    relations.iter().map(Relation::to_string).collect()
}

fn size_mismatch(size: usize, lines: &[String]) -> Option<String> {
    let first = lines.first()?;
    let length = first.chars().count();
    (length != size).then(|| {
        format!(
            "Indicated linear order length ({size}) is not equal to the length of the given linear orders, e.g. '{first}'."
        )
    })
}

enum SolveOutcome {
    NoSolution,
    Solved {
        primary: Option<GraphPayload>,
        results: Vec<PosetResult>,
    },
}

pub struct SessionController {
    service: Arc<dyn PosetService>,
    notifier: Arc<dyn NotificationSink>,
    state: Mutex<SessionState>,
}

impl SessionController {
    pub fn new(service: Arc<dyn PosetService>, notifier: Arc<dyn NotificationSink>) -> Arc<Self> {
        Arc::new(Self {
            service,
            notifier,
            state: Mutex::new(SessionState::default()),
        })
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }

    /// Toggle highlight of result `index`: re-selecting the current index
    /// clears the highlight, any other index replaces it (single-select).
    /// Out-of-range indices are ignored. Returns the new highlighted index.
    pub async fn set_highlighted(&self, index: usize) -> isize {
        let mut state = self.state.lock().await;
        if index >= state.results.len() {
            return state.highlighted_index;
        }
        let index = index as isize;
        state.highlighted_index = if state.highlighted_index == index {
            -1
        } else {
            index
        };
        state.highlighted_index
    }

    /// Draws the primary graph for the current input.
    ///
    /// Rejected while another action is in flight; a repeat of the last
    /// successful draw is a no-op surfaced as a toast. Service failures are
    /// converted into an error notification; the previous graph, if any,
    /// stays untouched.
    pub async fn draw(
        &self,
        size: usize,
        drawing_method: DrawingMethod,
        input: DrawInput,
    ) -> Result<(), ActionError> {
        let key = match &input {
            DrawInput::LinearOrders(lines) => request_key(lines),
            DrawInput::Poset(relations) => relation_key(relations),
        };

        {
            let mut state = self.state.lock().await;
            if state.loading {
                return Err(ActionError::Busy);
            }
            if let DrawInput::LinearOrders(lines) = &input {
                if let Some(message) = size_mismatch(size, lines) {
                    self.notifier.show_error(ERROR_TITLE, &message);
                    return Err(ActionError::Validation(message));
                }
            }
            if state.last_draw_key.as_deref() == Some(key.as_slice()) {
                self.notifier
                    .show_toast(DUPLICATE_TITLE, "This input is already drawn.");
                return Err(ActionError::DuplicateRequest);
            }
            state.loading = true;
            state.results.clear();
            state.highlighted_index = -1;
        }

        let fetched = match &input {
            DrawInput::LinearOrders(lines) => {
                self.service
                    .draw_graph(size, drawing_method, lines.clone(), Vec::new())
                    .await
            }
            DrawInput::Poset(relations) => {
                self.service
                    .draw_graph_from_cover_relation(size, drawing_method, relations.clone())
                    .await
            }
        };

        let mut state = self.state.lock().await;
        state.loading = false;
        match fetched {
            Ok(graph) => {
                state.primary_graph = Some(graph);
                state.last_draw_key = Some(key);
                info!(size, "draw: primary graph updated");
                Ok(())
            }
            Err(err) => {
                drop(state);
                warn!(error = %err, "draw: graph request failed");
                self.notifier.show_error(ERROR_TITLE, &err.to_string());
                Err(ActionError::Service(err))
            }
        }
    }

    /// Solves for an optimal k-poset cover of `upsilon` and resolves one
    /// dependent drawing per returned candidate.
    ///
    /// Solve guarantees a primary drawing exists for the current input,
    /// issuing it only if absent. The dependent drawings are a fan-out with
    /// a join barrier: all are started together and a single failure
    /// discards the entire batch.
    pub async fn solve(
        &self,
        size: usize,
        drawing_method: DrawingMethod,
        k: usize,
        upsilon: Vec<String>,
    ) -> Result<(), ActionError> {
        let key = request_key(&upsilon);

        let needs_primary_draw;
        {
            let mut state = self.state.lock().await;
            if state.loading {
                return Err(ActionError::Busy);
            }
            if let Some(message) = size_mismatch(size, &upsilon) {
                self.notifier.show_error(ERROR_TITLE, &message);
                return Err(ActionError::Validation(message));
            }
            if state.last_solve_key.as_deref() == Some(key.as_slice()) {
                self.notifier
                    .show_toast(DUPLICATE_TITLE, "This input is already solved.");
                return Err(ActionError::DuplicateRequest);
            }
            needs_primary_draw = state.primary_graph.is_none()
                || state.last_draw_key.as_deref() != Some(key.as_slice());
            state.loading = true;
            state.results.clear();
            state.highlighted_index = -1;
        }

        let outcome = self
            .run_solve(size, drawing_method, k, &key, needs_primary_draw)
            .await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match outcome {
            Ok(SolveOutcome::NoSolution) => {
                drop(state);
                info!(k, "solve: no cover found");
                self.notifier.show_toast(SOLVE_TITLE, "No result found.");
                Ok(())
            }
            Ok(SolveOutcome::Solved { primary, results }) => {
                info!(k, results = results.len(), "solve: cover resolved");
                if let Some(graph) = primary {
                    state.primary_graph = Some(graph);
                    state.last_draw_key = Some(key.clone());
                }
                state.results = results;
                state.last_solve_key = Some(key);
                Ok(())
            }
            Err(err) => {
                drop(state);
                warn!(error = %err, "solve: orchestration failed");
                self.notifier.show_error(ERROR_TITLE, &err.to_string());
                Err(ActionError::Service(err))
            }
        }
    }

    async fn run_solve(
        &self,
        size: usize,
        drawing_method: DrawingMethod,
        k: usize,
        upsilon: &[String],
        needs_primary_draw: bool,
    ) -> Result<SolveOutcome, ServiceError> {
        let Some(response) = self
            .service
            .solve_k_poset_cover(k, upsilon.to_vec())
            .await?
        else {
            return Ok(SolveOutcome::NoSolution);
        };

        let PosetCoverResponse {
            result_posets,
            result_linear_orders,
        } = response;

        if result_posets.len() != result_linear_orders.len() {
            return Err(ServiceError::Malformed(format!(
                "solver returned {} posets for {} linear extension sets",
                result_posets.len(),
                result_linear_orders.len()
            )));
        }

        let primary = if needs_primary_draw {
            Some(
                self.service
                    .draw_graph(size, drawing_method, upsilon.to_vec(), Vec::new())
                    .await?,
            )
        } else {
            None
        };

        let pending = result_linear_orders.iter().map(|extensions| {
            self.service
                .draw_graph(size, drawing_method, upsilon.to_vec(), extensions.clone())
        });

        // Join barrier: every dependent request runs to completion before the
        // first failure is propagated for the whole batch.
        let mut graphs = Vec::with_capacity(result_linear_orders.len());
        for resolved in future::join_all(pending).await {
            graphs.push(resolved?);
        }

        let results = result_posets
            .into_iter()
            .zip(result_linear_orders)
            .zip(graphs)
            .enumerate()
            .map(|(index, ((relations, linear_extensions), graph_data))| PosetResult {
                name: format!("P{}", index + 1),
                relations,
                linear_extensions,
                graph_data,
            })
            .collect();

        Ok(SolveOutcome::Solved { primary, results })
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
