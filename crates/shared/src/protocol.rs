use serde::{Deserialize, Serialize};

use crate::domain::{DrawingMethod, InputMode, Relation};

/// Body of a `POST /graph` request. The service dispatches on `input_mode`:
/// Linear Orders requests carry node selections, Poset requests carry the
/// cover relation instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphRequest {
    pub input_mode: InputMode,
    pub drawing_method: DrawingMethod,
    pub size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_nodes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted_nodes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_relation: Option<Vec<Relation>>,
}

impl GraphRequest {
    pub fn linear_orders(
        size: usize,
        drawing_method: DrawingMethod,
        selected_nodes: Vec<String>,
        highlighted_nodes: Vec<String>,
    ) -> Self {
        Self {
            input_mode: InputMode::LinearOrders,
            drawing_method,
            size,
            selected_nodes: Some(selected_nodes),
            highlighted_nodes: Some(highlighted_nodes),
            cover_relation: None,
        }
    }

    pub fn cover_relation(
        size: usize,
        drawing_method: DrawingMethod,
        cover_relation: Vec<Relation>,
    ) -> Self {
        Self {
            input_mode: InputMode::Poset,
            drawing_method,
            size,
            selected_nodes: None,
            highlighted_nodes: None,
            cover_relation: Some(cover_relation),
        }
    }
}

/// Opaque visualization document produced by the service. Carried through to
/// the presentation layer verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphPayload(pub serde_json::Value);

impl GraphPayload {
    /// Labels of the "Permutations" trace, when the payload carries one.
    ///
    /// This is the only lookup the client performs inside the payload: a
    /// Poset-mode drawing lists the poset's linear extensions there, and the
    /// surface may feed them back into a solve.
    pub fn permutation_labels(&self) -> Option<Vec<String>> {
        let traces = self.0.get("data")?.as_array()?;
        let trace = traces
            .iter()
            .find(|trace| trace.get("name").and_then(|name| name.as_str()) == Some("Permutations"))?;
        trace
            .get("text")?
            .as_array()?
            .iter()
            .map(|label| label.as_str().map(str::to_owned))
            .collect()
    }
}

/// Successful body of a `GET /solve` call. An empty JSON object on the wire
/// means the solver found no cover; callers see that as `None` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosetCoverResponse {
    pub result_posets: Vec<Vec<Relation>>,
    pub result_linear_orders: Vec<Vec<String>>,
}

/// One solved poset, assembled client-side from the solver response and the
/// dependent graph request for its linear extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosetResult {
    pub name: String,
    pub relations: Vec<Relation>,
    pub linear_extensions: Vec<String>,
    pub graph_data: GraphPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn linear_orders_request_serializes_wire_names() {
        let request = GraphRequest::linear_orders(
            4,
            DrawingMethod::SuperHex,
            vec!["1234".to_string(), "4321".to_string()],
            vec![],
        );

        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            body,
            json!({
                "input_mode": "Linear Orders",
                "drawing_method": "SuperHex",
                "size": 4,
                "selected_nodes": ["1234", "4321"],
                "highlighted_nodes": [],
            })
        );
    }

    #[test]
    fn cover_relation_request_serializes_pairs_as_arrays() {
        let request = GraphRequest::cover_relation(
            4,
            DrawingMethod::Default,
            vec![Relation(1, 2), Relation(2, 3)],
        );

        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            body,
            json!({
                "input_mode": "Poset",
                "drawing_method": "Default",
                "size": 4,
                "cover_relation": [[1, 2], [2, 3]],
            })
        );
    }

    #[test]
    fn poset_cover_response_reads_camel_case_keys() {
        let response: PosetCoverResponse = serde_json::from_value(json!({
            "resultPosets": [[[1, 2]], [[2, 1]]],
            "resultLinearOrders": [["1234", "1243"], ["2134"]],
        }))
        .expect("deserialize");

        assert_eq!(response.result_posets[0], vec![Relation(1, 2)]);
        assert_eq!(response.result_linear_orders[1], vec!["2134".to_string()]);
    }

    #[test]
    fn permutation_labels_reads_the_permutations_trace() {
        let payload = GraphPayload(json!({
            "data": [
                {"name": "Edges", "text": ["ignored"]},
                {"name": "Permutations", "text": ["1234", "1243"]},
            ],
            "layout": {},
        }));

        assert_eq!(
            payload.permutation_labels(),
            Some(vec!["1234".to_string(), "1243".to_string()])
        );
    }

    #[test]
    fn permutation_labels_is_none_without_the_trace() {
        let payload = GraphPayload(json!({"data": [], "layout": {}}));
        assert_eq!(payload.permutation_labels(), None);
    }
}
