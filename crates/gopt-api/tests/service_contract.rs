use std::collections::BTreeMap;
use std::sync::Arc;

use gopt_api::{ColoringRequest, GraphOptService, MaxFlowRequest};
use gopt_solver::default_backend;
use serde_json::json;

const TOLERANCE: f64 = 1e-6;

fn service() -> GraphOptService {
    GraphOptService::with_defaults(default_backend())
}

fn diamond_request() -> MaxFlowRequest {
    MaxFlowRequest {
        graph: vec![(0, 1), (1, 2), (0, 2)],
        capacities: BTreeMap::from([
            ("0,1".to_string(), 10.0),
            ("1,2".to_string(), 5.0),
            ("0,2".to_string(), 15.0),
        ]),
        source: 0,
        sink: 2,
    }
}

#[test]
fn max_flow_round_trips_the_wire_format() {
    let response = service().max_flow(&diamond_request()).unwrap();
    assert!((response.max_flow - 20.0).abs() < TOLERANCE);
    assert!((response.flows["1,2"] - 5.0).abs() < TOLERANCE);
    assert_eq!(response.flows.len(), 3);
}

#[test]
fn max_flow_request_parses_frontend_payloads() {
    let payload = json!({
        "graph": [[0, 1], [1, 2], [0, 2]],
        "capacities": {"0,1": 10.0, "1,2": 5.0, "0,2": 15.0},
        "source": 0,
        "sink": 2
    });
    let request: MaxFlowRequest = serde_json::from_value(payload).unwrap();
    assert_eq!(request, diamond_request());
}

#[test]
fn coloring_answers_with_camel_case_fields() {
    let request = ColoringRequest {
        adjacency_matrix: vec![
            vec![0, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 0],
        ],
    };
    let response = service().color_graph(&request).unwrap();
    assert_eq!(response.chromatic_number, 3);
    assert_eq!(response.colored_graph.len(), 3);
    assert!(response.colored_graph.iter().all(Option::is_some));

    let wire = serde_json::to_value(&response).unwrap();
    assert_eq!(wire["chromaticNumber"], 3);
    assert!(wire["coloredGraph"].is_array());
}

#[test]
fn coloring_request_uses_camel_case_field() {
    let payload = json!({"adjacencyMatrix": [[0, 1], [1, 0]]});
    let request: ColoringRequest = serde_json::from_value(payload).unwrap();
    let response = service().color_graph(&request).unwrap();
    assert_eq!(response.chromatic_number, 2);
}

#[test]
fn empty_matrix_colors_to_zero() {
    let request = ColoringRequest {
        adjacency_matrix: Vec::new(),
    };
    let response = service().color_graph(&request).unwrap();
    assert_eq!(response.chromatic_number, 0);
    assert!(response.colored_graph.is_empty());
}

#[test]
fn disconnected_max_flow_is_zero_not_an_error() {
    let request = MaxFlowRequest {
        graph: vec![(0, 1), (2, 3)],
        capacities: BTreeMap::from([
            ("0,1".to_string(), 4.0),
            ("2,3".to_string(), 4.0),
        ]),
        source: 0,
        sink: 3,
    };
    let response = service().max_flow(&request).unwrap();
    assert!(response.max_flow.abs() < TOLERANCE);
}

#[test]
fn identical_requests_share_a_fingerprint() {
    let a = gopt_api::stable_hash_string(&diamond_request()).unwrap();
    let b = gopt_api::stable_hash_string(&diamond_request()).unwrap();
    assert_eq!(a, b);

    let mut other = diamond_request();
    other.sink = 1;
    assert_ne!(a, gopt_api::stable_hash_string(&other).unwrap());
}

#[test]
fn health_reports_the_backend() {
    let service = GraphOptService::with_defaults(Arc::new(gopt_solver::MicrolpBackend::new()));
    let health = service.health();
    assert_eq!(health.status, "graph-opt service is running");
    assert_eq!(health.backend, "microlp");
}

#[test]
fn one_service_serves_both_pipelines_repeatedly() {
    let service = service();
    let flow_first = service.max_flow(&diamond_request()).unwrap();
    let coloring = service
        .color_graph(&ColoringRequest {
            adjacency_matrix: vec![vec![0, 1], vec![1, 0]],
        })
        .unwrap();
    let flow_second = service.max_flow(&diamond_request()).unwrap();

    assert_eq!(coloring.chromatic_number, 2);
    assert!((flow_first.max_flow - flow_second.max_flow).abs() < TOLERANCE);
}
