//! Integration tests for the directions client (wiremock-based)

use domain::LocalTimezone;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, GoogleDirectionsClient,
    extract_trip_summary,
};

const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

fn config_for_mock(base_url: &str) -> DirectionsConfig {
    DirectionsConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

const fn sample_directions_json() -> &'static str {
    r#"{
        "status": "OK",
        "geocoded_waypoints": [],
        "routes": [{
            "summary": "",
            "legs": [{
                "departure_time": { "text": "9:05 AM", "time_zone": "America/Toronto", "value": 1719839100 },
                "arrival_time": { "text": "9:40 AM", "time_zone": "America/Toronto", "value": 1719841200 },
                "duration": { "text": "35 mins", "value": 2100 },
                "start_address": "Union Station, Toronto, ON",
                "end_address": "Yonge St & Eglinton Ave, Toronto, ON",
                "steps": [
                    {
                        "travel_mode": "WALKING",
                        "duration": { "text": "4 mins", "value": 240 }
                    },
                    {
                        "travel_mode": "TRANSIT",
                        "duration": { "text": "8 mins", "value": 480 },
                        "transit_details": {
                            "departure_time": { "text": "9:20 AM", "value": 1719840000 },
                            "departure_stop": { "name": "King St West" },
                            "line": { "short_name": "504", "name": "King" }
                        }
                    },
                    {
                        "travel_mode": "TRANSIT",
                        "duration": { "text": "6 mins", "value": 360 },
                        "transit_details": {
                            "departure_time": { "text": "9:12 AM", "value": 1719839520 },
                            "departure_stop": { "name": "Main St" },
                            "line": { "short_name": "512", "name": "St Clair" }
                        }
                    }
                ]
            }]
        }]
    }"#
}

#[tokio::test]
async fn test_directions_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .and(query_param("origin", "Union Station"))
        .and(query_param("destination", "Yonge & Eglinton"))
        .and(query_param("mode", "transit"))
        .and(query_param("departure_time", "now"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();

    let response = client
        .directions("Union Station", "Yonge & Eglinton", "test-key")
        .await
        .unwrap();

    assert_eq!(response.routes.len(), 1);
    let summary = extract_trip_summary(&response, LocalTimezone::TORONTO).unwrap();
    assert_eq!(summary.trip_duration(), "35 mins");

    let options = summary.options();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].transit_line, "512");
    assert_eq!(options[0].transit_departure, "9:12 AM");
    assert_eq!(options[1].transit_line, "504");
    assert_eq!(options[1].station_name, "King St West");
    assert!(options.iter().all(|o| o.leave_from_time == "9:05 AM"));
}

#[tokio::test]
async fn test_directions_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.directions("A", "B", "k").await.unwrap_err();
    assert!(matches!(
        err,
        DirectionsError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
}

#[tokio::test]
async fn test_directions_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.directions("A", "B", "k").await.unwrap_err();
    assert!(matches!(err, DirectionsError::RequestFailed(_)));
}

#[tokio::test]
async fn test_directions_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.directions("A", "B", "k").await.unwrap_err();
    assert!(matches!(err, DirectionsError::ParseError(_)));
}

#[tokio::test]
async fn test_directions_request_denied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "routes": [] }"#,
        ))
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.directions("A", "B", "bad").await.unwrap_err();
    assert!(err.to_string().contains("REQUEST_DENIED"));
}

#[tokio::test]
async fn test_zero_results_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DIRECTIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{ "status": "ZERO_RESULTS", "routes": [] }"#),
        )
        .mount(&server)
        .await;

    let client = GoogleDirectionsClient::new(&config_for_mock(&server.uri())).unwrap();

    let response = client.directions("A", "B", "k").await.unwrap();
    assert!(response.routes.is_empty());
    assert!(extract_trip_summary(&response, LocalTimezone::TORONTO).is_none());
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on port 9 (discard) in the test environment
    let client = GoogleDirectionsClient::new(&config_for_mock("http://127.0.0.1:9")).unwrap();

    let err = client.directions("A", "B", "k").await.unwrap_err();
    assert!(matches!(
        err,
        DirectionsError::ConnectionFailed(_) | DirectionsError::Timeout { .. }
    ));
}
