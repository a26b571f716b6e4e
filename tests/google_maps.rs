use axum::{http::StatusCode, routing::get, Router};
use uuid::Uuid;

use tranxporter::config::GoogleMapsConfig;
use tranxporter::entities::Coordinates;
use tranxporter::external::{AutocompleteRequest, GoogleMaps, PlacesProvider, RoutingProvider};

const AUTOCOMPLETE: &str = "/maps/api/place/autocomplete/json";
const DETAILS: &str = "/maps/api/place/details/json";
const DIRECTIONS: &str = "/maps/api/directions/json";

/// Serve a fixed response on `path` and point a client at it.
async fn stub(path: &'static str, status: StatusCode, body: &'static str) -> GoogleMaps {
    let app = Router::new().route(path, get(move || async move { (status, body) }));

    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap())
        .serve(app.into_make_service());
    let addr = server.local_addr();

    tokio::spawn(server);

    let config = GoogleMapsConfig::new("test-key").with_api_base(format!("http://{}/", addr));
    GoogleMaps::new(config).unwrap()
}

fn request(input: &str) -> AutocompleteRequest {
    AutocompleteRequest {
        input: input.into(),
        session_token: Uuid::new_v4(),
        country: "in".into(),
        types: None,
        bias: None,
        origin: None,
    }
}

fn coords(lat: f64, lng: f64) -> Coordinates {
    Coordinates::new(lat, lng).unwrap()
}

#[tokio::test]
async fn client_error_status_is_invalid_input() {
    let maps = stub(AUTOCOMPLETE, StatusCode::BAD_REQUEST, "{}").await;

    let err = maps.autocomplete(request("airport")).await.unwrap_err();
    assert_eq!(err.code, 101);
}

#[tokio::test]
async fn server_error_status_is_upstream() {
    let maps = stub(AUTOCOMPLETE, StatusCode::SERVICE_UNAVAILABLE, "{}").await;

    let err = maps.autocomplete(request("airport")).await.unwrap_err();
    assert_eq!(err.code, 4);
}

#[tokio::test]
async fn zero_results_is_an_empty_list() {
    let maps = stub(AUTOCOMPLETE, StatusCode::OK, r#"{"status": "ZERO_RESULTS"}"#).await;

    let predictions = maps.autocomplete(request("qwxz")).await.unwrap();
    assert!(predictions.is_empty());
}

#[tokio::test]
async fn autocomplete_predictions_are_mapped() {
    let body = r#"{
        "status": "OK",
        "predictions": [{
            "place_id": "kia",
            "description": "Kempegowda International Airport, Bengaluru",
            "structured_formatting": {
                "main_text": "Kempegowda International Airport",
                "secondary_text": "Bengaluru"
            },
            "types": ["airport"],
            "distance_meters": 31000
        }]
    }"#;
    let maps = stub(AUTOCOMPLETE, StatusCode::OK, body).await;

    let predictions = maps.autocomplete(request("airport")).await.unwrap();

    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].place_id, "kia");
    assert_eq!(predictions[0].primary_text, "Kempegowda International Airport");
    assert_eq!(predictions[0].distance_meters, Some(31000));
}

#[tokio::test]
async fn autocomplete_error_status_is_upstream() {
    let maps = stub(AUTOCOMPLETE, StatusCode::OK, r#"{"status": "OVER_QUERY_LIMIT"}"#).await;

    let err = maps.autocomplete(request("airport")).await.unwrap_err();
    assert_eq!(err.code, 4);
}

#[tokio::test]
async fn details_are_read_from_result() {
    let body = r#"{
        "status": "OK",
        "result": {
            "formatted_address": "KIAL Rd, Devanahalli",
            "geometry": { "location": { "lat": 13.1986, "lng": 77.7066 } }
        }
    }"#;
    let maps = stub(DETAILS, StatusCode::OK, body).await;

    let details = maps.place_details("kia", Uuid::new_v4()).await.unwrap();

    assert_eq!(details.coordinates, coords(13.1986, 77.7066));
    assert_eq!(details.address, "KIAL Rd, Devanahalli");
}

#[tokio::test]
async fn details_without_ok_status_are_upstream() {
    let maps = stub(DETAILS, StatusCode::OK, r#"{"status": "ZERO_RESULTS"}"#).await;

    let err = maps.place_details("gone", Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.code, 4);
}

#[tokio::test]
async fn directions_take_the_first_leg() {
    let body = r#"{
        "status": "OK",
        "routes": [{
            "legs": [{
                "distance": { "text": "34.2 km", "value": 34210 },
                "duration": { "text": "52 mins", "value": 3120 }
            }],
            "overview_polyline": { "points": "_p~iF~ps|U" }
        }]
    }"#;
    let maps = stub(DIRECTIONS, StatusCode::OK, body).await;

    let directions = maps
        .directions(coords(12.9716, 77.5946), coords(13.1986, 77.7066))
        .await
        .unwrap();

    assert_eq!(directions.distance_meters, 34210);
    assert_eq!(directions.duration_text, "52 mins");
    assert_eq!(directions.polyline, "_p~iF~ps|U");
}

#[tokio::test]
async fn directions_without_ok_status_are_upstream() {
    let maps = stub(DIRECTIONS, StatusCode::OK, r#"{"status": "NOT_FOUND", "routes": []}"#).await;

    let err = maps
        .directions(coords(12.9716, 77.5946), coords(13.1986, 77.7066))
        .await
        .unwrap_err();
    assert_eq!(err.code, 4);
}
