//! Unit tests for shot queries

use super::*;
use crate::error::ShotChartError;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const HEADERS: [&str; 21] = [
    "GRID_TYPE",
    "GAME_ID",
    "GAME_EVENT_ID",
    "PLAYER_ID",
    "PLAYER_NAME",
    "TEAM_ID",
    "TEAM_NAME",
    "PERIOD",
    "MINUTES_REMAINING",
    "SECONDS_REMAINING",
    "EVENT_TYPE",
    "ACTION_TYPE",
    "SHOT_TYPE",
    "SHOT_ZONE_BASIC",
    "SHOT_ZONE_AREA",
    "SHOT_ZONE_RANGE",
    "SHOT_DISTANCE",
    "LOC_X",
    "LOC_Y",
    "SHOT_ATTEMPTED_FLAG",
    "SHOT_MADE_FLAG",
];

/// (x, y, distance, made, period)
fn shot_row(player_id: i64, shot: (f64, f64, f64, u8, u8)) -> Value {
    let (x, y, distance, made, period) = shot;
    let event = if made == 1 { "Made Shot" } else { "Missed Shot" };
    json!([
        "Shot Chart Detail", "0021400001", 7, player_id, "Test Player", 1610612745,
        "Houston Rockets", period, 10, 30, event,
        "Jump Shot", "2PT Field Goal", "Mid-Range", "Center(C)", "8-16 ft.",
        distance, x, y, 1, made
    ])
}

fn shot_response(rows: Vec<Value>) -> Value {
    json!({
        "resource": "shotchart",
        "parameters": {},
        "resultSets": [
            { "name": "Shot_Chart_Detail", "headers": HEADERS, "rowSet": rows },
            { "name": "LeagueAverages", "headers": [], "rowSet": [] }
        ]
    })
}

fn service_for(server: &MockServer) -> ShotService {
    let config = Config::default()
        .with_base_url(format!("{}/stats", server.uri()))
        .unwrap();
    ShotService::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_shots_for_player_builds_fixed_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .and(query_param("PlayerID", "201935"))
        .and(query_param("TeamID", "0"))
        .and(query_param("ContextMeasure", "FGA"))
        .and(query_param("LeagueID", "00"))
        .and(query_param("StartPeriod", "1"))
        .and(query_param("EndPeriod", "10"))
        .and(query_param("EndRange", "28800"))
        .and(query_param("Season", "2014-15"))
        .and(query_param("SeasonType", "Regular Season"))
        .and(query_param("VsConference", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(shot_response(vec![
            shot_row(201935, (-64.0, 33.0, 7.0, 1, 2)),
            shot_row(201935, (150.0, 210.0, 25.0, 0, 4)),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let shots = service.shots_for_player(PlayerId::new(201935)).await.unwrap();

    assert_eq!(shots.len(), 2);
    assert_eq!(
        shots[0],
        ShotRecord {
            location_x: -64,
            location_y: 33,
            shot_distance: 7,
            shot_made: 1,
            period: 2,
        }
    );
    assert_eq!(shots[1].shot_made, 0);
}

#[tokio::test]
async fn test_invalid_player_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    for id in [0, -1, -201935] {
        let err = service.shots_for_player(PlayerId::new(id)).await.unwrap_err();
        assert!(err.is_validation(), "expected validation error for {id}");
    }
}

#[tokio::test]
async fn test_invalid_team_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service.shots_for_team(TeamId::new(0), "2014-15").await.unwrap_err();
    match err {
        ShotChartError::Validation { field, value } => {
            assert_eq!(field, "team id");
            assert_eq!(value, 0);
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_row_set_is_empty_vec() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shot_response(vec![])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let shots = service.shots_for_player(PlayerId::new(1627732)).await.unwrap();
    assert!(shots.is_empty());
}

#[tokio::test]
async fn test_malformed_rows_are_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shot_response(vec![
            shot_row(201935, (1.0, 2.0, 0.0, 1, 1)),
            json!(["Shot Chart Detail", "0021400001"]),
            shot_row(201935, (3.0, 4.0, 0.0, 0, 1)),
        ])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let shots = service.shots_for_player(PlayerId::new(201935)).await.unwrap();
    assert_eq!(shots.len(), 2);
    assert_eq!(shots[1].location_x, 3);
}

#[tokio::test]
async fn test_team_blank_season_uses_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .and(query_param("TeamID", "1610612745"))
        .and(query_param("PlayerID", "0"))
        .and(query_param("Season", "2014-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shot_response(vec![shot_row(
            201935,
            (0.0, 0.0, 0.0, 1, 1),
        )])))
        .expect(2)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let team = TeamId::new(1610612745);
    let blank = service.shots_for_team(team, "").await.unwrap();
    let explicit = service
        .shots_for_team(team, service.default_season().as_str())
        .await
        .unwrap();
    assert_eq!(blank, explicit);
}

#[tokio::test]
async fn test_player_playoffs_in_other_season() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .and(query_param("Season", "2017-18"))
        .and(query_param("SeasonType", "Playoffs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shot_response(vec![shot_row(
            201935,
            (-220.0, 40.0, 22.0, 1, 3),
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let shots = service
        .shots_for_player_in(PlayerId::new(201935), "2017-18", SeasonType::Playoffs)
        .await
        .unwrap();
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].shot_distance, 22);
}

#[tokio::test]
async fn test_remote_failures_surface_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .and(query_param("PlayerID", "1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .and(query_param("PlayerID", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Access Denied"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    assert!(matches!(
        service.shots_for_player(PlayerId::new(1)).await,
        Err(ShotChartError::Status { code: 503, .. })
    ));
    assert!(matches!(
        service.shots_for_player(PlayerId::new(2)).await,
        Err(ShotChartError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_concurrent_players_do_not_mix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .and(query_param("PlayerID", "201935"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shot_response(vec![
            shot_row(201935, (-64.0, 33.0, 7.0, 1, 2)),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .and(query_param("PlayerID", "2544"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shot_response(vec![
            shot_row(2544, (10.0, 5.0, 1.0, 1, 1)),
            shot_row(2544, (12.0, 6.0, 1.0, 0, 1)),
        ])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let (harden, lebron) = tokio::join!(
        service.shots_for_player(PlayerId::new(201935)),
        service.shots_for_player(PlayerId::new(2544))
    );

    let harden = harden.unwrap();
    let lebron = lebron.unwrap();
    assert_eq!(harden.len(), 1);
    assert_eq!(harden[0].location_x, -64);
    assert_eq!(lebron.len(), 2);
    assert!(lebron.iter().all(|s| s.location_x >= 10));
}

#[tokio::test]
async fn test_shots_for_player_named_resolves_through_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/commonallplayers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSets": [{
                "name": "CommonAllPlayers",
                "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST"],
                "rowSet": [[2544, "LeBron James"]]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .and(query_param("PlayerID", "2544"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shot_response(vec![
            shot_row(2544, (10.0, 5.0, 1.0, 1, 1)),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let (id, shots) = service.shots_for_player_named("LeBron James").await.unwrap();
    assert_eq!(id, PlayerId(2544));
    assert_eq!(shots.len(), 1);
}

#[tokio::test]
async fn test_team_playoffs_season_type_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/shotchartdetail"))
        .and(query_param("TeamID", "1610612744"))
        .and(query_param("PlayerID", "0"))
        .and(query_param("Season", "2014-15"))
        .and(query_param("SeasonType", "Playoffs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shot_response(vec![shot_row(
            201939,
            (-230.0, 60.0, 24.0, 1, 4),
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let shots = service
        .shots_for_team_in(TeamId::new(1610612744), "", SeasonType::Playoffs)
        .await
        .unwrap();
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].shot_distance, 24);
}
