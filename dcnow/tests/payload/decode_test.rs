#[path = "../common/mod.rs"]
mod common;

use dcnow::payload::decode;

#[test]
fn sample_body_decodes_fully() {
    let status = decode(common::fixtures::sample_body().as_bytes()).unwrap();
    assert_eq!(status.total_players, 15);
    assert_eq!(status.game_count, 3);

    let games = status.games();
    assert_eq!(games[0].name, "Phantasy Star Online");
    assert_eq!(games[0].short_code, "PSO");
    assert_eq!(games[0].display_name(), "PSO");
    assert_eq!(games[0].player_count, 12);

    assert_eq!(games[1].name, "Quake III Arena");
    assert!(games[1].short_code.is_empty());
    assert_eq!(games[1].display_name(), "Quake III Arena");
    assert!(!games[1].is_active());

    assert_eq!(games[2].player_count, 2);
}

#[test]
fn whitespace_heavy_body_decodes() {
    let body = "{\n  \"total_players\" : 7 ,\n  \"games\" : [ { \"name\" : \"PSO\" , \"players\" : 7 } ]\n}";
    let status = decode(body.as_bytes()).unwrap();
    assert_eq!(status.total_players, 7);
    assert_eq!(status.game_count, 1);
    assert_eq!(status.games()[0].name, "PSO");
}

#[test]
fn escaped_name_round_trips() {
    let body = r#"{"games":[{"name":"Sega \"Blue Sky\"\tLine","players":1}]}"#;
    let status = decode(body.as_bytes()).unwrap();
    assert_eq!(status.games()[0].name, "Sega \"Blue Sky\"\tLine");
}

#[test]
fn many_games_cap_holds_in_large_body() {
    let body = common::fixtures::body_with_games(40);
    let status = decode(body.as_bytes()).unwrap();
    assert_eq!(status.game_count, dcnow::constants::MAX_GAMES);
}
