use rps_referee::GameEngine;
use serde_json::json;

#[test]
fn round_record_serializes_with_snake_case_names() {
    let mut engine = GameEngine::new();
    let record = engine.play_round("bomb", "nope").unwrap();
    let v = serde_json::to_value(record).unwrap();
    assert_eq!(
        v,
        json!({
            "round_number": 1,
            "player_move": "bomb",
            "bot_move": "invalid",
            "outcome": "player_win",
            "note": "invalid move: forfeit",
            "reason": {"forfeit": {"loser": "bot"}},
            "rejections": {"player": null, "bot": "unrecognized"},
        })
    );
}

#[test]
fn finished_result_serializes_outcome() {
    let mut engine = GameEngine::new();
    for _ in 0..3 {
        engine.play_round("paper", "rock").unwrap();
    }
    let v = serde_json::to_value(engine.current_result()).unwrap();
    assert_eq!(v["scores"], json!({"player": 3, "bot": 0}));
    assert_eq!(v["finished"], true);
    assert_eq!(v["match_outcome"], "player_win");

    let state = serde_json::to_value(engine.state()).unwrap();
    assert_eq!(state["history"].as_array().map(Vec::len), Some(3));
    assert_eq!(state["bomb_used"], json!({"player": false, "bot": false}));
}
