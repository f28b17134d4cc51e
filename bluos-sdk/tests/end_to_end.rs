//! End-to-end scenarios: free text in, HTTP calls against mock zones out

use bluos_sdk::{MusicAssistant, SystemConfig};
use mockito::Matcher;

fn host_port(server: &mockito::ServerGuard) -> (String, String) {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port.rsplit_once(':').expect("host:port");
    (host.to_string(), port.to_string())
}

fn config(servers: &[(&str, &str, &mockito::ServerGuard)]) -> SystemConfig {
    let zones: Vec<_> = servers
        .iter()
        .map(|(id, name, server)| {
            let (host, port) = host_port(server);
            serde_json::json!({
                "id": id,
                "name": name,
                "address": host,
                "port": port.parse::<u16>().unwrap(),
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "zones": zones,
        "groups": [
            {"name": "outside", "members": ["pool", "deck"]},
        ],
        "default_zone": "gym",
    }))
    .unwrap()
}

#[tokio::test]
async fn play_chill_music_outside_forms_the_group_and_sets_volume() {
    let gym = mockito::Server::new_async().await;
    let mut pool = mockito::Server::new_async().await;
    let mut deck = mockito::Server::new_async().await;

    let (deck_host, deck_port) = host_port(&deck);

    // Pool is the group leader: its existing (empty) group is dissolved,
    // deck is added as follower, then volume and play land on it.
    let leader_status = pool
        .mock("GET", "/Status")
        .with_status(200)
        .with_body("<status><state>stop</state></status>")
        .create_async()
        .await;
    let add_follower = pool
        .mock("GET", "/AddSlave")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("slave".into(), deck_host),
            Matcher::UrlEncoded("port".into(), deck_port),
        ]))
        .with_status(200)
        .create_async()
        .await;
    let leader_volume = pool
        .mock("GET", "/Volume")
        .match_query(Matcher::UrlEncoded("level".into(), "40".into()))
        .with_status(200)
        .create_async()
        .await;
    let leader_play = pool
        .mock("GET", "/Play")
        .with_status(200)
        .create_async()
        .await;
    let follower_volume = deck
        .mock("GET", "/Volume")
        .match_query(Matcher::UrlEncoded("level".into(), "40".into()))
        .with_status(200)
        .create_async()
        .await;

    let assistant = MusicAssistant::new(config(&[
        ("gym", "Gym", &gym),
        ("pool", "Pool", &pool),
        ("deck", "Deck", &deck),
    ]))
    .unwrap();

    assert!(assistant.is_command("play chill music outside at 40%"));
    let reply = assistant
        .handle_message("user", "play chill music outside at 40%")
        .await;

    assert!(reply.contains("in the Pool and Deck"), "reply: {reply}");
    assert!(reply.contains("at 40%"), "reply: {reply}");
    assert!(
        reply.contains("Start playback from your streaming app"),
        "reply: {reply}"
    );

    leader_status.assert_async().await;
    add_follower.assert_async().await;
    leader_volume.assert_async().await;
    leader_play.assert_async().await;
    follower_volume.assert_async().await;
}

#[tokio::test]
async fn partial_volume_failure_is_reported_per_zone() {
    let gym = mockito::Server::new_async().await;
    let mut pool = mockito::Server::new_async().await;
    let mut deck = mockito::Server::new_async().await;

    pool.mock("GET", "/Status")
        .with_status(200)
        .with_body("<status><state>stop</state></status>")
        .create_async()
        .await;
    pool.mock("GET", "/AddSlave")
        .match_query(Matcher::Any)
        .with_status(200)
        .create_async()
        .await;
    pool.mock("GET", "/Volume")
        .match_query(Matcher::Any)
        .with_status(200)
        .create_async()
        .await;
    pool.mock("GET", "/Play").with_status(200).create_async().await;
    // Deck refuses the volume change.
    deck.mock("GET", "/Volume")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let assistant = MusicAssistant::new(config(&[
        ("gym", "Gym", &gym),
        ("pool", "Pool", &pool),
        ("deck", "Deck", &deck),
    ]))
    .unwrap();

    let reply = assistant
        .handle_message("user", "play chill music outside at 40%")
        .await;

    assert!(reply.contains("(volume set on 1/2 zones)"), "reply: {reply}");
}

#[tokio::test]
async fn pause_targets_the_default_zone() {
    let mut gym = mockito::Server::new_async().await;
    let pool = mockito::Server::new_async().await;
    let deck = mockito::Server::new_async().await;

    let pause = gym.mock("GET", "/Pause").with_status(200).create_async().await;

    let assistant = MusicAssistant::new(config(&[
        ("gym", "Gym", &gym),
        ("pool", "Pool", &pool),
        ("deck", "Deck", &deck),
    ]))
    .unwrap();

    let reply = assistant.handle_message("user", "pause").await;
    assert_eq!(reply, "Paused.");
    pause.assert_async().await;
}

#[tokio::test]
async fn play_without_content_query_resumes_playback() {
    let mut gym = mockito::Server::new_async().await;
    let pool = mockito::Server::new_async().await;
    let deck = mockito::Server::new_async().await;

    let play = gym.mock("GET", "/Play").with_status(200).create_async().await;

    let assistant = MusicAssistant::new(config(&[
        ("gym", "Gym", &gym),
        ("pool", "Pool", &pool),
        ("deck", "Deck", &deck),
    ]))
    .unwrap();

    let reply = assistant.handle_message("user", "play in the gym").await;
    assert_eq!(reply, "Resumed playback in the Gym");
    play.assert_async().await;
}

#[tokio::test]
async fn unreachable_zone_becomes_reply_text_not_a_crash() {
    let assistant = MusicAssistant::new(
        serde_json::from_value(serde_json::json!({
            "zones": [
                {"id": "gym", "name": "Gym", "address": "127.0.0.1", "port": 1},
            ],
        }))
        .unwrap(),
    )
    .unwrap();

    let reply = assistant.handle_message("user", "pause").await;
    assert_eq!(reply, "Failed to pause playback.");
}

#[tokio::test]
async fn empty_registry_reports_unavailability_without_network_calls() {
    let assistant = MusicAssistant::new(SystemConfig::default()).unwrap();

    let reply = assistant.handle_message("user", "pause").await;
    assert_eq!(reply, "No zones available.");

    let reply = assistant.handle_message("user", "play some jazz").await;
    assert_eq!(reply, "No valid zone specified.");
}
