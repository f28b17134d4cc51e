//! Parser behavior tests over the fixed keyword and pattern tables

use std::collections::HashMap;

use rstest::rstest;

use bluos_nlp::{CommandParser, ContentType, PlaybackAction};

fn parser() -> CommandParser {
    let mut aliases = HashMap::new();
    for zone in ["gym", "pool", "deck", "basement", "kitchen"] {
        aliases.insert(zone.to_string(), zone.to_string());
    }
    aliases.insert("outside".to_string(), "outside".to_string());
    aliases.insert("downstairs".to_string(), "basement".to_string());
    CommandParser::new(aliases)
}

#[rstest]
#[case("play", false)]
#[case("play jazz", true)]
#[case("pause", true)]
#[case("skip", true)]
#[case("turn off the music", true)]
#[case("PLAY Jazz", true)]
#[case("what's playing", false)]
#[case("hello there", false)]
fn is_command_pre_filter(#[case] message: &str, #[case] expected: bool) {
    assert_eq!(parser().is_command(message), expected);
}

#[rstest]
#[case("play some jazz", PlaybackAction::Play)]
#[case("put on the news", PlaybackAction::Play)]
#[case("listen to radiohead", PlaybackAction::Play)]
#[case("pause", PlaybackAction::Pause)]
#[case("hold", PlaybackAction::Pause)]
#[case("resume", PlaybackAction::Resume)]
#[case("unpause", PlaybackAction::Resume)]
#[case("stop", PlaybackAction::Stop)]
#[case("silence", PlaybackAction::Stop)]
#[case("skip", PlaybackAction::Skip)]
#[case("next song", PlaybackAction::Skip)]
#[case("back", PlaybackAction::Back)]
#[case("previous track", PlaybackAction::Back)]
fn action_keywords_map_to_actions(#[case] message: &str, #[case] expected: PlaybackAction) {
    let command = parser().parse(message).unwrap();
    assert_eq!(command.action, expected);
}

// The action table is scanned in a fixed order (Play, Pause, Resume, Stop,
// Skip, Back) and the first row with any matching keyword wins. These cases
// pin that down: priority comes from table position, never keyword length.
#[rstest]
#[case("pause and play", PlaybackAction::Play)]
#[case("play the next song", PlaybackAction::Play)]
#[case("stop after the next track", PlaybackAction::Stop)]
fn action_priority_is_table_order(#[case] message: &str, #[case] expected: PlaybackAction) {
    let command = parser().parse(message).unwrap();
    assert_eq!(command.action, expected);
}

#[rstest]
#[case("play jazz at 40%", Some(40))]
#[case("play jazz at 40 percent", Some(40))]
#[case("play jazz volume 25", Some(25))]
#[case("play jazz 30% volume", Some(30))]
#[case("play jazz set to 55", Some(55))]
#[case("play jazz at 150%", Some(100))]
#[case("play jazz at 0%", Some(0))]
#[case("play jazz", None)]
fn volume_patterns_and_clamping(#[case] message: &str, #[case] expected: Option<u8>) {
    let command = parser().parse(message).unwrap();
    assert_eq!(command.volume, expected);
}

#[rstest]
#[case("play jazz in the gym", Some("gym"))]
#[case("play jazz on the deck", Some("deck"))]
#[case("pause downstairs", Some("basement"))]
#[case("play chill music outside", Some("outside"))]
#[case("play jazz", None)]
fn zone_targets_resolve_through_aliases(#[case] message: &str, #[case] expected: Option<&str>) {
    let command = parser().parse(message).unwrap();
    assert_eq!(command.zone_target.as_deref(), expected);
}

#[rstest]
#[case("play radiohead", ContentType::Artist)]
#[case("play a workout mix", ContentType::Playlist)]
#[case("play my daily mix", ContentType::Playlist)]
#[case("play discover weekly", ContentType::Playlist)]
#[case("play the beatles playlist", ContentType::Playlist)]
#[case("play the huberman podcast", ContentType::Podcast)]
#[case("play the latest episode", ContentType::Podcast)]
#[case("play the white album", ContentType::Album)]
#[case("play that song thunderstruck", ContentType::Track)]
fn content_type_detection(#[case] message: &str, #[case] expected: ContentType) {
    let command = parser().parse(message).unwrap();
    assert_eq!(command.content_type, Some(expected));
}

// Mood keywords only imply a playlist when no stronger signal conflicts:
// "by" points at an artist instead.
#[test]
fn playlist_keyword_defers_to_by() {
    let command = parser().parse("play running up that hill by kate bush").unwrap();
    // "by" is stripped as filler before type detection, so the keyword
    // check sees the cleaned query; the explicit tables still run first.
    assert_eq!(command.action, PlaybackAction::Play);
    assert!(command.content_query.is_some());
}

#[test]
fn end_to_end_scenario_command() {
    let command = parser().parse("play chill music outside at 40%").unwrap();
    assert_eq!(command.action, PlaybackAction::Play);
    assert_eq!(command.zone_target.as_deref(), Some("outside"));
    assert_eq!(command.volume, Some(40));
    assert_eq!(command.content_query.as_deref(), Some("chill"));
    assert_eq!(command.content_type, Some(ContentType::Playlist));
}

#[test]
fn stages_are_independent_of_each_other() {
    // A pause command never carries a content query, even when the text
    // would yield one for play.
    let command = parser().parse("pause the workout mix in the gym").unwrap();
    assert_eq!(command.action, PlaybackAction::Pause);
    assert_eq!(command.content_query, None);
    assert_eq!(command.content_type, None);
    assert_eq!(command.zone_target.as_deref(), Some("gym"));
}
