//! Natural language parser for music commands
//!
//! All matching here is table driven. The action table and the content type
//! table are fixed, ordered lists and the first entry that matches wins;
//! table order is the priority order, a deliberate design decision rather
//! than anything derived from keyword length or specificity. Parsing runs a
//! fixed sequence of independent stages (action, volume, zone, content
//! query, content type) and no stage backtracks on a later stage's outcome.

use std::collections::HashMap;

use regex::Regex;

use crate::command::{Command, ContentType, PlaybackAction};

/// Action keyword table, scanned in order.
///
/// The first action whose keyword matches the message wins, even when a
/// later action's keyword would also match.
const ACTION_TABLE: &[(PlaybackAction, &[&str])] = &[
    (PlaybackAction::Play, &["play", "put on", "start", "queue", "listen to"]),
    (PlaybackAction::Pause, &["pause", "hold"]),
    (PlaybackAction::Resume, &["resume", "continue", "unpause"]),
    (PlaybackAction::Stop, &["stop", "turn off", "end", "silence"]),
    (PlaybackAction::Skip, &["skip", "next", "skip track", "next track", "next song"]),
    (PlaybackAction::Back, &["back", "previous", "go back", "last track", "previous track"]),
];

/// Mood and activity words that usually name a playlist even without the
/// literal word "playlist".
const PLAYLIST_KEYWORDS: &[&str] = &[
    "workout", "chill", "focus", "party", "sleep", "morning",
    "evening", "dinner", "cooking", "running", "cardio", "yoga",
    "meditation", "study", "work", "driving", "road trip",
    "summer", "winter", "christmas", "holiday", "throwback",
];

/// Residues that mean the content query carried no real content.
const EMPTY_QUERIES: &[&str] = &["the", "a", "an", "my"];

/// A single entry in the content type pattern tables.
///
/// `PatternExcept` matches its first pattern unless the second also matches;
/// it stands in for negative lookahead, which the `regex` crate does not
/// support.
enum TypeMatcher {
    Pattern(Regex),
    PatternExcept(Regex, Regex),
}

impl TypeMatcher {
    fn is_match(&self, text: &str) -> bool {
        match self {
            TypeMatcher::Pattern(pattern) => pattern.is_match(text),
            TypeMatcher::PatternExcept(pattern, unless) => {
                pattern.is_match(text) && !unless.is_match(text)
            }
        }
    }
}

/// Parses free-text playback commands into [`Command`] values
///
/// Constructed with the alias table: a map from user-facing phrases
/// (lowercase) to the zone id or group name they stand for. All patterns
/// are compiled once at construction.
pub struct CommandParser {
    aliases: HashMap<String, String>,
    /// Alias phrases longest first, paired with a word-bounded removal
    /// pattern, so "main floor" is preferred over "main" when both match.
    aliases_by_len: Vec<(String, Regex)>,
    volume_patterns: Vec<Regex>,
    zone_phrase_patterns: Vec<Regex>,
    zone_strip_patterns: Vec<Regex>,
    type_table: Vec<(ContentType, Vec<TypeMatcher>)>,
    percent_patterns: Vec<Regex>,
    filler_pattern: Regex,
}

impl CommandParser {
    pub fn new(aliases: HashMap<String, String>) -> Self {
        let aliases: HashMap<String, String> = aliases
            .into_iter()
            .map(|(phrase, target)| (phrase.to_lowercase(), target))
            .collect();

        let mut aliases_by_len: Vec<(String, Regex)> = aliases
            .keys()
            .map(|phrase| {
                let strip = regex(&format!(r"\b{}\b", regex::escape(phrase)));
                (phrase.clone(), strip)
            })
            .collect();
        aliases_by_len.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(&b.0)));

        // Ordered: first match wins.
        let volume_patterns = vec![
            regex(r"at\s+(\d+)\s*%"),
            regex(r"at\s+(\d+)\s*percent"),
            regex(r"volume\s+(\d+)"),
            regex(r"(\d+)\s*%\s*volume"),
            regex(r"set\s+(?:to\s+)?(\d+)\s*%?"),
        ];

        let zone_phrase_patterns = vec![
            regex(r"\bin\s+(?:the\s+)?(\w+(?:\s+\w+)?)"),
            regex(r"\bon\s+(?:the\s+)?(\w+(?:\s+\w+)?)"),
            regex(r"\bto\s+(?:the\s+)?(\w+(?:\s+\w+)?)"),
        ];

        let zone_strip_patterns = vec![
            regex(r"\bin\s+(?:the\s+)?\w+(?:\s+\w+)?(?:\s+zone)?"),
            regex(r"\bon\s+(?:the\s+)?\w+(?:\s+\w+)?"),
            regex(r"\bto\s+(?:the\s+)?\w+(?:\s+\w+)?"),
        ];

        // Ordered: the first category with a matching pattern wins.
        let type_table = vec![
            (
                ContentType::Playlist,
                vec![
                    TypeMatcher::Pattern(regex(r"\bplaylist\b")),
                    TypeMatcher::Pattern(regex(r"\bmy\s+\w+\s+mix\b")),
                    TypeMatcher::Pattern(regex(r"\bdiscover\s*weekly\b")),
                    TypeMatcher::Pattern(regex(r"\brelease\s*radar\b")),
                ],
            ),
            (
                ContentType::Podcast,
                vec![
                    TypeMatcher::Pattern(regex(r"\bpodcast\b")),
                    TypeMatcher::Pattern(regex(r"\bepisode\b")),
                    // "show" but not "show me"
                    TypeMatcher::PatternExcept(regex(r"\bshow\b"), regex(r"\bshow\s+me\b")),
                    // Known podcast hosts
                    TypeMatcher::Pattern(regex(
                        r"\b(?:joe\s*rogan|tim\s*ferriss|lex\s*fridman|huberman|jre)\b",
                    )),
                ],
            ),
            (
                ContentType::Album,
                vec![
                    TypeMatcher::Pattern(regex(r"\balbum\b")),
                    TypeMatcher::Pattern(regex(r"\bthe\s+\w+\s+album\b")),
                ],
            ),
            (
                ContentType::Track,
                vec![
                    TypeMatcher::Pattern(regex(r"\bsong\b")),
                    TypeMatcher::Pattern(regex(r"\btrack\b")),
                ],
            ),
        ];

        let percent_patterns = vec![regex(r"\b\d+\s*%"), regex(r"\b\d+\s*percent\b")];
        let filler_pattern = regex(r"\b(?:some|something|music|by)\b");

        Self {
            aliases,
            aliases_by_len,
            volume_patterns,
            zone_phrase_patterns,
            zone_strip_patterns,
            type_table,
            percent_patterns,
            filler_pattern,
        }
    }

    /// Fast pre-filter: does this message look like a music command?
    ///
    /// True when the case-folded message starts with any action keyword.
    /// A bare "play" with no payload is not a command.
    pub fn is_command(&self, message: &str) -> bool {
        let msg = message.trim().to_lowercase();

        for (action, keywords) in ACTION_TABLE {
            for keyword in *keywords {
                if msg.starts_with(keyword) {
                    if *action == PlaybackAction::Play {
                        return msg.split_whitespace().count() > 1;
                    }
                    return true;
                }
            }
        }
        false
    }

    /// Parse a message into a [`Command`]
    ///
    /// Returns `None` when no action keyword matches; that is a normal
    /// outcome, not an error.
    pub fn parse(&self, message: &str) -> Option<Command> {
        let msg = message.trim().to_lowercase();

        let Some(action) = self.detect_action(&msg) else {
            tracing::debug!(message = %truncate(&msg, 50), "no action keyword matched");
            return None;
        };

        let volume = self.extract_volume(&msg);
        let zone_target = self.extract_zone(&msg);

        let mut content_query = None;
        let mut content_type = None;
        if action == PlaybackAction::Play {
            content_query = self.extract_content_query(&msg);
            content_type = content_query
                .as_deref()
                .map(|query| self.detect_content_type(query));
        }

        let command = Command {
            action,
            content_query,
            content_type,
            zone_target,
            volume,
        };
        tracing::info!(%command, "parsed music command");
        Some(command)
    }

    fn detect_action(&self, msg: &str) -> Option<PlaybackAction> {
        for (action, keywords) in ACTION_TABLE {
            for keyword in *keywords {
                // At the start, followed by a space or comma.
                if msg.starts_with(&format!("{} ", keyword))
                    || msg.starts_with(&format!("{},", keyword))
                {
                    return Some(*action);
                }
                // As a delimited word span inside or at the end.
                if msg.contains(&format!(" {} ", keyword))
                    || msg.ends_with(&format!(" {}", keyword))
                {
                    return Some(*action);
                }
                // Exact single-keyword message.
                if msg == *keyword {
                    return Some(*action);
                }
            }
        }
        None
    }

    fn extract_volume(&self, msg: &str) -> Option<u8> {
        for pattern in &self.volume_patterns {
            if let Some(caps) = pattern.captures(msg) {
                // The capture is all digits; parse only fails on overflow,
                // which clamps to 100 anyway.
                let volume = caps[1].parse::<u64>().unwrap_or(u64::MAX);
                return Some(volume.clamp(0, 100) as u8);
            }
        }
        None
    }

    fn extract_zone(&self, msg: &str) -> Option<String> {
        // Preposition-qualified phrases first: "in/on/to (the) <words>".
        for pattern in &self.zone_phrase_patterns {
            if let Some(caps) = pattern.captures(msg) {
                let candidate = caps[1].trim();
                if let Some(target) = self.aliases.get(candidate) {
                    return Some(target.clone());
                }
            }
        }

        // Direct alias anywhere in the message, longest alias first.
        for (phrase, _) in &self.aliases_by_len {
            if msg.contains(phrase.as_str()) {
                return self.aliases.get(phrase).cloned();
            }
        }

        None
    }

    fn extract_content_query(&self, msg: &str) -> Option<String> {
        let mut query = msg.to_string();

        // Strip the action keyword at the start; at most one per table row.
        for (_, keywords) in ACTION_TABLE {
            for keyword in *keywords {
                if query.starts_with(&format!("{} ", keyword)) {
                    query = query[keyword.len()..].trim().to_string();
                    break;
                }
            }
        }

        // Strip zone preposition phrases, then bare aliases (word-bounded,
        // longest first).
        for pattern in &self.zone_strip_patterns {
            query = pattern.replace_all(&query, "").into_owned();
        }
        for (_, strip) in &self.aliases_by_len {
            query = strip.replace_all(&query, "").into_owned();
        }

        // Strip volume phrases and standalone percentage tokens.
        for pattern in &self.volume_patterns {
            query = pattern.replace_all(&query, "").into_owned();
        }
        for pattern in &self.percent_patterns {
            query = pattern.replace_all(&query, "").into_owned();
        }

        // Strip filler words and collapse whitespace.
        query = self.filler_pattern.replace_all(&query, " ").into_owned();
        let query = query.split_whitespace().collect::<Vec<_>>().join(" ");

        if query.is_empty() || EMPTY_QUERIES.contains(&query.as_str()) {
            return None;
        }
        Some(query)
    }

    fn detect_content_type(&self, query: &str) -> ContentType {
        for (content_type, matchers) in &self.type_table {
            for matcher in matchers {
                if matcher.is_match(query) {
                    tracing::debug!(
                        r#type = %content_type,
                        query = %truncate(query, 30),
                        "content type detected"
                    );
                    return *content_type;
                }
            }
        }

        // Mood keywords imply a playlist, unless a stronger conflicting
        // signal ("playlist" itself, or "by <artist>") is present.
        for keyword in PLAYLIST_KEYWORDS {
            if query.contains(keyword) && !query.contains("playlist") && !query.contains("by") {
                tracing::debug!(keyword, query = %truncate(query, 30), "playlist keyword detected");
                return ContentType::Playlist;
            }
        }

        ContentType::Artist
    }
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded pattern must compile")
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
