//! Defensive parsing of zone `/Status` documents

use serde::Serialize;
use xmltree::Element;

/// Transient snapshot of a zone's state
///
/// Reconstructed from every `/Status` request and never cached; the remote
/// device is the source of truth. Missing numeric fields default to 0,
/// missing "0"/"1" boolean fields to false, missing text fields to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ZoneStatus {
    pub state: String,
    pub volume: u8,
    pub mute: bool,
    pub title1: String,
    pub title2: String,
    pub title3: String,
    pub artist: String,
    pub album: String,
    pub service: String,
    pub shuffle: bool,
    pub repeat: String,
    /// Addresses of the zones currently following this one.
    pub follower_addresses: Vec<String>,
}

impl ZoneStatus {
    /// A zone with followers is currently leading a group.
    pub fn is_group_leader(&self) -> bool {
        !self.follower_addresses.is_empty()
    }
}

/// Parse a `/Status` response body into a [`ZoneStatus`]
///
/// Any payload carrying a `DOCTYPE` or `ENTITY` declaration is rejected
/// before the XML parser touches it: a compromised or spoofed zone must not
/// get entity expansion or external entity resolution anywhere near this
/// process. Rejection and malformed XML both yield `None`, the same as an
/// unreachable zone.
pub fn parse_status(body: &str) -> Option<ZoneStatus> {
    if body.contains("<!DOCTYPE") || body.contains("<!ENTITY") {
        tracing::error!("status document rejected: DOCTYPE/ENTITY declaration present");
        return None;
    }

    let root = match Element::parse(body.as_bytes()) {
        Ok(root) => root,
        Err(e) => {
            tracing::error!(error = %e, "status document failed to parse");
            return None;
        }
    };

    let follower_addresses = root
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|element| element.name == "slave")
        .filter_map(|element| element.get_text())
        .map(|text| text.into_owned())
        .filter(|text| !text.is_empty())
        .collect();

    Some(ZoneStatus {
        state: child_text(&root, "state"),
        volume: child_text(&root, "volume").parse().unwrap_or(0),
        mute: child_text(&root, "mute") == "1",
        title1: child_text(&root, "title1"),
        title2: child_text(&root, "title2"),
        title3: child_text(&root, "title3"),
        artist: child_text(&root, "artist"),
        album: child_text(&root, "album"),
        service: child_text(&root, "service"),
        shuffle: child_text(&root, "shuffle") == "1",
        repeat: child_text(&root, "repeat"),
        follower_addresses,
    })
}

fn child_text(parent: &Element, name: &str) -> String {
    parent
        .get_child(name)
        .and_then(|child| child.get_text())
        .map(|text| text.into_owned())
        .unwrap_or_default()
}
