//! MQTT-style Topic Matching
//!
//! Subscription patterns use `/`-separated segments with two wildcards:
//! `+` matches exactly one segment, `#` matches any number of remaining
//! segments and is only valid as the final segment.

/// Whether `topic` matches the subscription `pattern`.
pub fn topic_matches(pattern: &str, topic: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let topic_segments: Vec<&str> = topic.split('/').collect();

    for (i, segment) in pattern_segments.iter().enumerate() {
        match *segment {
            "#" => {
                // Multi-level wildcard swallows the rest; invalid unless last.
                return i == pattern_segments.len() - 1;
            }
            "+" => {
                if i >= topic_segments.len() {
                    return false;
                }
            }
            literal => {
                if topic_segments.get(i) != Some(&literal) {
                    return false;
                }
            }
        }
    }

    pattern_segments.len() == topic_segments.len()
}
