//! Config key metadata for documentation and help.
//!
//! Descriptions, types, defaults and examples for every config key, used
//! by `termfx config explain`.

/// Metadata for a single config key.
#[derive(Debug, Clone)]
pub struct KeyMetadata {
    /// The full dot-notation key (e.g., "progress.width").
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Type description (e.g., "positive integer", "bool").
    pub value_type: &'static str,
    /// Default value as string.
    pub default: &'static str,
    /// Example values.
    pub examples: &'static [&'static str],
}

/// All config key metadata.
pub static METADATA: &[KeyMetadata] = &[
    // colorize section
    KeyMetadata {
        key: "colorize.default_color",
        description: "Color used by `termfx colorize` when no --color flag is given.",
        value_type: "white | blue | red | green | gray | orange | yellow | purple",
        default: "white",
        examples: &["green", "orange"],
    },
    // progress section
    KeyMetadata {
        key: "progress.width",
        description: "Total number of bar characters, filled plus empty. The percentage \
                      label is printed after the bar and is not counted.",
        value_type: "positive integer",
        default: "20",
        examples: &["10", "40", "60"],
    },
    KeyMetadata {
        key: "progress.fill_char",
        description: "Character repeated for the completed part of the bar.",
        value_type: "single character",
        default: "=",
        examples: &["#", "█"],
    },
    KeyMetadata {
        key: "progress.empty_char",
        description: "Character repeated for the remaining part of the bar. Only the \
                      completed part is colored.",
        value_type: "single character",
        default: "=",
        examples: &["-", "░", " "],
    },
    KeyMetadata {
        key: "progress.color",
        description: "Color of the completed part of the bar.",
        value_type: "white | blue | red | green | gray | orange | yellow | purple",
        default: "green",
        examples: &["blue", "yellow"],
    },
    KeyMetadata {
        key: "progress.step_ms",
        description: "Delay between steps of the `termfx progress` demo. Each step adds 1%.",
        value_type: "positive integer (milliseconds)",
        default: "100",
        examples: &["20", "250"],
    },
    // loader section
    KeyMetadata {
        key: "loader.kind",
        description: "Animation used by `termfx loader`.",
        value_type: "dots | spin | bar",
        default: "dots",
        examples: &["spin", "bar"],
    },
    KeyMetadata {
        key: "loader.message",
        description: "Text shown after the animated frame.",
        value_type: "string",
        default: "Loading",
        examples: &["Initialising", "Processing data"],
    },
    KeyMetadata {
        key: "loader.interval_ms",
        description: "Milliseconds between frames. Elapsed time is refreshed on every frame.",
        value_type: "positive integer (milliseconds)",
        default: "300",
        examples: &["80", "200", "500"],
    },
    KeyMetadata {
        key: "loader.immediate_first_frame",
        description: "Draw the first frame as soon as the loader starts. When false, the \
                      line stays empty for one interval before the first frame.",
        value_type: "bool",
        default: "false",
        examples: &["true", "false"],
    },
    KeyMetadata {
        key: "loader.duration_ms",
        description: "How long the `termfx loader` demo runs before it stops itself.",
        value_type: "positive integer (milliseconds)",
        default: "5000",
        examples: &["1000", "10000"],
    },
];

/// Get metadata for a specific key.
pub fn get_metadata(key: &str) -> Option<&'static KeyMetadata> {
    METADATA.iter().find(|m| m.key == key)
}

/// Get all keys in the metadata table.
pub fn all_keys() -> impl Iterator<Item = &'static str> {
    METADATA.iter().map(|m| m.key)
}

/// Search for keys matching a query (prefix or contains).
pub fn search_keys(query: &str) -> Vec<&'static KeyMetadata> {
    let query_lower = query.to_lowercase();
    METADATA
        .iter()
        .filter(|m| {
            m.key.to_lowercase().contains(&query_lower)
                || m.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}

/// Get all keys for a specific section.
pub fn keys_for_section(section: &str) -> Vec<&'static KeyMetadata> {
    let prefix = format!("{section}.");
    METADATA
        .iter()
        .filter(|m| m.key.starts_with(&prefix))
        .collect()
}
