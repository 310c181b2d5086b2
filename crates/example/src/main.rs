//! Prints the tool schemas of a few annotated functions.
//!
//! # Usage
//!
//! ```bash
//! schemas [provider]
//! ```
//!
//! Without a provider, every registered provider is printed. Set
//! `RUST_LOG=debug` to see generation logs, and `SCHEMAS_LOG_FORMAT=json`
//! for JSON log lines.
//!
//! # Example
//!
//! ```bash
//! RUST_LOG=schemafunc_schema=debug schemas anthropic
//! ```

use schemafunc::prelude::*;
use schemars::JsonSchema;
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ─────────────────────────────────────────────────────────────────────
// Tools
// ─────────────────────────────────────────────────────────────────────

/// Temperature scale.
#[derive(Debug, Clone, Copy, JsonSchema)]
#[serde(rename_all = "lowercase")]
enum Unit {
    Celsius,
    #[expect(dead_code, reason = "only offered to the model through the schema")]
    Fahrenheit,
}

/// Get the current weather in a given location.
///
/// Args:
///     location: The city and state, e.g. San Francisco, CA
///     unit: Temperature unit.
#[schemafunc]
fn get_weather(location: &str, #[default] unit: Option<Unit>) -> String {
    let unit = unit.unwrap_or(Unit::Celsius);
    format!("{location}: 21 degrees {unit:?}")
}

/// Search the document index.
///
/// :param query: Free-text query.
/// :param limit: Maximum number of hits.
/// :param tags: Only return documents carrying all of these tags.
#[schemafunc]
fn search(
    query: &str,
    #[default(10)] limit: u32,
    #[default] tags: Option<Vec<String>>,
) -> Vec<String> {
    let tags = tags.unwrap_or_default();
    (0..limit.min(3))
        .map(|hit| format!("{query}#{hit} [{}]", tags.join(",")))
        .collect()
}

/// Schedule a meeting.
///
/// Parameters
/// ----------
/// title : str
///     Meeting title.
/// attendees : list of str
///     Email addresses of the attendees.
/// duration : int
///     Length in minutes.
#[schemafunc]
fn schedule(title: String, attendees: Vec<String>, #[default(30)] duration: u16) -> String {
    format!("{title} ({duration} min) with {}", attendees.len())
}

// ─────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var("SCHEMAS_LOG_FORMAT").is_ok_and(|format| format == "json");

    // try_init().ok() ignores errors if already initialized
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .ok();
    }
}

fn tool_schemas(registry: &ProviderRegistry, provider: &str) -> Result<Vec<Value>, SchemaError> {
    let weather_tool = SchemaFunc::new(get_weather, get_weather_signature())?;
    let search_tool = SchemaFunc::new(search, search_signature())?;
    let schedule_tool = SchemaFunc::new(schedule, schedule_signature())?;

    tracing::debug!(
        weather = %(weather_tool.func())("Paris", None),
        hits = (search_tool.func())("rust", 2, None).len(),
        meeting = %(schedule_tool.func())("Sync".into(), vec![], 15),
        "sample calls"
    );

    Ok([
        weather_tool.provider_schema(registry, provider),
        search_tool.provider_schema(registry, provider),
        schedule_tool.provider_schema(registry, provider),
    ]
    .into_iter()
    .flatten()
    .collect())
}

#[expect(clippy::print_stdout, reason = "schemas are the program output")]
#[expect(clippy::print_stderr, reason = "usage and error reporting")]
fn main() {
    init_tracing();

    let registry = ProviderRegistry::default();
    let requested: Vec<String> = match std::env::args().nth(1) {
        Some(name) if registry.has(&name) => vec![name.to_lowercase()],
        Some(name) => {
            eprintln!("Error: unknown provider '{name}'");
            eprintln!("Available: {}", registry.names().join(", "));
            std::process::exit(1);
        }
        None => registry.names().into_iter().map(str::to_string).collect(),
    };

    for provider in &requested {
        let schemas = match tool_schemas(&registry, provider) {
            Ok(schemas) => schemas,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        match serde_json::to_string_pretty(&schemas) {
            Ok(rendered) => println!("# {provider}\n{rendered}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}
