//! Integration tests for `#[schemafunc]` and the provider projections.

use schemafunc_tools::{
    AnthropicProvider, DescriptionMode, FunctionSignature, OpenAiProvider, Parameter, ProviderRegistry, RecordDef,
    SchemaError, SchemaFunc, SchemaGenerator, SchemaOptions, SchemaProvider, TypeHint,
    generate_schema, schemafunc, to_call_kwargs,
};
use schemars::JsonSchema;
use serde_json::{Value, json};

// ─────────────────────────────────────────────────────────────────────
// Annotated functions
// ─────────────────────────────────────────────────────────────────────

/// Does X.
/// :param foo: A string.
/// :param bar: An integer.
#[schemafunc]
fn f(foo: String, #[default(5)] bar: i64) -> String {
    format!("{foo}{bar}")
}

/// Get the current weather in a given location.
///
/// Args:
///     location: The city and state, e.g. San Francisco, CA
///     unit: Temperature unit.
#[schemafunc]
fn get_weather(location: &str, #[default] unit: Option<Unit>) -> String {
    format!("{location} {unit:?}")
}

/// Tag a batch of items.
///
/// Parameters
/// ----------
/// items : list of str
///     Items to tag.
/// labels : dict
///     Label counts by name.
/// extra
///     Anything else.
#[schemafunc]
fn tag_items(
    items: Vec<String>,
    labels: std::collections::HashMap<String, u32>,
    #[hint(TypeHint::Any)] extra: serde_json::Value,
) -> usize {
    items.len() + labels.len() + usize::from(extra.is_null())
}

/// Log an event.
#[schemafunc]
fn log_event(message: &str, sink: impl std::io::Write) {
    drop((message, sink));
}

/// Get the weather.
///
/// Uses the public API.
///
/// :param city: City name.
#[schemafunc]
fn weather(city: &str) -> String {
    city.to_uppercase()
}

/// Greet someone.
///
/// :param name: Who to greet.
/// :param title: Honorific.
#[schemafunc]
fn greet<'a>(name: &'a str, title: std::borrow::Cow<'a, str>) -> String {
    format!("{title} {name}")
}

#[derive(Debug, JsonSchema)]
#[expect(dead_code, reason = "only the schema is inspected")]
enum Unit {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, JsonSchema)]
#[expect(dead_code, reason = "only the schema is inspected")]
struct Movie {
    /// Title as released.
    title: String,
    year: Option<u16>,
}

/// Store a movie.
///
/// :param movie: The movie to store.
#[schemafunc]
fn store(movie: Movie) -> bool {
    !movie.title.is_empty()
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[test]
fn annotated_function_matches_hand_built_signature() {
    let hand_built = FunctionSignature::new("f")
        .with_docstring("Does X.\n:param foo: A string.\n:param bar: An integer.")
        .with_parameter(Parameter::new("foo", TypeHint::String))
        .with_parameter(Parameter::new("bar", TypeHint::Integer).with_default(&5));

    assert_eq!(f("a".into(), 1), "a1");
    assert_eq!(generate_schema(&f_signature()), generate_schema(&hand_built));
    assert_eq!(
        generate_schema(&f_signature()).unwrap().to_json(),
        json!({
            "type": "function",
            "function": {
                "name": "f",
                "description": "Does X.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "foo": {"type": "string", "description": "A string."},
                        "bar": {"type": "integer", "description": "An integer.", "default": 5}
                    },
                    "required": ["foo"]
                }
            }
        })
    );
}

#[test]
fn enum_parameter_with_unspecified_default() {
    let envelope = generate_schema(&get_weather_signature()).unwrap();
    let parameters = envelope.to_json()["function"]["parameters"].clone();
    assert_eq!(
        parameters["properties"]["unit"],
        json!({"enum": ["Celsius", "Fahrenheit"], "description": "Temperature unit."})
    );
    assert_eq!(parameters["required"], json!(["location"]));
    assert_eq!(get_weather("Paris", Some(Unit::Celsius)), "Paris Some(Celsius)");
}

#[test]
fn numpy_docstring_and_explicit_hint() {
    let envelope = generate_schema(&tag_items_signature()).unwrap();
    let properties = &envelope.function.parameters.properties();
    assert_eq!(
        properties["items"],
        json!({"type": "array", "items": {"type": "string"}, "description": "Items to tag."})
    );
    assert_eq!(
        properties["labels"],
        json!({
            "type": "object",
            "additionalProperties": {"type": "integer"},
            "description": "Label counts by name."
        })
    );
    assert_eq!(properties["extra"], json!({"description": "Anything else."}));
    assert_eq!(tag_items(vec![], Default::default(), Value::Null), 1);
}

#[test]
fn impl_trait_parameters_are_untyped() {
    let signature = log_event_signature();
    assert_eq!(signature.parameters[1].hint, None);
    let envelope = generate_schema(&signature).unwrap();
    assert_eq!(envelope.function.parameters.properties()["sink"], json!({}));
    log_event("started", std::io::sink());
}

#[test]
fn derived_struct_parameter() {
    let envelope = generate_schema(&store_signature()).unwrap();
    assert_eq!(
        envelope.function.parameters.properties()["movie"],
        json!({
            "type": "object",
            "properties": {
                "title": {"type": "string"},
                "year": {"type": "integer"}
            },
            "required": ["title"],
            "description": "The movie to store."
        })
    );
    assert!(store(Movie {
        title: "Alien".into(),
        year: Some(1979)
    }));
}

#[test]
fn provider_projections() {
    let envelope = generate_schema(&f_signature()).unwrap();

    let openai = OpenAiProvider.format_schema(&envelope);
    assert_eq!(openai, envelope.to_json());
    assert_eq!(OpenAiProvider.format_tool_kwargs(&openai), to_call_kwargs(&envelope));

    let anthropic = AnthropicProvider.format_schema(&envelope);
    assert_eq!(
        anthropic,
        json!({
            "name": "f",
            "description": "Does X.",
            "input_schema": envelope.function.parameters.to_json()
        })
    );
    assert_eq!(
        AnthropicProvider.format_tool_kwargs(&anthropic),
        json!({"tools": [anthropic]})
    );
}

#[test]
fn schema_func_bundle() {
    let tool = SchemaFunc::new(f, f_signature()).unwrap();
    assert_eq!((tool.func())("x".into(), 2), "x2");
    assert_eq!(tool.signature().name, "f");
    assert_eq!(tool.openai_tool_kwargs(), &to_call_kwargs(tool.envelope()));

    let registry = ProviderRegistry::default();
    assert_eq!(
        tool.provider_schema(&registry, "Anthropic").unwrap()["input_schema"]["required"],
        json!(["foo"])
    );
    assert_eq!(
        tool.provider_tool_kwargs(&registry, "anthropic").unwrap()["tools"][0]["name"],
        "f"
    );
    assert!(tool.provider_schema(&registry, "gemini").is_none());
}

#[test]
fn strict_bundle_reports_undocumented_parameters() {
    let generator = SchemaGenerator::new().with_options(SchemaOptions::strict());
    let result =
        SchemaFunc::with_generator(log_event as fn(&str, std::io::Sink), log_event_signature(), &generator);
    assert_eq!(
        result.map(|_| ()),
        Err(SchemaError::ParameterNotDocumented {
            parameters: vec!["message".into(), "sink".into()]
        })
    );

    let generator = SchemaGenerator::new()
        .with_options(SchemaOptions::strict().with_ignored_arg("sink").with_ignored_arg("message"));
    let tool =
        SchemaFunc::with_generator(log_event as fn(&str, std::io::Sink), log_event_signature(), &generator)
            .unwrap();
    assert!(tool.envelope().function.parameters.properties().is_empty());
}

#[test]
fn registered_types_flow_through_the_generator() {
    let mut generator = SchemaGenerator::new();
    generator.register_type(
        "Point",
        RecordDef::new("Point")
            .field("x", TypeHint::Number)
            .field("y", TypeHint::Number)
            .closed(true),
    );
    let signature = FunctionSignature::new("plot")
        .with_parameter(Parameter::new("points", TypeHint::array(TypeHint::named("Point"))));

    let document = generator.generate(&signature).unwrap();
    assert_eq!(
        document.properties()["points"]["items"]["additionalProperties"],
        json!(false)
    );
}

#[test]
fn blank_doc_lines_survive_the_macro() {
    let hand_built = FunctionSignature::new("weather")
        .with_docstring("Get the weather.\n\nUses the public API.\n\n:param city: City name.")
        .with_parameter(Parameter::new("city", TypeHint::String));
    assert_eq!(weather_signature(), hand_built);

    let generator = SchemaGenerator::new()
        .with_options(SchemaOptions::new().with_description_mode(DescriptionMode::Full));
    let document = generator.generate(&weather_signature()).unwrap();
    assert_eq!(document.description, "Get the weather.\n\nUses the public API.");
    assert_eq!(weather("oslo"), "OSLO");
}

#[test]
fn lifetime_generic_functions_are_annotated() {
    let envelope = generate_schema(&greet_signature()).unwrap();
    let parameters = &envelope.function.parameters;
    assert_eq!(
        parameters.properties()["title"],
        json!({"type": "string", "description": "Honorific."})
    );
    assert_eq!(parameters.to_json()["required"], json!(["name", "title"]));
    assert_eq!(greet("Ada", "Dr.".into()), "Dr. Ada");
}
