//! Request dispatch and tool handlers

use serde_json::{json, Value as JsonValue};
use tracing::{debug, info};
use unitconv_core::{as_sigfigs, ErrorReport, UnitError};
use unitconv_units::{categories, UnitRegistry};
use crate::config::ServerConfig;
use crate::protocol::{McpError, McpRequest, McpResponse, METHOD_NOT_FOUND};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "unitconv";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine handle plus configuration; one per process
pub struct Server {
    pub config: ServerConfig,
    pub registry: &'static UnitRegistry,
}

impl Server {
    pub fn new(config: ServerConfig, registry: &'static UnitRegistry) -> Self {
        Self { config, registry }
    }
}

pub fn handle_request(server: &Server, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(server, &request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(server, &request.params),

        _ => Err(McpError::new(METHOD_NOT_FOUND, format!("Method not found: {}", request.method))),
    };

    McpResponse::from_result(request.id.clone(), result)
}

fn handle_initialize(server: &Server, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit converter for length, mass, volume, area, time, digital storage, speed and temperature"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": format!(
            "Use list_categories and list_units to discover valid selections, then convert. \
             Results are shown with {} significant digits.{}",
            server.config.precision,
            if server.config.strict { "" } else { " Unknown units are returned unconverted." }
        )
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "list_categories",
                "description": "List the conversion categories with their base units.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the units of a category, in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name",
                            "enum": categories()
                        }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "convert",
                "description": "Convert a value between two units of one category. Returns the result and the conversion formula.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": "number",
                            "description": "Value to convert"
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Source unit (e.g., \"Kilometer\")"
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit (e.g., \"Mile\")"
                        },
                        "category": {
                            "type": "string",
                            "description": "Category name. Inferred from from_unit when omitted."
                        }
                    },
                    "required": ["value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "describe_formula",
                "description": "Describe how to convert between two units, without a value.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "from_unit": { "type": "string" },
                        "to_unit": { "type": "string" },
                        "category": { "type": "string" }
                    },
                    "required": ["from_unit", "to_unit", "category"]
                }
            },
            {
                "name": "quick_convert",
                "description": "Convert a free-text query such as \"5 Kilometer to Mile\".",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Value, source unit, separator (to, in, ->), target unit"
                        }
                    },
                    "required": ["query"]
                }
            }
        ]
    }))
}

fn handle_tool_call(server: &Server, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));
    debug!(tool = name, "tool call");

    match name {
        "list_categories" => tool_list_categories(server),
        "list_units" => tool_list_units(server, &args),
        "convert" => tool_convert(server, &args),
        "describe_formula" => tool_describe_formula(server, &args),
        "quick_convert" => tool_quick_convert(server, &args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn tool_list_categories(server: &Server) -> Result<JsonValue, McpError> {
    let entries: Vec<JsonValue> = server.registry.categories().iter().map(|c| {
        json!({
            "name": c.name(),
            "base_unit": server.registry.base_unit(*c).map(|u| u.name.clone()),
            "units": server.registry.units_in(*c).len()
        })
    }).collect();

    let text = categories().join("\n");
    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "categories": entries
    }))
}

fn tool_list_units(server: &Server, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = arg_str(args, "category")?;
    let units = server.registry.units_of(category).map_err(|e| {
        McpError::invalid_params(e.to_string()).with_data(json!({ "available": categories() }))
    })?;

    Ok(json!({
        "content": [{ "type": "text", "text": units.join("\n") }],
        "category": category,
        "units": units
    }))
}

fn tool_convert(server: &Server, args: &JsonValue) -> Result<JsonValue, McpError> {
    let value = arg_number(args, "value")?;
    let from = arg_str(args, "from_unit")?;
    let to = arg_str(args, "to_unit")?;

    let category = match args.get("category").and_then(|v| v.as_str()) {
        Some(c) => c.to_string(),
        None => server.registry.category_of(from)
            .map(|c| c.name().to_string())
            .ok_or_else(|| McpError::invalid_params(format!(
                "Missing category, and '{}' is not a registered unit", from
            )))?,
    };

    Ok(render_conversion(server, value, from, to, &category))
}

fn tool_describe_formula(server: &Server, args: &JsonValue) -> Result<JsonValue, McpError> {
    let from = arg_str(args, "from_unit")?;
    let to = arg_str(args, "to_unit")?;
    let category = arg_str(args, "category")?;

    let formula = server.registry.describe_formula_with(server.config.formulas, from, to, category);
    Ok(json!({
        "content": [{ "type": "text", "text": formula }],
        "formula": formula
    }))
}

fn tool_quick_convert(server: &Server, args: &JsonValue) -> Result<JsonValue, McpError> {
    let text = arg_str(args, "query")?;

    match server.registry.parse_query(text) {
        Ok(query) => Ok(render_conversion(server, query.value, &query.from, &query.to, query.category.name())),
        Err(e) => Ok(tool_error(&e)),
    }
}

/// Result text mirrors the converter page: result, formula, then a one-unit example
fn render_conversion(server: &Server, value: f64, from: &str, to: &str, category: &str) -> JsonValue {
    let registry = server.registry;
    let precision = server.config.precision;

    let result = if server.config.strict {
        match registry.try_convert(value, from, to, category) {
            Ok(v) => v,
            Err(e) => return tool_error(&e),
        }
    } else {
        registry.convert(value, from, to, category)
    };

    let formatted = as_sigfigs(result, precision);
    let formula = registry.describe_formula_with(server.config.formulas, from, to, category);

    let example = (from != to).then(|| {
        let one = registry.convert(1.0, from, to, category);
        format!("1 {} = {} {}", from, as_sigfigs(one, precision), to)
    });

    let mut text = format!("{} {}\n\n**Conversion Formula:** {}", formatted, to, formula);
    if let Some(ref example) = example {
        text.push_str(&format!("\n**Example:** {}", example));
    }

    json!({
        "content": [{ "type": "text", "text": text }],
        "value": result,
        "formatted": formatted,
        "unit": to,
        "category": category,
        "formula": formula,
        "example": example,
        "isError": false
    })
}

fn tool_error(err: &UnitError) -> JsonValue {
    let report = ErrorReport::from(err);
    json!({
        "content": [{ "type": "text", "text": report.to_string() }],
        "error": report.to_json(),
        "isError": true
    })
}

fn arg_str<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))
}

/// Accept a JSON number or a numeric string
fn arg_number(args: &JsonValue, name: &str) -> Result<f64, McpError> {
    match args.get(name) {
        Some(JsonValue::Number(n)) => n.as_f64()
            .ok_or_else(|| McpError::invalid_params(format!("{} is out of range", name))),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>()
            .map_err(|_| McpError::invalid_params(format!("{} is not a number: {}", name, s))),
        _ => Err(McpError::invalid_params(format!("Missing {} argument", name))),
    }
}
