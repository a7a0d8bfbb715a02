//! OpenAPI description and Swagger UI page.
//!
//! # Design
//! The document is written out by hand with `serde_json::json!` rather than
//! derived: there is one path and one schema, so it is built once when the
//! router is assembled and shared read-only afterwards.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::config::DocsConfig;

pub const DOCUMENT_PATH: &str = "/swagger/v1/swagger.json";

const SWAGGER_UI_CDN: &str = "https://unpkg.com/swagger-ui-dist@5";

#[derive(Debug)]
struct ApiDocs {
    document: Value,
    index_html: String,
}

/// Routes serving the document and the UI page at `/`.
pub fn routes(docs: &DocsConfig) -> Router {
    let state = Arc::new(ApiDocs {
        document: document(docs),
        index_html: index_html(&docs.title),
    });
    Router::new()
        .route("/", get(swagger_ui))
        .route(DOCUMENT_PATH, get(swagger_json))
        .with_state(state)
}

async fn swagger_json(State(docs): State<Arc<ApiDocs>>) -> Json<Value> {
    Json(docs.document.clone())
}

async fn swagger_ui(State(docs): State<Arc<ApiDocs>>) -> Html<String> {
    Html(docs.index_html.clone())
}

/// Builds the OpenAPI 3.0 document for the `/todo` resource.
pub fn document(docs: &DocsConfig) -> Value {
    let item = json!({ "$ref": "#/components/schemas/TodoItem" });
    let id_param = json!({
        "name": "id",
        "in": "query",
        "required": true,
        "description": "Item ID",
        "schema": { "type": "integer", "format": "int32" }
    });
    let item_body = |example: Value| {
        json!({
            "required": true,
            "content": { "application/json": { "schema": item, "example": example } }
        })
    };
    let item_response = |description: &str| {
        json!({
            "description": description,
            "content": { "application/json": { "schema": item } }
        })
    };
    let text_response = |description: &str| {
        json!({
            "description": description,
            "content": { "text/plain": { "schema": { "type": "string" } } }
        })
    };

    json!({
        "openapi": "3.0.1",
        "info": info(docs),
        "paths": {
            "/todo": {
                "post": {
                    "tags": ["Todo"],
                    "summary": "Create item",
                    "requestBody": item_body(json!({
                        "id": 1,
                        "name": "First task",
                        "description": "Just description"
                    })),
                    "responses": {
                        "201": item_response("Return created item"),
                        "400": text_response("Return validation message")
                    }
                },
                "get": {
                    "tags": ["Todo"],
                    "summary": "Get one item by id",
                    "parameters": [id_param],
                    "responses": {
                        "200": item_response("Return one item by id"),
                        "400": text_response("Return error message"),
                        "404": text_response("Return not found message")
                    }
                },
                "put": {
                    "tags": ["Todo"],
                    "summary": "Update one item",
                    "requestBody": item_body(json!({
                        "id": 1,
                        "name": "New name",
                        "description": "New description"
                    })),
                    "responses": {
                        "200": item_response("Return updated item"),
                        "400": text_response("Return error message"),
                        "404": text_response("Return not found message")
                    }
                },
                "delete": {
                    "tags": ["Todo"],
                    "summary": "Delete one item by id",
                    "parameters": [id_param],
                    "responses": {
                        "200": item_response("Return deleted item"),
                        "400": text_response("Return error message"),
                        "404": text_response("Return not found message")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "TodoItem": {
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": { "type": "integer", "format": "int32", "description": "Identifier of item" },
                        "name": { "type": "string", "minLength": 1, "description": "Name of item" },
                        "description": { "type": "string", "nullable": true, "description": "Description of item" }
                    }
                }
            }
        }
    })
}

fn info(docs: &DocsConfig) -> Value {
    let mut info = json!({
        "title": docs.title,
        "description": docs.description,
        "version": docs.version
    });
    if let Some(terms) = &docs.terms_of_service {
        info["termsOfService"] = json!(terms);
    }
    if !docs.contact.is_empty() {
        let mut contact = serde_json::Map::new();
        let fields = [
            ("name", &docs.contact.name),
            ("url", &docs.contact.url),
            ("email", &docs.contact.email),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                contact.insert(key.to_string(), json!(value));
            }
        }
        info["contact"] = Value::Object(contact);
    }
    info
}

fn index_html(title: &str) -> String {
    let title = escape_html(title);
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <link rel="stylesheet" href="{SWAGGER_UI_CDN}/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="{SWAGGER_UI_CDN}/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{DOCUMENT_PATH}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
