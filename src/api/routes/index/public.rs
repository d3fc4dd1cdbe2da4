//! OpenAPI description of the gateway
use serde_json::{Value, json};

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "chatgate",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Forwards chat messages to a hosted language model and logs each exchange."
        },
        "paths": {
            "/chat": {
                "post": {
                    "tags": ["Chatbot"],
                    "summary": "Send a message to the chatbot",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/ChatRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Reply from the chatbot",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ChatResponse" }
                                }
                            }
                        },
                        "400": {
                            "description": "User message is missing",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                }
                            }
                        },
                        "500": {
                            "description": "Failed to reach the completion service",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "ChatRequest": {
                    "type": "object",
                    "required": ["message"],
                    "properties": {
                        "message": { "type": "string", "example": "What is the capital of France?" }
                    }
                },
                "ChatResponse": {
                    "type": "object",
                    "properties": { "reply": { "type": "string" } }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": { "error": { "type": "string" } }
                }
            }
        }
    })
}
