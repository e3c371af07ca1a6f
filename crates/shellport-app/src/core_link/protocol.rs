//! JSON messages exchanged with the core.
//!
//! Requests carry an `id`, a `method` and optional `params`. Everything the
//! port sends is tagged with `type`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shellport_common::{CallbackId, PortError, PortId};
use shellport_platform::{GeneratedEventRequest, InputEvent};
use shellport_webview::{CoreSink, PortBridge, WindowFactory, WindowSurface};

/// A request from the core, before its method is resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRequest {
    pub id: u64,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// A request the port knows how to execute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum CoreCall {
    Make {
        identifier: String,
    },
    GenerateInputEvent(GeneratedEventRequest),
    MinibufferEvaluateJavascript {
        window_id: String,
        script: String,
    },
    WindowSetTitle {
        window_id: String,
        title: String,
    },
    WindowDelete {
        window_id: String,
    },
    WindowExists {
        window_id: String,
    },
    WindowActive,
    SetMinibufferHeight {
        window_id: String,
        height: u32,
    },
}

impl CoreCall {
    pub fn method(&self) -> &'static str {
        match self {
            CoreCall::Make { .. } => "make",
            CoreCall::GenerateInputEvent(_) => "generate_input_event",
            CoreCall::MinibufferEvaluateJavascript { .. } => "minibuffer_evaluate_javascript",
            CoreCall::WindowSetTitle { .. } => "window_set_title",
            CoreCall::WindowDelete { .. } => "window_delete",
            CoreCall::WindowExists { .. } => "window_exists",
            CoreCall::WindowActive => "window_active",
            CoreCall::SetMinibufferHeight { .. } => "set_minibuffer_height",
        }
    }
}

/// A parsed request: the id to answer plus the call.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreRequest {
    pub id: u64,
    pub call: CoreCall,
}

/// Why an inbound frame could not become a [`CoreRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Not a request at all; there is no id to answer.
    Malformed(String),
    /// A request with an unknown method or bad params.
    Rejected { id: u64, message: String },
}

pub fn parse_request(text: &str) -> Result<CoreRequest, RequestError> {
    let raw: RawRequest =
        serde_json::from_str(text).map_err(|e| RequestError::Malformed(e.to_string()))?;
    let tagged = if raw.params.is_null() {
        json!({ "method": raw.method })
    } else {
        json!({ "method": raw.method, "params": raw.params })
    };
    match serde_json::from_value::<CoreCall>(tagged) {
        Ok(call) => Ok(CoreRequest { id: raw.id, call }),
        Err(e) => Err(RequestError::Rejected {
            id: raw.id,
            message: format!("{}: {e}", raw.method),
        }),
    }
}

/// Everything the port sends to the core.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PortMessage {
    /// First message on every connection.
    Hello {
        port_id: PortId,
        version: String,
        profile: String,
    },
    Reply {
        id: u64,
        result: Value,
    },
    Error {
        id: u64,
        message: String,
    },
    PushInputEvent(InputEvent),
    MinibufferJavascriptCallBack {
        window_id: String,
        result: Value,
        callback_id: CallbackId,
    },
}

impl PortMessage {
    pub fn hello(port_id: PortId, profile: &str) -> Self {
        PortMessage::Hello {
            port_id,
            version: env!("CARGO_PKG_VERSION").to_string(),
            profile: profile.to_string(),
        }
    }

    pub fn answer(id: u64, result: Result<Value, PortError>) -> Self {
        match result {
            Ok(result) => PortMessage::Reply { id, result },
            Err(e) => PortMessage::Error {
                id,
                message: e.to_string(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Run `call` against the bridge and produce the reply payload.
///
/// `factory` is only used by `make`.
pub fn execute<S, C, F>(
    bridge: &mut PortBridge<S, C>,
    factory: &mut F,
    call: &CoreCall,
) -> Result<Value, PortError>
where
    S: WindowSurface,
    C: CoreSink,
    F: WindowFactory<Surface = S>,
{
    let result = match call {
        CoreCall::Make { identifier } => json!(bridge.make(factory, identifier)?),
        CoreCall::GenerateInputEvent(request) => {
            bridge.generate_input_event(request)?;
            json!(true)
        }
        CoreCall::MinibufferEvaluateJavascript { window_id, script } => {
            json!(bridge.minibuffer_evaluate_javascript(window_id, script)?)
        }
        CoreCall::WindowSetTitle { window_id, title } => {
            json!(bridge.window_set_title(window_id, title)?)
        }
        CoreCall::WindowDelete { window_id } => json!(bridge.window_delete(window_id)?),
        CoreCall::WindowExists { window_id } => json!(bridge.window_exists(window_id)),
        CoreCall::WindowActive => json!(bridge.window_active()),
        CoreCall::SetMinibufferHeight { window_id, height } => {
            json!(bridge.set_minibuffer_height(window_id, *height)?)
        }
    };
    Ok(result)
}
