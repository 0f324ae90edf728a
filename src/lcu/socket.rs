// Wamp event socket to the local client.
//
// One socket per connected session. After connecting, exactly one blanket
// subscription (`[5, "OnJsonApiEvent"]`) must be sent before any events flow.
// Frames arrive as `[opcode, eventName, {uri, data}]`; only OnJsonApiEvent
// frames are dispatchable and anything malformed is silently dropped, since
// the protocol is not strictly validated.

use base64::{engine::general_purpose, Engine};
use futures_util::{SinkExt, StreamExt};
use native_tls::TlsConnector;
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{Connector, MaybeTlsStream, WebSocketStream};
use tracing::debug;

use super::lockfile::LcuCredentials;
use crate::error::{Error, Result};

const SUBSCRIBE_ALL_FRAME: &str = "[5,\"OnJsonApiEvent\"]";

#[derive(Debug, Clone)]
pub struct LcuEvent {
  pub uri: String,
  pub data: Value,
}

pub struct LcuSocket {
  stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl LcuSocket {
  /// Connect the event socket. Transport failures surface as errors here and
  /// never past the orchestrator's retry loop.
  pub async fn connect(creds: &LcuCredentials) -> Result<Self> {
    let url = format!("wss://127.0.0.1:{}/", creds.port);
    let auth = general_purpose::STANDARD.encode(format!("riot:{}", creds.token));

    let tls = TlsConnector::builder()
      .danger_accept_invalid_certs(true)
      .build()?;

    let mut request = url
      .into_client_request()
      .map_err(|e| Error::Payload(format!("invalid websocket url: {}", e)))?;
    request.headers_mut().insert(
      "Authorization",
      format!("Basic {}", auth)
        .parse()
        .map_err(|_| Error::Payload("auth header not representable".to_string()))?,
    );
    request.headers_mut().insert(
      "Sec-WebSocket-Protocol",
      "wamp"
        .parse()
        .map_err(|_| Error::Payload("protocol header not representable".to_string()))?,
    );

    let (stream, _response) = tokio_tungstenite::connect_async_tls_with_config(
      request,
      None,
      false,
      Some(Connector::NativeTls(tls)),
    )
    .await?;

    Ok(LcuSocket { stream })
  }

  /// Send the blanket subscription. Must be called once before `next_event`.
  pub async fn subscribe_all(&mut self) -> Result<()> {
    self
      .stream
      .send(Message::Text(SUBSCRIBE_ALL_FRAME.into()))
      .await?;
    Ok(())
  }

  /// Next dispatchable event, or `None` once the connection is closed.
  /// Non-text frames and undecodable payloads are skipped, and a transport
  /// error during the read is reported as closed rather than raised - the
  /// retry policy lives in the orchestrator.
  pub async fn next_event(&mut self) -> Option<LcuEvent> {
    loop {
      match self.stream.next().await {
        Some(Ok(msg)) => {
          if let Some(event) = parse_event(msg) {
            return Some(event);
          }
        }
        Some(Err(e)) => {
          debug!("websocket read error, treating as closed: {}", e);
          return None;
        }
        None => return None,
      }
    }
  }

  pub async fn close(mut self) {
    let _ = self.stream.close(None).await;
  }
}

pub(crate) fn parse_event(msg: Message) -> Option<LcuEvent> {
  if !msg.is_text() {
    return None;
  }
  let text = msg.into_text().ok()?;
  parse_event_text(&text)
}

pub(crate) fn parse_event_text(text: &str) -> Option<LcuEvent> {
  let value: Value = serde_json::from_str(text).ok()?;
  let arr = value.as_array()?;
  if arr.len() < 3 {
    return None;
  }
  if arr[1].as_str() != Some("OnJsonApiEvent") {
    return None;
  }
  let envelope = arr[2].as_object()?;
  let uri = envelope.get("uri")?.as_str()?.to_string();
  let data = envelope.get("data").cloned().unwrap_or(Value::Null);
  Some(LcuEvent { uri, data })
}
