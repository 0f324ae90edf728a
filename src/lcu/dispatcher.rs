// Event dispatcher: demultiplexes frames by topic path to registered
// handlers. Handlers for the same pattern fire in registration order, a
// failing handler never stops the rest, and patterns containing `*` match
// any topic the pattern covers from the start of the path.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::error;

use crate::error::{Error, Result};

pub type Handler = Box<dyn FnMut(&Value) -> anyhow::Result<()> + Send>;

enum Registration {
  Persistent { pattern: String, handler: Handler },
  // One-shot waiter; the sender is taken on fire so retain() can drop it.
  Once {
    id: u64,
    pattern: String,
    tx: Option<oneshot::Sender<Value>>,
  },
}

struct Inner {
  registrations: Vec<Registration>,
  next_once_id: u64,
}

#[derive(Clone)]
pub struct EventDispatcher {
  inner: Arc<Mutex<Inner>>,
  default_timeout: Duration,
}

impl EventDispatcher {
  pub fn new(default_timeout: Duration) -> Self {
    EventDispatcher {
      inner: Arc::new(Mutex::new(Inner {
        registrations: Vec::new(),
        next_once_id: 0,
      })),
      default_timeout,
    }
  }

  /// Register a handler for a topic pattern. A pattern without `*` matches
  /// only its exact topic path.
  pub fn on<F>(&self, pattern: &str, handler: F)
  where
    F: FnMut(&Value) -> anyhow::Result<()> + Send + 'static,
  {
    let mut inner = self.inner.lock().unwrap();
    inner.registrations.push(Registration::Persistent {
      pattern: pattern.to_string(),
      handler: Box::new(handler),
    });
  }

  /// Invoke every handler whose pattern matches `topic`, in registration
  /// order. Handler failures are logged and isolated. Fired one-shot
  /// waiters are unregistered before this returns.
  pub fn dispatch(&self, topic: &str, data: &Value) {
    let mut inner = self.inner.lock().unwrap();
    let mut fired_once = false;

    for registration in inner.registrations.iter_mut() {
      match registration {
        Registration::Persistent { pattern, handler } => {
          if pattern_matches(pattern, topic) {
            if let Err(e) = handler(data) {
              error!("handler for {} failed on {}: {:#}", pattern, topic, e);
            }
          }
        }
        Registration::Once { pattern, tx, .. } => {
          if tx.is_some() && pattern_matches(pattern, topic) {
            if let Some(sender) = tx.take() {
              // Waiter may have timed out and dropped its receiver already.
              let _ = sender.send(data.clone());
            }
            fired_once = true;
          }
        }
      }
    }

    if fired_once {
      inner
        .registrations
        .retain(|r| !matches!(r, Registration::Once { tx: None, .. }));
    }
  }

  /// Suspend until the next event matching `topic` arrives, or until the
  /// timeout elapses. The transient registration is removed on both paths.
  pub async fn wait_for(&self, topic: &str, timeout: Option<Duration>) -> Result<Value> {
    let timeout = timeout.unwrap_or(self.default_timeout);
    let (tx, rx) = oneshot::channel();

    let id = {
      let mut inner = self.inner.lock().unwrap();
      let id = inner.next_once_id;
      inner.next_once_id += 1;
      inner.registrations.push(Registration::Once {
        id,
        pattern: topic.to_string(),
        tx: Some(tx),
      });
      id
    };

    match tokio::time::timeout(timeout, rx).await {
      Ok(Ok(value)) => Ok(value),
      // Timed out, or the sender vanished some other way: unregister.
      _ => {
        let mut inner = self.inner.lock().unwrap();
        inner
          .registrations
          .retain(|r| !matches!(r, Registration::Once { id: other, .. } if *other == id));
        Err(Error::WaitTimeout(topic.to_string()))
      }
    }
  }

  #[cfg(test)]
  fn registration_count(&self) -> usize {
    self.inner.lock().unwrap().registrations.len()
  }
}

/// Topic pattern match. Patterns without `*` require equality; with `*`,
/// each literal piece must appear in order, anchored at the start of the
/// topic, and `*` spans any remainder (so `/foo/*` covers `/foo/bar/baz`).
pub(crate) fn pattern_matches(pattern: &str, topic: &str) -> bool {
  if !pattern.contains('*') {
    return pattern == topic;
  }

  let mut pos = 0;
  for (i, piece) in pattern.split('*').enumerate() {
    if piece.is_empty() {
      continue;
    }
    if i == 0 {
      if !topic.starts_with(piece) {
        return false;
      }
      pos = piece.len();
    } else {
      match topic[pos..].find(piece) {
        Some(offset) => pos += offset + piece.len(),
        None => return false,
      }
    }
  }
  true
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use std::sync::atomic::{AtomicUsize, Ordering};

  fn dispatcher() -> EventDispatcher {
    EventDispatcher::new(Duration::from_secs(30))
  }

  #[test]
  fn exact_match_only_fires_for_its_topic() {
    let d = dispatcher();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_clone = hits.clone();
    d.on("/lol-champ-select/v1/session", move |_| {
      hits_clone.fetch_add(1, Ordering::SeqCst);
      Ok(())
    });

    d.dispatch("/lol-champ-select/v1/session", &json!({}));
    d.dispatch("/lol-gameflow/v1/gameflow-phase", &json!({}));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn wildcard_matches_prefixed_topics() {
    assert!(pattern_matches("/foo/*", "/foo/bar"));
    assert!(pattern_matches("/foo/*", "/foo/bar/baz"));
    assert!(!pattern_matches("/foo/*", "/baz/bar"));
    assert!(pattern_matches("/lol-champ-select/*", "/lol-champ-select/v1/session"));
    assert!(pattern_matches("/foo/*/session", "/foo/v1/session"));
    assert!(!pattern_matches("/foo/*/session", "/foo/v1/timer"));
  }

  #[test]
  fn wildcard_handler_fires_alongside_exact() {
    let d = dispatcher();
    let hits = Arc::new(AtomicUsize::new(0));

    let h = hits.clone();
    d.on("/foo/bar", move |_| {
      h.fetch_add(1, Ordering::SeqCst);
      Ok(())
    });
    let h = hits.clone();
    d.on("/foo/*", move |_| {
      h.fetch_add(10, Ordering::SeqCst);
      Ok(())
    });

    d.dispatch("/foo/bar", &json!({}));
    assert_eq!(hits.load(Ordering::SeqCst), 11);
  }

  #[test]
  fn failing_handler_does_not_stop_later_handlers() {
    let d = dispatcher();
    let hits = Arc::new(AtomicUsize::new(0));

    d.on("/topic", |_| anyhow::bail!("boom"));
    let h = hits.clone();
    d.on("/topic", move |_| {
      h.fetch_add(1, Ordering::SeqCst);
      Ok(())
    });

    d.dispatch("/topic", &json!({}));
    d.dispatch("/topic", &json!({}));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
  }

  #[test]
  fn handlers_fire_in_registration_order() {
    let d = dispatcher();
    let order = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second", "third"] {
      let order = order.clone();
      d.on("/topic", move |_| {
        order.lock().unwrap().push(tag);
        Ok(())
      });
    }

    d.dispatch("/topic", &json!({}));
    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
  }

  #[tokio::test]
  async fn wait_for_resolves_and_unregisters() {
    let d = dispatcher();
    let waiter = {
      let d = d.clone();
      tokio::spawn(async move { d.wait_for("/one-shot", Some(Duration::from_secs(5))).await })
    };

    // Give the waiter a moment to register.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(d.registration_count(), 1);

    d.dispatch("/one-shot", &json!({"n": 7}));
    let value = waiter.await.unwrap().unwrap();
    assert_eq!(value["n"], 7);
    assert_eq!(d.registration_count(), 0);

    // A second identical event finds no waiter left.
    d.dispatch("/one-shot", &json!({"n": 8}));
    assert_eq!(d.registration_count(), 0);
  }

  #[tokio::test]
  async fn wait_for_timeout_unregisters() {
    let d = dispatcher();
    let before = d.registration_count();

    let result = d.wait_for("/never", Some(Duration::from_millis(30))).await;
    assert!(matches!(result, Err(Error::WaitTimeout(_))));
    assert_eq!(d.registration_count(), before);
  }
}
