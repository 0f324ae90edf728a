// Application orchestrator. Owns the lifecycle:
//
//   Disconnected -> (bootstrap: lockfile/process credentials + REST probe)
//   Connected    -> (socket connect + blanket subscribe)
//   Listening    -> accepted selections hand off to the resolve/apply task
//   Stopped      -> on shutdown signal, with socket and worker torn down
//
// The receive loop never does slow work inline: accepted selections go
// through a single-slot latest-wins channel, so a slow provider fetch can
// not back up the socket, and a superseded pick is simply overwritten
// before the worker gets to it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::builds::{champions, BuildResolver, UggProvider};
use crate::config::Config;
use crate::lcu::{lockfile, EventDispatcher, LcuCredentials, LcuRestClient, LcuSocket};
use crate::picks::{PickResolver, Selection};
use crate::runes::RunePageManager;
use crate::status::{Severity, StatusSink};
use crate::Result;

const CHAMP_SELECT_SESSION_URI: &str = "/lol-champ-select/v1/session";
const GAMEFLOW_PHASE_URI: &str = "/lol-gameflow/v1/gameflow-phase";

const RECONNECT_DELAY: Duration = Duration::from_secs(2);

enum SessionEnd {
  /// Socket closed or client went away; retry from bootstrap.
  Disconnected,
  /// Explicit stop request.
  Stopped,
}

pub struct App {
  config: Config,
  sink: Arc<dyn StatusSink>,
}

impl App {
  pub fn new(config: Config, sink: Arc<dyn StatusSink>) -> Self {
    App { config, sink }
  }

  /// Run until `shutdown` flips to true. Bootstrap failures poll forever by
  /// design; everything else degrades to a status message and a reconnect.
  pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> anyhow::Result<()> {
    loop {
      let Some(creds) = self.bootstrap(&mut shutdown).await else {
        break;
      };

      match self.run_session(&creds, &mut shutdown).await {
        Ok(SessionEnd::Stopped) => break,
        Ok(SessionEnd::Disconnected) => {
          self
            .sink
            .update_status("Disconnected from League client", Severity::Info);
        }
        Err(e) => {
          warn!("session ended with error: {}", e);
          self
            .sink
            .update_status(&format!("Connection error: {}", e), Severity::Error);
        }
      }
      tokio::time::sleep(RECONNECT_DELAY).await;
    }

    self.sink.update_status("Stopped", Severity::Info);
    Ok(())
  }

  // Fixed-interval poll until the client is up and its REST surface answers.
  // Returns None when shutdown was requested while waiting.
  async fn bootstrap(&self, shutdown: &mut watch::Receiver<bool>) -> Option<LcuCredentials> {
    let poll = Duration::from_secs(self.config.connect_poll_secs.max(1));
    loop {
      if *shutdown.borrow() {
        return None;
      }

      if let Some(creds) = lockfile::discover(&self.config.league_dirs) {
        match LcuRestClient::new(&creds) {
          Ok(rest) if rest.verify().await.is_ok() => return Some(creds),
          // Stale lockfile or client still starting up; keep polling.
          _ => {}
        }
      }

      self
        .sink
        .update_status("Waiting for League of Legends client...", Severity::Info);
      tokio::select! {
        _ = tokio::time::sleep(poll) => {}
        _ = shutdown.changed() => {}
      }
    }
  }

  async fn run_session(
    &self,
    creds: &LcuCredentials,
    shutdown: &mut watch::Receiver<bool>,
  ) -> Result<SessionEnd> {
    let rest = Arc::new(LcuRestClient::new(creds)?);

    if let Ok(summoner) = rest.current_summoner().await {
      if let Some(name) = summoner.get("displayName").and_then(|v| v.as_str()) {
        self
          .sink
          .update_status(&format!("Connected - {}", name), Severity::Success);
      }
    }

    let provider = UggProvider::new();
    let patch = provider.current_patch(&self.config.pinned_patch).await;
    info!("using patch tag {}", patch);

    let mut socket = LcuSocket::connect(creds).await?;
    socket.subscribe_all().await?;
    self
      .sink
      .update_status("Waiting for champion selection...", Severity::Info);

    // Resolve/apply worker, fed by a latest-wins slot.
    let (selection_tx, selection_rx) = watch::channel::<Option<Selection>>(None);
    let resolver = BuildResolver::new(Box::new(provider));
    let pages = RunePageManager::new(rest.clone(), &self.config.provider_label);
    let worker = tokio::spawn(resolve_and_apply_loop(
      selection_rx,
      resolver,
      pages,
      self.sink.clone(),
      patch,
    ));

    let dispatcher =
      EventDispatcher::new(Duration::from_secs(self.config.wait_for_timeout_secs.max(1)));

    let picks = PickResolver::new(self.config.act_on_hover, &self.config.default_role);
    {
      let tx = selection_tx.clone();
      dispatcher.on(CHAMP_SELECT_SESSION_URI, move |data| {
        if let Some(selection) = picks.observe(data) {
          info!(
            "accepted selection: champion {} ({})",
            selection.champion_id, selection.role
          );
          let _ = tx.send(Some(selection));
        }
        Ok(())
      });
    }

    {
      let sink = self.sink.clone();
      dispatcher.on(GAMEFLOW_PHASE_URI, move |data| {
        if let Some(phase) = data.as_str() {
          sink.update_status(&format!("Phase: {}", phase), Severity::Info);
        }
        Ok(())
      });
    }

    // Started mid-champ-select: the phase event already fired, so seed the
    // resolver once from REST instead of waiting for the next update.
    if let Ok(phase) = rest.gameflow_phase().await {
      if phase == "ChampSelect" {
        if let Ok(session) = rest.champ_select_session().await {
          dispatcher.dispatch(CHAMP_SELECT_SESSION_URI, &session);
        }
      }
    }

    // Lockfile removal means the client exited even if the socket lingers.
    // Only meaningful when credentials came from a lockfile in the first
    // place (the process-scan fallback has nothing on disk to watch).
    let had_lockfile = lockfile::lockfile_present(&self.config.league_dirs);
    let mut lockfile_check = tokio::time::interval(Duration::from_secs(2));
    lockfile_check.tick().await; // immediate first tick

    let end = loop {
      tokio::select! {
        _ = shutdown.changed() => {
          if *shutdown.borrow() {
            break SessionEnd::Stopped;
          }
        }
        _ = lockfile_check.tick() => {
          if had_lockfile && !lockfile::lockfile_present(&self.config.league_dirs) {
            break SessionEnd::Disconnected;
          }
        }
        event = socket.next_event() => {
          match event {
            Some(event) => dispatcher.dispatch(&event.uri, &event.data),
            None => break SessionEnd::Disconnected,
          }
        }
      }
    };

    // In-flight resolve/apply work is abandoned with the session; a remote
    // call racing the teardown fails gracefully inside the worker.
    worker.abort();
    socket.close().await;
    Ok(end)
  }
}

async fn resolve_and_apply_loop(
  mut selections: watch::Receiver<Option<Selection>>,
  resolver: BuildResolver,
  pages: RunePageManager,
  sink: Arc<dyn StatusSink>,
  patch: String,
) {
  while selections.changed().await.is_ok() {
    let Some(selection) = selections.borrow_and_update().clone() else {
      continue;
    };
    let champion = champions::display_name(selection.champion_id);

    sink.update_status(&format!("Fetching {} build...", champion), Severity::Working);
    let build = resolver
      .resolve(selection.champion_id, &selection.role, &patch)
      .await;
    sink.display_build(&champion, &selection.role, &build);

    match pages
      .apply(&build.runes, selection.champion_id, &selection.role)
      .await
    {
      Ok(()) => sink.update_status(
        &format!("Runes applied for {} ({})", champion, selection.role),
        Severity::Success,
      ),
      Err(e) => sink.update_status(
        &format!("Failed to apply runes for {}: {}", champion, e),
        Severity::Error,
      ),
    }
  }
}
