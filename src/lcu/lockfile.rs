// Bootstrap credential discovery.
//
// The client writes a colon-delimited lockfile (`name:pid:port:token:protocol`)
// into its install directory; reading it is the reliable path. When the
// lockfile is unreadable we fall back to scanning the client process command
// line for `--app-port` and `--remoting-auth-token`.

use std::fs;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use sysinfo::System;

const LOCKFILE_NAMES: [&str; 3] = ["lockfile", "LeagueClientUx.lockfile", "LeagueClient.lockfile"];

const CLIENT_PROCESS_NAMES: [&str; 4] = [
  "LeagueClientUx.exe",
  "LeagueClient.exe",
  "LeagueClientUx",
  "LeagueClient",
];

static PORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"--app-port=(\d+)").unwrap());
static TOKEN_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"--remoting-auth-token=([\w-]+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcuCredentials {
  pub port: u16,
  pub token: String,
}

/// Locate the running client's port and auth token. Returns None while the
/// client is not up; the orchestrator polls this.
pub fn discover(league_dirs: &[PathBuf]) -> Option<LcuCredentials> {
  from_lockfile(league_dirs).or_else(from_process)
}

fn from_lockfile(league_dirs: &[PathBuf]) -> Option<LcuCredentials> {
  for dir in league_dirs {
    for name in LOCKFILE_NAMES {
      let path = dir.join(name);
      if let Ok(content) = fs::read_to_string(&path) {
        if let Some(creds) = parse_lockfile(&content) {
          return Some(creds);
        }
      }
    }
  }
  None
}

fn from_process() -> Option<LcuCredentials> {
  let mut sys = System::new();
  sys.refresh_processes();

  for process in sys.processes().values() {
    if !CLIENT_PROCESS_NAMES.contains(&process.name()) {
      continue;
    }
    let cmdline = process.cmd().join(" ");
    let port = PORT_RE
      .captures(&cmdline)
      .and_then(|c| c[1].parse::<u16>().ok());
    let token = TOKEN_RE.captures(&cmdline).map(|c| c[1].to_string());
    if let (Some(port), Some(token)) = (port, token) {
      return Some(LcuCredentials { port, token });
    }
  }
  None
}

pub(crate) fn parse_lockfile(content: &str) -> Option<LcuCredentials> {
  let parts: Vec<&str> = content.trim().split(':').collect();
  if parts.len() < 5 {
    return None;
  }
  let port = parts[2].parse::<u16>().ok()?;
  if parts[3].is_empty() {
    return None;
  }
  Some(LcuCredentials {
    port,
    token: parts[3].to_string(),
  })
}

/// True while the lockfile is still present in any candidate directory.
/// Its removal means the client exited and the event loop should stop.
pub fn lockfile_present(league_dirs: &[PathBuf]) -> bool {
  league_dirs
    .iter()
    .any(|dir| LOCKFILE_NAMES.iter().any(|name| dir.join(name).exists()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_well_formed_lockfile() {
    let creds = parse_lockfile("LeagueClient:12345:54321:secret-token:https").unwrap();
    assert_eq!(creds.port, 54321);
    assert_eq!(creds.token, "secret-token");
  }

  #[test]
  fn tolerates_trailing_newline() {
    let creds = parse_lockfile("LeagueClient:9:443:tok:https\n").unwrap();
    assert_eq!(creds.port, 443);
  }

  #[test]
  fn rejects_truncated_content() {
    assert!(parse_lockfile("LeagueClient:12345:54321").is_none());
    assert!(parse_lockfile("").is_none());
  }

  #[test]
  fn rejects_non_numeric_port() {
    assert!(parse_lockfile("LeagueClient:12345:notaport:tok:https").is_none());
  }

  #[test]
  fn rejects_empty_token() {
    assert!(parse_lockfile("LeagueClient:12345:54321::https").is_none());
  }
}
