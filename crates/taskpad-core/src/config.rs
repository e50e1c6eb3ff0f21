use std::fs;
use std::path::Path;

use anyhow::{
  Context,
  anyhow
};
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info
};

pub const DEFAULT_API_ROOT: &str =
  "/api/tasks";
pub const DEFAULT_CREATED_MESSAGE:
  &str = "New task has been created";
pub const DEFAULT_LOG_FILTER: &str =
  "info,taskpad_core=debug";

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct ClientConfig {
  /// Root of the task endpoints. A
  /// relative path targets the page's
  /// own origin.
  pub api_root:                   String,
  pub created_message:            String,
  /// Clears the confirmation message
  /// after this many milliseconds.
  pub message_timeout_ms:         Option<u32>,
  /// Push read, complete and delete
  /// failures into the notice list.
  /// When off they are only logged.
  pub report_background_failures: bool,
  pub log_filter:                 String
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_root:                   DEFAULT_API_ROOT
        .to_string(),
      created_message:            DEFAULT_CREATED_MESSAGE
        .to_string(),
      message_timeout_ms:         None,
      report_background_failures: true,
      log_filter:                 DEFAULT_LOG_FILTER
        .to_string()
    }
  }
}

impl ClientConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: Self =
      toml::from_str(text).context(
        "failed to parse client config"
      )?;
    cfg.normalize()?;
    debug!(
      api_root = %cfg.api_root,
      timeout = ?cfg.message_timeout_ms,
      report = cfg.report_background_failures,
      "parsed client config"
    );
    Ok(cfg)
  }

  #[tracing::instrument]
  pub fn load_file(
    path: &Path
  ) -> anyhow::Result<Self> {
    let text =
      fs::read_to_string(path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;
    info!(path = %path.display(), "loading client config");
    Self::from_toml_str(&text)
      .with_context(|| {
        format!(
          "invalid client config in {}",
          path.display()
        )
      })
  }

  /// Parses an embedded config,
  /// falling back to defaults when it
  /// is broken.
  pub fn load_embedded(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => {
        info!(
          api_root = %cfg.api_root,
          "loaded client config"
        );
        cfg
      }
      | Err(err) => {
        error!(error = %format!("{err:#}"), "failed to parse client config; using defaults");
        Self::default()
      }
    }
  }

  fn normalize(
    &mut self
  ) -> anyhow::Result<()> {
    let root = self
      .api_root
      .trim()
      .trim_end_matches('/');
    if root.is_empty() {
      return Err(anyhow!(
        "api_root cannot be empty"
      ));
    }
    self.api_root = root.to_string();

    if self.created_message.trim().is_empty()
    {
      self.created_message =
        DEFAULT_CREATED_MESSAGE
          .to_string();
    }
    if self.message_timeout_ms == Some(0)
    {
      self.message_timeout_ms = None;
    }
    Ok(())
  }
}
