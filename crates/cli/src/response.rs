use anyhow::Result;
use roadmap_protocol::ROADMAP_SCHEMA_VERSION;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize, Default)]
pub struct ResponseMeta {
    pub schema_version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Envelope for everything the CLI prints on stdout.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub status: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Value,
    pub meta: ResponseMeta,
}

impl CommandResponse {
    pub fn ok(data: Value, meta: ResponseMeta) -> Self {
        Self {
            status: CommandStatus::Ok,
            message: None,
            data,
            meta: ResponseMeta {
                schema_version: ROADMAP_SCHEMA_VERSION,
                ..meta
            },
        }
    }

    pub fn error(err: &anyhow::Error) -> Self {
        Self {
            status: CommandStatus::Error,
            message: Some(format!("{err:#}")),
            data: Value::Null,
            meta: ResponseMeta {
                schema_version: ROADMAP_SCHEMA_VERSION,
                ..Default::default()
            },
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.status, CommandStatus::Error)
    }

    pub fn print(&self, pretty: bool) -> Result<()> {
        let output = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        print_stdout(&output)
    }
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}
