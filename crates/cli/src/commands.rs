use anyhow::{Context, Result};
use roadmap_compiler::{project, CompilerConfig, RoadmapAssembler, RoadmapRequest};
use roadmap_protocol::{RoadmapModel, ViewerClass};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use crate::response::{CommandResponse, ResponseMeta};
use crate::{AssembleArgs, ProjectArgs, SectionsArgs};

pub(crate) fn run_assemble(args: AssembleArgs) -> Result<CommandResponse> {
    let started = Instant::now();
    let assembler = load_assembler(args.config.as_deref())?;

    let raw = read_input(&args.input)?;
    let request =
        RoadmapRequest::from_json_slice(&raw).context("Invalid roadmap request JSON")?;
    let model = assembler
        .assemble(&request.normalize())
        .context("Could not assemble roadmap")?;

    let viewer = args.viewer.map(ViewerClass::from);
    let model = match viewer {
        Some(viewer) => project(&model, viewer),
        None => model,
    };
    log::info!(
        "Assembled roadmap {} with {} sections",
        model.id,
        model.sections.len()
    );

    Ok(CommandResponse::ok(
        serde_json::to_value(&model)?,
        ResponseMeta {
            config_path: config_label(args.config.as_deref()),
            viewer: viewer.map(|v| v.to_string()),
            duration_ms: Some(elapsed_ms(started)),
            ..Default::default()
        },
    ))
}

pub(crate) fn run_project(args: ProjectArgs) -> Result<CommandResponse> {
    let started = Instant::now();
    let raw = read_input(&args.input)?;
    let model: RoadmapModel =
        serde_json::from_slice(&raw).context("Invalid roadmap JSON")?;

    let viewer = ViewerClass::from(args.viewer);
    let projected = project(&model, viewer);

    Ok(CommandResponse::ok(
        serde_json::to_value(&projected)?,
        ResponseMeta {
            viewer: Some(viewer.to_string()),
            duration_ms: Some(elapsed_ms(started)),
            ..Default::default()
        },
    ))
}

pub(crate) fn run_sections(args: SectionsArgs) -> Result<CommandResponse> {
    let assembler = load_assembler(args.config.as_deref())?;
    Ok(CommandResponse::ok(
        serde_json::to_value(assembler.contract().sections())?,
        ResponseMeta {
            config_path: config_label(args.config.as_deref()),
            ..Default::default()
        },
    ))
}

fn load_assembler(config_path: Option<&Path>) -> Result<RoadmapAssembler> {
    let config = match config_path {
        Some(path) => CompilerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CompilerConfig::default(),
    };
    Ok(RoadmapAssembler::from_config(config)?)
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let bytes = if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read JSON from stdin")?;
        buffer
    } else {
        fs::read(path).with_context(|| format!("Failed to read JSON from {}", path.display()))?
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        anyhow::bail!("Input is empty. Provide a JSON file or pipe JSON via stdin.");
    }
    Ok(bytes)
}

fn config_label(path: Option<&Path>) -> Option<String> {
    path.map(|p| p.display().to_string())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
