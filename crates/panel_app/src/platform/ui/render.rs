use std::collections::HashMap;
use std::io::{self, Write};

use panel_core::{PanelPhase, PanelViewModel};

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    SetText {
        element: ElementId,
        text: String,
    },
    SetImageSource {
        element: ElementId,
        source: Option<String>,
    },
}

pub fn render(view: &PanelViewModel) -> Vec<SurfaceCommand> {
    let phase_label = match view.phase {
        PanelPhase::Idle => "Idle",
        PanelPhase::Submitting => "Submitting",
    };
    let status_text = match &view.selected_file_name {
        Some(name) => format!(
            "{} | in flight: {} | file: {}",
            phase_label, view.in_flight, name
        ),
        None => format!("{} | in flight: {}", phase_label, view.in_flight),
    };

    vec![
        SurfaceCommand::SetText {
            element: LABEL_STATUS,
            text: status_text,
        },
        SurfaceCommand::SetImageSource {
            element: IMAGE_BEFORE,
            source: view.before_preview.clone(),
        },
        SurfaceCommand::SetImageSource {
            element: IMAGE_AFTER,
            source: view.after_preview.clone(),
        },
        SurfaceCommand::SetText {
            element: LABEL_RESULT,
            text: view.result_text.clone(),
        },
    ]
}

/// Prints surface updates as `[element] value`, skipping unchanged elements.
pub struct TerminalSurface<W: Write> {
    out: W,
    shown: HashMap<ElementId, String>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown: HashMap::new(),
        }
    }

    pub fn apply(&mut self, commands: &[SurfaceCommand]) -> io::Result<()> {
        for command in commands {
            let (element, display) = match command {
                SurfaceCommand::SetText { element, text } => (*element, text.clone()),
                SurfaceCommand::SetImageSource { element, source } => (
                    *element,
                    source
                        .as_deref()
                        .map(summarize_source)
                        .unwrap_or_else(|| "(none)".to_string()),
                ),
            };
            if self.shown.get(&element) == Some(&display) {
                continue;
            }
            writeln!(self.out, "[{element}] {display}")?;
            self.shown.insert(element, display);
        }
        self.out.flush()
    }

    /// Print everything regardless of what was shown before.
    pub fn apply_all(&mut self, commands: &[SurfaceCommand]) -> io::Result<()> {
        self.shown.clear();
        self.apply(commands)
    }

    pub fn note(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn summarize_source(source: &str) -> String {
    match source.split_once(',') {
        Some((header, payload)) if header.starts_with("data:") => {
            format!("{header},... ({} base64 chars)", payload.len())
        }
        _ => source.to_string(),
    }
}
