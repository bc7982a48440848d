//! Writing resolved labels.

use std::io::{self, Write};

use hookstep_core::{ResolvedLabel, StepId};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StepLabel<'a> {
    step_id: &'a StepId,
    #[serde(flatten)]
    label: &'a ResolvedLabel,
}

/// Write one step's label in the requested format.
pub fn write_label<W: Write>(
    out: &mut W,
    step_id: &StepId,
    label: &ResolvedLabel,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}: {}", step_id, label.text().unwrap_or("ok")),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &StepLabel { step_id, label })?;
            writeln!(out)
        }
    }
}
