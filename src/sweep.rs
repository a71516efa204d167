//! The interactive sweep: `SCAN → EXTRACT → DETECT → CONFIRM → MOVE`.
//!
//! All reads finish before the first move, so the detector always sees the corpus as it was when
//! the run started. Console IO goes through generic reader/writer handles so the whole state
//! machine can run against in-memory buffers.
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::{
    config::SweepConfig,
    console::{is_affirmative, Locale},
    detect::find_orphans,
    error::BuildonomyError,
    paths::display_relative,
    quarantine::{quarantine_notes, MovedNote},
    scan::scan_notes,
};

/// Result of the non-interactive half of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    pub notes_scanned: usize,
    /// Orphaned notes, sorted by path.
    pub candidates: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    NoOrphans,
    /// The user declined; nothing was moved.
    Aborted { candidates: Vec<PathBuf> },
    Quarantined { moved: Vec<MovedNote> },
}

/// SCAN, EXTRACT and DETECT. Reads every note and touches nothing.
pub fn plan_sweep(config: &SweepConfig) -> Result<SweepPlan, BuildonomyError> {
    let notes = scan_notes(config)?;
    let candidates = find_orphans(&notes, config);
    Ok(SweepPlan {
        notes_scanned: notes.len(),
        candidates,
    })
}

/// Runs a full sweep, listing candidates on `output` and reading the confirmation from `input`.
///
/// Returns `Ok` for every completed path, including an abort. End of input counts as "no".
pub fn run_sweep<R: BufRead, W: Write>(
    config: &SweepConfig,
    locale: Locale,
    input: &mut R,
    output: &mut W,
) -> Result<SweepOutcome, BuildonomyError> {
    let plan = plan_sweep(config)?;
    if plan.candidates.is_empty() {
        writeln!(output, "{}", locale.no_orphans())?;
        return Ok(SweepOutcome::NoOrphans);
    }

    writeln!(output, "{}", locale.orphans_header())?;
    for candidate in plan.candidates.iter() {
        writeln!(output, "- {}", display_relative(candidate, &config.root))?;
    }

    write!(output, "{}", locale.confirm_prompt())?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    if !is_affirmative(&answer) {
        tracing::debug!("Sweep declined with answer {:?}", answer.trim());
        writeln!(output, "{}", locale.aborted())?;
        return Ok(SweepOutcome::Aborted {
            candidates: plan.candidates,
        });
    }

    let moved = quarantine_notes(&plan.candidates, config.quarantine_dir(), |record| {
        writeln!(
            output,
            "{}",
            locale.moved(
                &display_relative(&record.from, &config.root),
                &config.quarantine_dir_name
            )
        )?;
        Ok(())
    })?;
    Ok(SweepOutcome::Quarantined { moved })
}
