//! Human rendering of the two session views.
//!
//! The core hands over `StepContent` and a `NavSnapshot`; everything
//! visual happens here. Writers are generic so session tests can render
//! into a buffer.

use casewalk_nav::{NavSnapshot, StepContent};
use casewalk_store::CaseSummary;
use std::io::{self, Write};

/// The case-selection view: the index in presentation order.
pub fn write_selector(out: &mut impl Write, cases: &[CaseSummary]) -> io::Result<()> {
    writeln!(out)?;
    if cases.is_empty() {
        writeln!(out, "  No cases available")?;
    } else {
        writeln!(out, "  Cases:")?;
        for summary in cases {
            writeln!(out, "    - {}  [{}]", summary.display_title(), summary.id)?;
        }
    }
    writeln!(out, "  Commands: pick ID | quit")
}

/// The walking view: one step of one case, plus the navigation chrome.
pub fn write_step(
    out: &mut impl Write,
    title: &str,
    content: &StepContent,
    snapshot: &NavSnapshot,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  Case: {title}")?;
    writeln!(out, "  Step {} of 9: {}", content.step, content.heading)?;
    for bullet in &content.body {
        writeln!(out, "    - {}", bullet.text)?;
        for subline in &bullet.sublines {
            writeln!(out, "        {subline}")?;
        }
        if let Some(note) = &bullet.note {
            writeln!(out, "        note: {note}")?;
        }
    }
    if snapshot.at_end {
        writeln!(out, "  End of Case")?;
    }
    writeln!(out, "  Commands: {}", controls(snapshot))
}

/// Only controls that currently do something are offered; Previous is
/// hidden at step 1 and Next at step 9.
fn controls(snapshot: &NavSnapshot) -> String {
    let mut commands: Vec<&str> = Vec::new();
    if snapshot.can_previous {
        commands.push("previous");
    }
    if snapshot.can_next {
        commands.push("next");
    }
    commands.push("case ID");
    commands.push("exit");
    commands.push("quit");
    commands.join(" | ")
}
