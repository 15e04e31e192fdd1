//! Solution path rendering.
//!
//! Presentation only — the text format is not part of the engine contract
//! and may change freely.

use std::fmt::Display;

use wavefront_search::node::PathStep;

/// Render a reconstructed path as human-readable text.
///
/// The initial state prints first; each subsequent state is introduced by a
/// connector naming the action that produced it:
///
/// ```text
/// 312
/// 065
/// 748
///  |
///  | (6)
///  v
/// 312
/// 605
/// 748
/// ```
#[must_use]
pub fn render_path<S: Display, A: Display>(steps: &[PathStep<'_, S, A>]) -> String {
    let mut out = String::new();
    for step in steps {
        if let Some(action) = step.action {
            out.push_str(&format!("\n |\n | ({action})\n v\n"));
        }
        out.push_str(&step.state.to_string());
    }
    out
}
