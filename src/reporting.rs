// src/reporting.rs
//! Operator-facing console output: fatal integrity/stability reports and the
//! end-of-run summary.
//!
//! Fatal reports are exhaustive by contract: every offending identifier in
//! one report, with competing slugs and best-effort mentions of the broken id
//! found in page bodies, so the operator fixes the corpus in one pass.

use colored::Colorize;

use crate::compiler::CompileStats;
use crate::corpus::Corpus;
use crate::registry::claims::IdConflict;
use crate::registry::stability::Reassignment;

/// Prints every id conflict with the slugs competing for it.
pub fn print_conflicts(conflicts: &[IdConflict], corpus: &Corpus) {
    eprintln!(
        "{}",
        format!("✗ {} numeric id conflict(s)", conflicts.len())
            .red()
            .bold()
    );
    for conflict in conflicts {
        eprintln!(
            "  {} claimed by: {}",
            conflict.id.yellow(),
            conflict.slugs.join(", ")
        );
        print_mentions(corpus, &conflict.id);
    }
    eprintln!("{}", "No identifiers were changed. Fix the records and re-run.".red());
}

/// Prints every stability violation (id moved to a different slug).
pub fn print_reassignments(moved: &[Reassignment], corpus: &Corpus, allowed: bool) {
    let header = format!("{} identifier reassignment(s)", moved.len());
    if allowed {
        eprintln!("{}", format!("⚠ {header} (acknowledged)").yellow().bold());
    } else {
        eprintln!("{}", format!("✗ {header}").red().bold());
    }
    for r in moved {
        eprintln!(
            "  {}: {} -> {}",
            r.id.yellow(),
            r.previous_slug,
            r.current_slug
        );
        print_mentions(corpus, &r.id);
    }
    if !allowed {
        eprintln!(
            "{}",
            "Numeric ids are embedded in external permalinks. Re-run with \
             --allow-reassignment only for intentional restructuring."
                .red()
        );
    }
}

/// Best-effort: page bodies that mention the identifier literally, which is
/// where external references to a broken id tend to hide.
fn print_mentions(corpus: &Corpus, id: &str) {
    let mentions: Vec<&str> = corpus
        .pages
        .iter()
        .filter(|p| p.body.as_deref().is_some_and(|b| b.contains(id)))
        .map(|p| p.slug.as_str())
        .collect();
    if !mentions.is_empty() {
        eprintln!("    referenced in: {}", mentions.join(", ").dimmed());
    }
}

/// End-of-run summary.
pub fn print_summary(stats: &CompileStats) {
    println!(
        "{}",
        format!(
            "✓ compiled {} entities, {} pages",
            stats.entity_count, stats.page_count
        )
        .green()
        .bold()
    );
    if stats.assigned.is_empty() {
        println!("  identifiers: all stable, none assigned");
    } else {
        println!(
            "  identifiers: {} newly assigned ({})",
            stats.assigned.len(),
            stats
                .assigned
                .iter()
                .map(|a| format!("{}={}", a.slug, a.id))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    println!(
        "  graph: {} raw edges, {} records with neighbors",
        stats.edge_count, stats.graph_size
    );
    println!(
        "  indices: {} backlink targets, {} tags",
        stats.backlink_targets, stats.tag_count
    );
}
