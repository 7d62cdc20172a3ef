//! Utility functions for the playground.
//!
//! This module provides formatting and display utilities for working
//! with contraction output.

use std::collections::HashSet;
use std::fmt::Write;

/// Format a partition as one line per group, members sorted for stable
/// output and long groups truncated.
pub fn format_groups(groups: &[HashSet<u32>]) -> String {
    let mut output = String::new();

    for (index, group) in groups.iter().enumerate() {
        let mut members: Vec<u32> = group.iter().copied().collect();
        members.sort_unstable();

        let listed = members
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            output,
            "  group {:3} ({:3} nodes): {{{}}}",
            index,
            members.len(),
            truncate(&listed, 60)
        )
        .unwrap();
    }

    output
}

/// Truncate a string to a maximum length.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Print a divider line.
pub fn print_divider() {
    println!("{}", "-".repeat(60));
}

/// Print a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}", "=".repeat(60));
}
