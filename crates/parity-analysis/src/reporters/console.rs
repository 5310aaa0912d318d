//! Console reporter: human-readable output with color codes.

use std::fmt::Write as _;

use parity_core::errors::ReportError;

use super::Reporter;
use crate::deviation::Severity;
use crate::engine::ComparisonResult;
use crate::tokens::TokenMappingSection;
use crate::visual::VisualSection;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Critical => "\x1b[31m", // red
            Severity::Major => "\x1b[33m",    // yellow
            Severity::Medium => "\x1b[36m",   // cyan
            Severity::Minor => "\x1b[90m",    // gray
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn write_report(&self, result: &ComparisonResult, out: &mut String) -> std::fmt::Result {
        out.push_str("╔══════════════════════════════════════════╗\n");
        out.push_str("║          Design Parity Report            ║\n");
        out.push_str("╚══════════════════════════════════════════╝\n\n");

        writeln!(out, "Score: {:.1}/100", result.score)?;
        let counts = Severity::ALL
            .iter()
            .map(|s| format!("{} {}", result.severity_counts.get(*s), s.name()))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "Deviations: {counts}")?;
        writeln!(
            out,
            "Nodes: {} design, {} implementation; {} matched, {} missing, {} extra\n",
            result.design_node_count,
            result.implementation_node_count,
            result.matched_pairs.len(),
            result.unmatched_design.len(),
            result.unmatched_implementation.len(),
        )?;

        for pair in &result.matched_pairs {
            if pair.deviations.is_empty() {
                continue;
            }
            writeln!(
                out,
                "{} ({}) -> {} [{}]",
                pair.design_name,
                pair.design_ref,
                pair.implementation_ref,
                pair.category.as_str()
            )?;
            for deviation in &pair.deviations {
                writeln!(
                    out,
                    "  {}{}{}: {} expected {}, got {}",
                    self.color_start(deviation.severity),
                    deviation.severity.name(),
                    self.color_end(),
                    deviation.property.name(),
                    deviation.expected_value,
                    deviation.actual_value,
                )?;
            }
        }
        for missing in &result.unmatched_design {
            writeln!(
                out,
                "{}{}{}: {} ({}) missing from implementation [{}]",
                self.color_start(missing.deviation.severity),
                missing.deviation.severity.name(),
                self.color_end(),
                missing.name,
                missing.design_ref,
                missing.category.as_str()
            )?;
        }
        for extra in &result.unmatched_implementation {
            writeln!(out, "  extra: {} ({})", extra.implementation_ref, extra.label)?;
        }
        out.push('\n');

        let occupied = result
            .taxonomy
            .buckets
            .values()
            .filter(|b| !b.is_empty())
            .count();
        writeln!(
            out,
            "Taxonomy: {occupied} occupied, {} empty buckets",
            result.taxonomy.empty_buckets().len()
        )?;

        let summary = &result.token_summary;
        writeln!(out, "Tokens: {} raw occurrences", summary.raw_token_count)?;
        for (category, tokens) in &summary.tokens {
            let values = tokens
                .iter()
                .map(|t| format!("{} ×{}", t.value, t.usage_count))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "  {category}: {values}")?;
        }
        match &summary.mapping {
            TokenMappingSection::Evaluated { registry, mappings } => {
                let exact = mappings
                    .iter()
                    .filter(|m| m.nearest.as_ref().is_some_and(|n| n.is_exact()))
                    .count();
                writeln!(
                    out,
                    "Token mapping: {exact}/{} values exact in `{registry}`",
                    mappings.len()
                )?;
            }
            TokenMappingSection::Skipped { reason } => {
                writeln!(out, "Token mapping: not evaluated ({reason})")?;
            }
        }

        match &result.visual {
            VisualSection::Evaluated(visual) => {
                writeln!(
                    out,
                    "Visual diff: {:.2}% similar ({} of {} pixels differ at threshold {})",
                    visual.similarity_percent,
                    visual.differing_pixels,
                    visual.total_pixels,
                    visual.threshold_used
                )?;
                if let Some(p) = &visual.padding {
                    writeln!(
                        out,
                        "  padded: design {}x{}, implementation {}x{} -> {}x{}",
                        p.design_width,
                        p.design_height,
                        p.implementation_width,
                        p.implementation_height,
                        p.canvas_width,
                        p.canvas_height
                    )?;
                }
            }
            VisualSection::Skipped { reason } => {
                writeln!(out, "Visual diff: not evaluated ({reason})")?;
            }
        }
        Ok(())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, result: &ComparisonResult) -> Result<String, ReportError> {
        let mut output = String::new();
        self.write_report(result, &mut output)
            .map_err(|e| ReportError::Format {
                reporter: self.name(),
                message: e.to_string(),
            })?;
        Ok(output)
    }
}
