//! ComparisonEngine: runs every stage for one design/implementation pair.

use std::time::Instant;

use parity_core::config::ParityConfig;
use parity_core::errors::ComparisonError;
use parity_core::tracing::metrics;
use parity_core::types::{DesignNode, ImplementationNode, StyledNode, TreeOrigin};
use tracing::field::Empty;

use super::types::{
    ComparisonInput, ComparisonResult, MatchedPair, UnmatchedDesign, UnmatchedImplementation,
};
use super::validation::{validate_design, validate_implementation};
use crate::deviation::DeviationDetector;
use crate::matching::NodeMatcher;
use crate::scoring::ScoringEngine;
use crate::taxonomy::{Assignments, CategoryPath, TaxonomyClassifier};
use crate::tokens::summarize_tokens;
use crate::visual::{VisualDiffEngine, VisualSection, VisualSkipReason};

/// The comparison pipeline, built once from a resolved configuration.
///
/// Holds no per-run state: `compare` takes `&self` and may be called from
/// many threads at once.
pub struct ComparisonEngine {
    config: ParityConfig,
    classifier: TaxonomyClassifier,
    matcher: NodeMatcher,
    detector: DeviationDetector,
    scorer: ScoringEngine,
    visual: VisualDiffEngine,
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::new(&ParityConfig::default())
    }
}

impl ComparisonEngine {
    pub fn new(config: &ParityConfig) -> Self {
        Self {
            config: config.clone(),
            classifier: TaxonomyClassifier::new(&config.taxonomy),
            matcher: NodeMatcher::new(&config.matching),
            detector: DeviationDetector::new(&config.deviation),
            scorer: ScoringEngine::from_config(&config.scoring),
            visual: VisualDiffEngine::new(&config.visual),
        }
    }

    pub fn with_classifier(mut self, classifier: TaxonomyClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_matcher(mut self, matcher: NodeMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_detector(mut self, detector: DeviationDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn config(&self) -> &ParityConfig {
        &self.config
    }

    pub fn classifier(&self) -> &TaxonomyClassifier {
        &self.classifier
    }

    /// Compare one design tree against one implementation tree.
    ///
    /// Malformed trees and undecodable screenshots abort the run. Absent
    /// optional inputs (registry, screenshots) produce explicit skipped
    /// sections instead.
    pub fn compare(
        &self,
        input: ComparisonInput<'_>,
    ) -> Result<ComparisonResult, ComparisonError> {
        let started = Instant::now();
        let span = tracing::info_span!(
            "comparison",
            nodes_classified = Empty,
            raw_token_count = Empty,
            matched_pairs = Empty,
            unmatched_design = Empty,
            unmatched_implementation = Empty,
            deviation_count = Empty,
            match_score = Empty,
            visual_diff_time = Empty,
            comparison_time = Empty,
        );
        let _guard = span.enter();

        validate_design(input.design)?;
        validate_implementation(input.implementation)?;

        let (taxonomy, assignments) = self
            .classifier
            .build_taxonomy(input.design, input.implementation);
        let classified = taxonomy.node_count(TreeOrigin::Design)
            + taxonomy.node_count(TreeOrigin::Implementation);
        span.record(metrics::NODES_CLASSIFIED, classified);

        let token_summary = summarize_tokens(
            input.design,
            input.implementation,
            input.registry,
            &self.config.tokens,
        );
        span.record(metrics::RAW_TOKEN_COUNT, token_summary.raw_token_count);

        let design_nodes: Vec<&DesignNode> = input.design.iter().collect();
        let implementation_nodes: Vec<&ImplementationNode> = input.implementation.iter().collect();
        let design_categories = self.categories(&design_nodes, &assignments, TreeOrigin::Design);
        let implementation_categories =
            self.categories(&implementation_nodes, &assignments, TreeOrigin::Implementation);

        let outcome = self.matcher.match_nodes(
            &design_nodes,
            &implementation_nodes,
            &design_categories,
            &implementation_categories,
        );

        let matched_pairs: Vec<MatchedPair> = outcome
            .pairs
            .iter()
            .map(|pair| {
                let design = design_nodes[pair.design];
                let implementation = implementation_nodes[pair.implementation];
                MatchedPair {
                    design_ref: design.id.clone(),
                    design_name: design.name.clone(),
                    implementation_ref: implementation.selector.clone(),
                    category: design_categories[pair.design],
                    implementation_category: implementation_categories[pair.implementation],
                    strategy: pair.strategy,
                    deviations: self.detector.detect(design, implementation),
                }
            })
            .collect();

        let unmatched_design: Vec<UnmatchedDesign> = outcome
            .unmatched_design
            .iter()
            .map(|&index| {
                let design = design_nodes[index];
                UnmatchedDesign {
                    design_ref: design.id.clone(),
                    name: design.name.clone(),
                    category: design_categories[index],
                    deviation: self.detector.missing(design),
                }
            })
            .collect();

        let unmatched_implementation: Vec<UnmatchedImplementation> = outcome
            .unmatched_implementation
            .iter()
            .map(|&index| {
                let node = implementation_nodes[index];
                UnmatchedImplementation {
                    implementation_ref: node.selector.clone(),
                    label: node.display_name().to_string(),
                    category: implementation_categories[index],
                }
            })
            .collect();

        span.record(metrics::MATCHED_PAIRS, matched_pairs.len());
        span.record(metrics::UNMATCHED_DESIGN, unmatched_design.len());
        span.record(metrics::UNMATCHED_IMPLEMENTATION, unmatched_implementation.len());

        let summary = self.scorer.score(
            matched_pairs
                .iter()
                .flat_map(|p| p.deviations.iter())
                .chain(unmatched_design.iter().map(|u| &u.deviation)),
        );
        span.record(metrics::DEVIATION_COUNT, summary.severity_counts.total());
        span.record(metrics::MATCH_SCORE, summary.score);

        let visual = match input.screenshots {
            Some(pair) => {
                let visual_started = Instant::now();
                let result = self.visual.compare(pair.design, pair.implementation)?;
                span.record(
                    metrics::VISUAL_DIFF_TIME,
                    visual_started.elapsed().as_millis() as u64,
                );
                VisualSection::Evaluated(result)
            }
            None => {
                tracing::warn!("visual diff skipped: screenshots not provided");
                VisualSection::Skipped {
                    reason: VisualSkipReason::ScreenshotsNotProvided,
                }
            }
        };

        span.record(metrics::COMPARISON_TIME, started.elapsed().as_millis() as u64);
        tracing::info!(
            matched = matched_pairs.len(),
            unmatched_design = unmatched_design.len(),
            unmatched_implementation = unmatched_implementation.len(),
            deviations = summary.severity_counts.total(),
            score = summary.score,
            "comparison complete"
        );

        Ok(ComparisonResult {
            matched_pairs,
            unmatched_design,
            unmatched_implementation,
            token_summary,
            taxonomy,
            score: summary.score,
            severity_counts: summary.severity_counts,
            visual,
            design_node_count: design_nodes.len(),
            implementation_node_count: implementation_nodes.len(),
        })
    }

    /// Bucket per node, index-aligned with `nodes`.
    fn categories<N: StyledNode>(
        &self,
        nodes: &[&N],
        assignments: &Assignments,
        origin: TreeOrigin,
    ) -> Vec<CategoryPath> {
        nodes
            .iter()
            .map(|node| {
                assignments
                    .get(origin, node.node_ref())
                    .unwrap_or_else(|| self.classifier.classify(*node, origin))
            })
            .collect()
    }
}
