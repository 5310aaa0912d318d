//! Matching strategies, applied in order by `NodeMatcher`.

use parity_core::config::MatchingConfig;
use parity_core::types::{FxHashMap, StyledNode};

use super::types::{MatchContext, MatchStrategyKind};
use crate::taxonomy::rules::normalize_words;

/// One pairing pass over the nodes left open by earlier passes.
pub trait MatchStrategy: Send + Sync {
    fn kind(&self) -> MatchStrategyKind;
    fn apply(&self, ctx: &mut MatchContext<'_>);
}

/// Pairs nodes through an explicit key: an implementation attribute
/// (`data-design-id`, ...) equal to the design node id, or to its name
/// ignoring case.
pub struct SharedKeyStrategy {
    attributes: Vec<String>,
}

impl SharedKeyStrategy {
    pub fn new(attributes: Vec<String>) -> Self {
        Self { attributes }
    }
}

impl MatchStrategy for SharedKeyStrategy {
    fn kind(&self) -> MatchStrategyKind {
        MatchStrategyKind::SharedKey
    }

    fn apply(&self, ctx: &mut MatchContext<'_>) {
        let mut by_key: FxHashMap<&str, usize> = FxHashMap::default();
        let mut by_lower: FxHashMap<String, usize> = FxHashMap::default();
        for i in ctx.open_implementation() {
            let node = ctx.implementation[i];
            for attr in &self.attributes {
                if let Some(value) = node.attribute(attr).map(str::trim).filter(|v| !v.is_empty()) {
                    by_key.entry(value).or_insert(i);
                    by_lower.entry(value.to_lowercase()).or_insert(i);
                }
            }
        }
        if by_key.is_empty() {
            return;
        }

        for d in ctx.open_design() {
            let node = ctx.design[d];
            let by_id = by_key.get(node.id.as_str()).copied();
            let by_name = || {
                let name = node.name.trim();
                (!name.is_empty())
                    .then(|| by_lower.get(&name.to_lowercase()).copied())
                    .flatten()
            };
            let candidate = by_id
                .filter(|i| ctx.is_implementation_open(*i))
                .or_else(|| by_name().filter(|i| ctx.is_implementation_open(*i)));
            if let Some(i) = candidate {
                ctx.link(d, i, self.kind());
            }
        }
    }
}

/// Pairs nodes in the same bucket by best bounding-box overlap, each box
/// taken relative to its own tree's origin.
pub struct GeometryStrategy {
    min_overlap: f64,
}

impl GeometryStrategy {
    pub fn new(min_overlap: f64) -> Self {
        Self { min_overlap }
    }
}

impl MatchStrategy for GeometryStrategy {
    fn kind(&self) -> MatchStrategyKind {
        MatchStrategyKind::Geometry
    }

    fn apply(&self, ctx: &mut MatchContext<'_>) {
        for d in ctx.open_design() {
            let Some(design_bounds) = ctx.design_bounds(d) else {
                continue;
            };
            let mut best: Option<(usize, f64)> = None;
            for i in ctx.open_implementation() {
                if !ctx.same_bucket(d, i) {
                    continue;
                }
                let Some(impl_bounds) = ctx.implementation_bounds(i) else {
                    continue;
                };
                let overlap = design_bounds.iou(&impl_bounds);
                if overlap >= self.min_overlap && best.map_or(true, |(_, b)| overlap > b) {
                    best = Some((i, overlap));
                }
            }
            if let Some((i, _)) = best {
                ctx.link(d, i, self.kind());
            }
        }
    }
}

/// Pairs nodes in the same bucket whose normalized design name equals the
/// implementation text, id, or one of its classes.
pub struct LabelStrategy;

impl MatchStrategy for LabelStrategy {
    fn kind(&self) -> MatchStrategyKind {
        MatchStrategyKind::Label
    }

    fn apply(&self, ctx: &mut MatchContext<'_>) {
        let labels: Vec<(usize, Vec<String>)> = ctx
            .open_implementation()
            .into_iter()
            .map(|i| {
                let node = ctx.implementation[i];
                let mut labels: Vec<String> = node
                    .text
                    .iter()
                    .map(String::as_str)
                    .chain(node.attribute("id"))
                    .chain(node.attribute("aria-label"))
                    .chain(node.classes())
                    .map(normalize_words)
                    .filter(|l| !l.is_empty())
                    .collect();
                labels.dedup();
                (i, labels)
            })
            .collect();

        for d in ctx.open_design() {
            let name = normalize_words(&ctx.design[d].name);
            if name.is_empty() {
                continue;
            }
            let hit = labels.iter().find(|(i, candidates)| {
                ctx.is_implementation_open(*i)
                    && ctx.same_bucket(d, *i)
                    && candidates.iter().any(|c| *c == name)
            });
            if let Some((i, _)) = hit {
                let i = *i;
                ctx.link(d, i, self.kind());
            }
        }
    }
}

/// Pairs whatever is still open in the same bucket, in document order.
///
/// Runs last, so nodes with geometry only get here when no box overlapped
/// enough.
pub struct OrdinalStrategy;

impl MatchStrategy for OrdinalStrategy {
    fn kind(&self) -> MatchStrategyKind {
        MatchStrategyKind::Ordinal
    }

    fn apply(&self, ctx: &mut MatchContext<'_>) {
        let open_impl = ctx.open_implementation();
        for d in ctx.open_design() {
            let next = open_impl
                .iter()
                .copied()
                .find(|i| ctx.is_implementation_open(*i) && ctx.same_bucket(d, *i));
            if let Some(i) = next {
                ctx.link(d, i, self.kind());
            }
        }
    }
}

/// The configured strategy chain, in order.
pub fn default_strategies(config: &MatchingConfig) -> Vec<Box<dyn MatchStrategy>> {
    let mut strategies: Vec<Box<dyn MatchStrategy>> = vec![
        Box::new(SharedKeyStrategy::new(config.effective_design_key_attributes())),
        Box::new(GeometryStrategy::new(config.effective_min_overlap())),
        Box::new(LabelStrategy),
    ];
    if config.effective_positional_fallback() {
        strategies.push(Box::new(OrdinalStrategy));
    }
    strategies
}
