//! Analysis orchestrator.
//!
//! Each call is self-contained: normalization ranges, clustering, and
//! statistics are derived from the request's population only.

use chrono::Utc;
use devindex_clustering::{cluster_seeded, cluster_stats, KMeansConfig};
use devindex_core::config::DevIndexConfig;
use devindex_core::errors::AnalysisResult;
use devindex_core::types::{DevelopmentTier, Entity, IndicatorCatalog};
use devindex_inequality::{inequality, SummaryStatistics};
use devindex_scoring::{rank_by_composite, ScoringEngine};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::report::{AnalysisReport, ClusteringReport, EntityAssignment, EntityIndex};
use crate::request::{AnalysisRequest, ClusteringRequest};
use crate::validation::{clamp_analysis_k, clamp_report_k, validate_population, validate_year};

pub struct AnalysisEngine {
    config: DevIndexConfig,
    catalog: IndicatorCatalog,
}

impl AnalysisEngine {
    pub fn new(config: DevIndexConfig, catalog: IndicatorCatalog) -> Self {
        Self { config, catalog }
    }

    /// Compiled defaults and the standard 31-indicator catalog.
    pub fn with_defaults() -> Self {
        Self::new(DevIndexConfig::default(), IndicatorCatalog::standard())
    }

    pub fn config(&self) -> &DevIndexConfig {
        &self.config
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    /// Score every entity against the population. Output is in input order.
    pub fn score(&self, entities: &[Entity]) -> AnalysisResult<Vec<EntityIndex>> {
        validate_population(entities)?;
        Ok(self.score_unchecked(entities))
    }

    fn score_unchecked(&self, entities: &[Entity]) -> Vec<EntityIndex> {
        let scoring = ScoringEngine::new(&self.catalog, self.config.weights.effective_weights());
        let ranges = scoring.ranges(entities);
        debug!(
            entity_count = entities.len(),
            indicator_count = self.catalog.len(),
            "scoring population"
        );

        entities
            .par_iter()
            .map(|entity| {
                let result = scoring.score_with_ranges(entity, &ranges);
                EntityIndex {
                    id: entity.id.clone(),
                    name: entity.name.clone(),
                    region: entity.region.clone(),
                    composite_index: result.composite,
                    categories: result.categories,
                    tier: DevelopmentTier::from_composite(result.composite),
                    indicators: entity.indicators.clone(),
                    normalized: result.normalized.values,
                }
            })
            .collect()
    }

    fn kmeans_config(&self, k: usize) -> KMeansConfig {
        let clustering = &self.config.clustering;
        KMeansConfig {
            k,
            max_iterations: clustering.effective_max_iterations(),
            convergence_threshold: clustering.effective_convergence_threshold(),
            seed: clustering.seed,
        }
    }

    fn cluster_scored(&self, scored: &[EntityIndex], k: usize) -> AnalysisResult<ClusteringReport> {
        let points: Vec<(String, f64)> = scored
            .iter()
            .map(|e| (e.id.clone(), e.composite_index))
            .collect();
        let model = cluster_seeded(&points, &self.kmeans_config(k))?;

        let clusters = cluster_stats(
            &model,
            scored
                .iter()
                .map(|e| (e.id.as_str(), e.name.as_str(), e.composite_index)),
        );
        let assignments = scored
            .iter()
            .filter_map(|e| {
                Some(EntityAssignment {
                    id: e.id.clone(),
                    name: e.name.clone(),
                    cluster: model.cluster_of(&e.id)?,
                    distance: model.distances.get(&e.id).copied().unwrap_or(0.0),
                    composite_index: e.composite_index,
                })
            })
            .collect();

        Ok(ClusteringReport {
            k: model.k,
            clusters,
            cluster_quality: model.quality(),
            silhouette_score: model.silhouette,
            inertia: model.inertia,
            iterations: model.iterations,
            converged: model.converged,
            centroids: model.centroids,
            assignments,
        })
    }

    /// Full analysis: per-entity indices and tiers, inequality, k-means,
    /// ranking, and summary statistics.
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult<AnalysisReport> {
        let analysis = &self.config.analysis;
        validate_year(
            request.year,
            analysis.effective_min_year(),
            analysis.effective_max_year(),
        )?;
        validate_population(&request.entities)?;

        let entities = self.score_unchecked(&request.entities);
        let composites: Vec<f64> = entities.iter().map(|e| e.composite_index).collect();

        // A caller-chosen k gets the service bounds; the configured default
        // is only capped at the population.
        let clustering_config = &self.config.clustering;
        let k = match request.cluster_count {
            Some(requested) => {
                clamp_report_k(requested, clustering_config.effective_min_k(), entities.len())
            }
            None => clamp_analysis_k(clustering_config.effective_default_k(), entities.len()),
        };
        let clustering = self.cluster_scored(&entities, k)?;

        let inequality = inequality(&composites);
        let ranking = rank_by_composite(entities.iter().map(|e| (e.id.as_str(), e.composite_index)));
        let summary = SummaryStatistics::from_values(&composites);
        let region_id = request
            .region_id
            .clone()
            .unwrap_or_else(|| analysis.effective_default_region().to_string());

        info!(
            year = request.year,
            region = %region_id,
            entity_count = entities.len(),
            cluster_count = k,
            iterations = clustering.iterations,
            silhouette = clustering.silhouette_score,
            gini = inequality.gini,
            "analysis complete"
        );

        Ok(AnalysisReport {
            year: request.year,
            region_id,
            entities,
            inequality,
            clustering,
            ranking,
            summary,
            generated_at: Utc::now(),
        })
    }

    /// Clustering report with the service's k clamp applied.
    pub fn cluster(&self, request: &ClusteringRequest) -> AnalysisResult<ClusteringReport> {
        validate_population(&request.entities)?;
        let clustering = &self.config.clustering;
        let requested_k = request
            .cluster_count
            .unwrap_or_else(|| clustering.effective_default_k());
        let k = clamp_report_k(requested_k, clustering.effective_min_k(), request.entities.len());

        let entities = self.score_unchecked(&request.entities);
        let report = self.cluster_scored(&entities, k)?;

        info!(
            entity_count = entities.len(),
            requested_k,
            cluster_count = k,
            iterations = report.iterations,
            silhouette = report.silhouette_score,
            quality = %report.cluster_quality,
            "clustering complete"
        );
        Ok(report)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
