//! # devindex-analysis
//!
//! The service layer over scoring, inequality, and clustering.
//!
//! [`AnalysisEngine`] validates a request, scores every entity against the
//! request's own population, and assembles an [`AnalysisReport`] or a
//! [`ClusteringReport`]. Reports from two years can be diffed with
//! [`compare_years`], and turned into provider input with
//! [`recommendation_requests`].

pub mod comparison;
pub mod engine;
pub mod recommendations;
pub mod report;
pub mod request;
pub mod validation;

pub use comparison::{compare_years, EntityChange, YearComparison};
pub use engine::AnalysisEngine;
pub use recommendations::{recommend_all, recommendation_requests, EntityRecommendations};
pub use report::{AnalysisReport, ClusteringReport, EntityAssignment, EntityIndex};
pub use request::{AnalysisRequest, ClusteringRequest};
