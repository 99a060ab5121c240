//! High-level service facade used by the web and terminal front ends.

use std::sync::Arc;

use crate::catalog::ReferenceData;
use crate::estimator;
use crate::model::{EstimateReport, EstimateResult, SurveyInput};
use crate::ports::{ReferenceError, ReferenceSource};

/// Public entry point for estimating household e-waste.
///
/// Holds the reference data loaded at startup. Cloning is cheap and every clone shares
/// the same immutable tables.
#[derive(Debug, Clone)]
pub struct EwasteService {
    reference: Arc<ReferenceData>,
}

impl EwasteService {
    /// Create a new service bound to already validated reference data.
    #[must_use]
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Load reference data from `source` and build a service around it.
    ///
    /// # Errors
    ///
    /// Returns a [`ReferenceError`] if the source cannot be read or fails validation.
    pub fn from_source(source: &dyn ReferenceSource) -> Result<Self, ReferenceError> {
        let reference = source.load()?;
        tracing::info!(
            source = %source.describe(),
            per_capita_kg = %reference.benchmark.per_capita_kg().round_dp(4),
            "Loaded reference data"
        );
        Ok(Self::new(Arc::new(reference)))
    }

    /// Reference data the service estimates against.
    #[must_use]
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Estimate annual e-waste for a survey.
    #[must_use]
    pub fn estimate(&self, input: &SurveyInput) -> EstimateResult {
        self.report(input).result
    }

    /// Estimate annual e-waste for a survey and keep the contributing terms.
    #[must_use]
    pub fn report(&self, input: &SurveyInput) -> EstimateReport {
        let report = estimator::report(
            input,
            &self.reference.catalog,
            &self.reference.benchmark,
        );
        tracing::debug!(
            ?input,
            personal_kg = %report.result.personal,
            contribution_percent = %report.result.contribution_percent,
            "Estimated household e-waste"
        );
        report
    }
}
