//! Immutable indicator catalog.
//!
//! Built once at process start and passed by reference into every scoring
//! call. Nothing mutates it after construction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::indicator::{Category, IndicatorDefinition, Polarity};
use crate::errors::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<IndicatorDefinition>", into = "Vec<IndicatorDefinition>")]
pub struct IndicatorCatalog {
    indicators: Vec<IndicatorDefinition>,
}

impl IndicatorCatalog {
    /// Build a catalog, rejecting duplicate ids and invalid weights.
    pub fn new(indicators: Vec<IndicatorDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(indicators.len());
        for def in &indicators {
            if !seen.insert(def.id.as_str()) {
                return Err(CatalogError::DuplicateIndicator { id: def.id.clone() });
            }
            if let Some(weight) = def.weight {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(CatalogError::InvalidWeight {
                        id: def.id.clone(),
                        weight,
                    });
                }
            }
        }
        Ok(Self { indicators })
    }

    /// Parse a catalog from a JSON array of indicator definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let indicators: Vec<IndicatorDefinition> = serde_json::from_str(json)?;
        Self::new(indicators)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicatorDefinition> {
        self.indicators.iter()
    }

    /// Indicators tagged with `category`, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &IndicatorDefinition> {
        self.indicators
            .iter()
            .filter(move |def| def.category == category)
    }

    pub fn get(&self, id: &str) -> Option<&IndicatorDefinition> {
        self.indicators.iter().find(|def| def.id == id)
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// The 31-indicator national district catalog.
    pub fn standard() -> Self {
        use Category::*;
        use Polarity::*;

        let rows: [(&str, &str, &str, Category, Polarity); 31] = [
            ("gdp_per_capita", "GDP per capita", "mln UZS", Economic, HigherIsBetter),
            ("avg_income", "Average monthly income", "UZS", Economic, HigherIsBetter),
            ("unemployment_rate", "Unemployment rate", "%", Economic, LowerIsBetter),
            ("fdi_investment", "Foreign direct investment", "mln USD", Economic, HigherIsBetter),
            ("business_count", "Active businesses per 1000", "count", Economic, HigherIsBetter),
            ("export_volume", "Export volume", "mln USD", Economic, HigherIsBetter),
            ("poverty_rate", "Poverty rate", "%", Economic, LowerIsBetter),
            ("industrial_output", "Industrial output", "mln UZS", Economic, HigherIsBetter),
            ("literacy_rate", "Literacy rate", "%", Social, HigherIsBetter),
            ("school_enrollment", "School enrollment", "%", Social, HigherIsBetter),
            ("higher_education", "Higher education rate", "%", Social, HigherIsBetter),
            ("doctors_per_1000", "Doctors per 1000", "count", Social, HigherIsBetter),
            ("hospital_beds", "Hospital beds per 1000", "count", Social, HigherIsBetter),
            ("life_expectancy", "Life expectancy", "years", Social, HigherIsBetter),
            ("infant_mortality", "Infant mortality", "per 1000", Social, LowerIsBetter),
            ("access_clean_water", "Access to clean water", "%", Social, HigherIsBetter),
            ("population", "Total population", "count", Demographic, Neutral),
            ("population_density", "Population density", "per km2", Demographic, Neutral),
            ("urban_population", "Urban population", "%", Demographic, Neutral),
            ("youth_ratio", "Youth ratio (15-29)", "%", Demographic, Neutral),
            ("dependency_ratio", "Dependency ratio", "%", Demographic, LowerIsBetter),
            ("migration_balance", "Net migration", "count", Demographic, HigherIsBetter),
            ("birth_rate", "Birth rate", "per 1000", Demographic, Neutral),
            ("paved_roads", "Paved roads", "%", Infrastructure, HigherIsBetter),
            ("internet_coverage", "Internet coverage", "%", Infrastructure, HigherIsBetter),
            ("electricity_access", "Electricity access", "%", Infrastructure, HigherIsBetter),
            ("gas_supply", "Natural gas supply", "%", Infrastructure, HigherIsBetter),
            ("public_transport", "Public transport availability", "routes/1000", Infrastructure, HigherIsBetter),
            ("housing_quality", "Modern housing stock", "%", Infrastructure, HigherIsBetter),
            ("digital_services", "Digital public services", "%", Infrastructure, HigherIsBetter),
            ("logistics_index", "Logistics performance", "score 0-100", Infrastructure, HigherIsBetter),
        ];

        let indicators = rows
            .into_iter()
            .map(|(id, name, unit, category, polarity)| {
                IndicatorDefinition::new(id, category, polarity).with_name(name, unit)
            })
            .collect();

        // Ids above are unique and carry no weights.
        Self { indicators }
    }
}

impl TryFrom<Vec<IndicatorDefinition>> for IndicatorCatalog {
    type Error = CatalogError;

    fn try_from(indicators: Vec<IndicatorDefinition>) -> Result<Self, Self::Error> {
        Self::new(indicators)
    }
}

impl From<IndicatorCatalog> for Vec<IndicatorDefinition> {
    fn from(catalog: IndicatorCatalog) -> Self {
        catalog.indicators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_every_category() {
        let catalog = IndicatorCatalog::standard();
        assert_eq!(catalog.len(), 31);
        assert_eq!(catalog.in_category(Category::Economic).count(), 8);
        assert_eq!(catalog.in_category(Category::Social).count(), 8);
        assert_eq!(catalog.in_category(Category::Demographic).count(), 7);
        assert_eq!(catalog.in_category(Category::Infrastructure).count(), 8);
    }

    #[test]
    fn standard_catalog_ids_are_unique() {
        let catalog = IndicatorCatalog::standard();
        let rebuilt = IndicatorCatalog::new(catalog.iter().cloned().collect());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let defs = vec![
            IndicatorDefinition::new("x", Category::Social, Polarity::HigherIsBetter),
            IndicatorDefinition::new("x", Category::Economic, Polarity::LowerIsBetter),
        ];
        let err = IndicatorCatalog::new(defs).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIndicator { ref id } if id == "x"));
    }

    #[test]
    fn negative_weight_rejected() {
        let defs = vec![
            IndicatorDefinition::new("x", Category::Social, Polarity::Neutral).with_weight(-0.5),
        ];
        assert!(matches!(
            IndicatorCatalog::new(defs),
            Err(CatalogError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = IndicatorCatalog::standard();
        let def = catalog.get("poverty_rate").unwrap();
        assert_eq!(def.category, Category::Economic);
        assert_eq!(def.polarity, Polarity::LowerIsBetter);
        assert!(catalog.get("nope").is_none());
    }
}
