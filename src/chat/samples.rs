//! Canned ARGO sample datasets and the payloads built from them.

use rand::Rng;

use super::models::{DepthReading, MonthlyReading, Series, VisualizationKind, VisualizationPayload};

/// Depth in metres of every reading in the monthly temperature series.
pub const SURFACE_DEPTH_M: u32 = 10;

pub const MONTHLY_TEMPERATURE: [(&str, f64); 12] = [
    ("Jan", 24.2),
    ("Feb", 25.1),
    ("Mar", 26.8),
    ("Apr", 28.2),
    ("May", 29.5),
    ("Jun", 30.1),
    ("Jul", 29.8),
    ("Aug", 29.2),
    ("Sep", 28.5),
    ("Oct", 27.1),
    ("Nov", 25.8),
    ("Dec", 24.9),
];

pub const SALINITY_PROFILE: [(u32, f64); 8] = [
    (0, 35.2),
    (50, 35.4),
    (100, 35.6),
    (200, 35.8),
    (500, 34.9),
    (1000, 34.7),
    (1500, 34.6),
    (2000, 34.7),
];

/// Half-open range synthetic current velocities are drawn from, in m/s.
pub const VELOCITY_RANGE: std::ops::Range<f64> = 0.5..2.5;

fn monthly_series() -> Vec<MonthlyReading> {
    MONTHLY_TEMPERATURE
        .iter()
        .map(|&(month, temperature)| MonthlyReading {
            month: month.to_string(),
            temperature,
            depth: SURFACE_DEPTH_M,
            velocity: None,
        })
        .collect()
}

impl VisualizationPayload {
    pub fn temperature() -> Self {
        Self {
            kind: VisualizationKind::Temperature,
            title: "Ocean Temperature Trends".to_string(),
            description:
                "Sea surface temperature data from ARGO floats showing seasonal variations."
                    .to_string(),
            series: Series::Monthly(monthly_series()),
        }
    }

    pub fn salinity() -> Self {
        let profile = SALINITY_PROFILE
            .iter()
            .map(|&(depth, salinity)| DepthReading { depth, salinity })
            .collect();

        Self {
            kind: VisualizationKind::Salinity,
            title: "Salinity Profile by Depth".to_string(),
            description:
                "Salinity measurements across different ocean depths from ARGO profiles."
                    .to_string(),
            series: Series::DepthProfile(profile),
        }
    }

    /// The temperature series with a synthetic velocity per month.
    pub fn currents<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let readings = monthly_series()
            .into_iter()
            .map(|reading| MonthlyReading {
                velocity: Some(rng.gen_range(VELOCITY_RANGE)),
                ..reading
            })
            .collect();

        Self {
            kind: VisualizationKind::Currents,
            title: "Ocean Current Analysis".to_string(),
            description: "Ocean current velocity data derived from ARGO float trajectories."
                .to_string(),
            series: Series::Monthly(readings),
        }
    }
}
