use crate::chat::models::{Series, VisualizationKind, VisualizationPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
    Scatter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Chart type, axes and points derived from a visualization payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub visualization: VisualizationKind,
    pub title: String,
    pub x_key: &'static str,
    pub y_key: &'static str,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn from_payload(payload: &VisualizationPayload) -> Self {
        let (kind, x_key, y_key) = match payload.kind {
            VisualizationKind::Temperature => (ChartKind::Line, "month", "temperature"),
            VisualizationKind::Salinity => (ChartKind::Area, "depth", "salinity"),
            VisualizationKind::Currents => (ChartKind::Scatter, "month", "velocity"),
        };

        let points = match &payload.series {
            Series::Monthly(readings) => readings
                .iter()
                .filter_map(|r| {
                    let value = match payload.kind {
                        VisualizationKind::Currents => r.velocity?,
                        _ => r.temperature,
                    };
                    Some(ChartPoint {
                        label: r.month.clone(),
                        value,
                    })
                })
                .collect(),
            Series::DepthProfile(readings) => readings
                .iter()
                .map(|r| ChartPoint {
                    label: r.depth.to_string(),
                    value: r.salinity,
                })
                .collect(),
        };

        Self {
            kind,
            visualization: payload.kind,
            title: payload.title.clone(),
            x_key,
            y_key,
            points,
        }
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self.points.iter().map(|p| p.value);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Position of `value` within the value range, in `[0, 1]`.
    pub fn normalized(&self, value: f64) -> f64 {
        match self.value_range() {
            Some((lo, hi)) if hi > lo => ((value - lo) / (hi - lo)).clamp(0.0, 1.0),
            _ => 0.5,
        }
    }
}
