use crate::constants::DEFAULT_ACCENT_COLOR;

/// AQI severity bands the backend reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Matches the exact label sent by the backend
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Good" => Some(AqiCategory::Good),
            "Moderate" => Some(AqiCategory::Moderate),
            "Unhealthy for Sensitive Groups" => Some(AqiCategory::UnhealthyForSensitiveGroups),
            "Unhealthy" => Some(AqiCategory::Unhealthy),
            "Very Unhealthy" => Some(AqiCategory::VeryUnhealthy),
            "Hazardous" => Some(AqiCategory::Hazardous),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AqiCategory::Good => "#28a745",
            AqiCategory::Moderate => "#ffc107",
            AqiCategory::UnhealthyForSensitiveGroups => "#fd7e14",
            AqiCategory::Unhealthy => "#dc3545",
            AqiCategory::VeryUnhealthy => "#842029",
            AqiCategory::Hazardous => "#38161b",
        }
    }
}

/// Display colour for a category label; unknown labels get the theme colour
pub fn category_color(label: &str) -> &'static str {
    AqiCategory::from_label(label)
        .map(AqiCategory::color)
        .unwrap_or(DEFAULT_ACCENT_COLOR)
}
