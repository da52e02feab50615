// Widget view models - cards, charts and table cells handed to the renderer
use serde::Serialize;

use super::status::StatusCategory;

/// Week-over-week change shown under a card value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub value: i32,
    pub is_positive: bool,
}

impl Trend {
    pub fn up(value: i32) -> Self {
        Self { value, is_positive: true }
    }

    pub fn down(value: i32) -> Self {
        Self { value, is_positive: false }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCard {
    pub title: String,
    pub value: String,
    pub color: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Trend>,
    /// Set when the value was derived from an empty collection
    pub no_data: bool,
}

impl StatusCard {
    pub fn new(title: &str, value: impl Into<String>, color: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            color: color.to_string(),
            icon: icon.to_string(),
            change: None,
            no_data: false,
        }
    }

    pub fn with_change(mut self, change: Trend) -> Self {
        self.change = Some(change);
        self
    }

    pub fn with_no_data(mut self, no_data: bool) -> Self {
        self.no_data = no_data;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub series_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_domain: Option<(f64, f64)>,
    pub points: Vec<ChartPoint>,
}

impl Chart {
    pub fn new(id: &str, title: &str, kind: ChartKind, series_name: &str, points: Vec<ChartPoint>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            series_name: series_name.to_string(),
            axis_label: None,
            y_domain: None,
            points,
        }
    }

    pub fn with_axis(mut self, label: &str, domain: Option<(f64, f64)>) -> Self {
        self.axis_label = Some(label.to_string());
        self.y_domain = domain;
        self
    }
}

/// Fill level of a percentage bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

/// Text emphasis for a plain value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Normal,
    Good,
    Fair,
    Poor,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Cell {
    Text {
        text: String,
    },
    LevelBar {
        value: f64,
        level: Level,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Badge {
        label: String,
        category: StatusCategory,
    },
    Toned {
        text: String,
        tone: Tone,
    },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self::Toned {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_serializes_without_change() {
        let card = StatusCard::new("Online Towers", "3", "#10b981", "zap");
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("change").is_none());
        assert_eq!(json["no_data"], false);
    }

    #[test]
    fn test_cell_is_tagged_by_kind() {
        let cell = Cell::LevelBar {
            value: 42.0,
            level: Level::Medium,
            label: None,
        };
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["kind"], "levelBar");
        assert_eq!(json["level"], "medium");
    }
}
