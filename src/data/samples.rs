use super::filter::RangeBound;
use super::model::{CellValue, Column, ColumnKind, Dataset};

// ---------------------------------------------------------------------------
// Dataset names (closed set)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatasetKind {
    #[default]
    Physics,
    Astronomy,
    Weather,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Physics,
        DatasetKind::Astronomy,
        DatasetKind::Weather,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Physics => "Physics Experiments",
            DatasetKind::Astronomy => "Astronomy Observations",
            DatasetKind::Weather => "Weather Data",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            DatasetKind::Physics => "Physics Experiment Data",
            DatasetKind::Astronomy => "Astronomy Observation Data",
            DatasetKind::Weather => "Weather Data",
        }
    }

    /// Slider controls for this dataset's filterable columns, in display order.
    pub fn range_controls(self) -> &'static [RangeControl] {
        match self {
            DatasetKind::Physics => &[ENERGY],
            DatasetKind::Astronomy => &[BRIGHTNESS],
            DatasetKind::Weather => &[TEMPERATURE, HUMIDITY],
        }
    }
}

// ---------------------------------------------------------------------------
// Slider specs
// ---------------------------------------------------------------------------

/// A slider-style range input bound to one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeControl {
    pub column: &'static str,
    /// Short label used in the filtered-results caption.
    pub caption: &'static str,
    pub min: f64,
    pub max: f64,
    /// Integer sliders step by whole units.
    pub integer: bool,
}

impl RangeControl {
    /// Bound spanning the whole slider domain.
    pub fn default_bound(&self) -> RangeBound {
        RangeBound::new(self.min, self.max)
    }

    pub fn slider_label(&self) -> String {
        format!("Filter by {}", self.column)
    }

    /// `(lo, hi)` with whole numbers for integer sliders.
    pub fn format_bound(&self, bound: RangeBound) -> String {
        if self.integer {
            format!("({:.0}, {:.0})", bound.low, bound.high)
        } else {
            bound.to_string()
        }
    }
}

pub const ENERGY: RangeControl = RangeControl {
    column: "Energy (MeV)",
    caption: "Energy Range",
    min: 0.0,
    max: 10.0,
    integer: false,
};

pub const BRIGHTNESS: RangeControl = RangeControl {
    column: "Brightness (Magnitude)",
    caption: "Brightness Range",
    min: -15.0,
    max: 5.0,
    integer: false,
};

pub const TEMPERATURE: RangeControl = RangeControl {
    column: "Temperature (°C)",
    caption: "Temperature",
    min: -10.0,
    max: 40.0,
    integer: false,
};

pub const HUMIDITY: RangeControl = RangeControl {
    column: "Humidity (%)",
    caption: "Humidity",
    min: 0.0,
    max: 100.0,
    integer: true,
};

// ---------------------------------------------------------------------------
// SampleData – built once at startup, handed to the renderers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SampleData {
    physics: Dataset,
    astronomy: Dataset,
    weather: Dataset,
}

impl Default for SampleData {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleData {
    pub fn new() -> Self {
        Self {
            physics: physics(),
            astronomy: astronomy(),
            weather: weather(),
        }
    }

    pub fn get(&self, kind: DatasetKind) -> &Dataset {
        match kind {
            DatasetKind::Physics => &self.physics,
            DatasetKind::Astronomy => &self.astronomy,
            DatasetKind::Weather => &self.weather,
        }
    }
}

/// Five consecutive days starting 2024-01-01.
fn dates() -> impl Iterator<Item = CellValue> {
    (1..=5).map(|d| CellValue::Date(format!("2024-01-{d:02}")))
}

fn physics() -> Dataset {
    let names = ["Alpha Decay", "Beta Decay", "Gamma Ray Analysis", "Quark Study", "Higgs Boson"];
    let energy = [4.2, 1.5, 2.9, 3.4, 7.1];
    let rows = names
        .iter()
        .zip(energy)
        .zip(dates())
        .map(|((n, e), d)| vec![CellValue::String(n.to_string()), CellValue::Float(e), d])
        .collect();
    Dataset::new(
        vec![
            Column::new("Experiment", ColumnKind::String),
            Column::new(ENERGY.column, ColumnKind::Float),
            Column::new("Date", ColumnKind::Date),
        ],
        rows,
    )
}

fn astronomy() -> Dataset {
    let names = ["Mars", "Venus", "Jupiter", "Saturn", "Moon"];
    let magnitude = [-2.0, -4.6, -1.8, 0.2, -12.7];
    let rows = names
        .iter()
        .zip(magnitude)
        .zip(dates())
        .map(|((n, m), d)| vec![CellValue::String(n.to_string()), CellValue::Float(m), d])
        .collect();
    Dataset::new(
        vec![
            Column::new("Celestial Object", ColumnKind::String),
            Column::new(BRIGHTNESS.column, ColumnKind::Float),
            Column::new("Observation Date", ColumnKind::Date),
        ],
        rows,
    )
}

fn weather() -> Dataset {
    let cities = ["Cape Town", "London", "New York", "Tokyo", "Sydney"];
    let temperature = [25, 10, -3, 15, 30];
    let humidity = [65, 70, 55, 80, 50];
    let rows = cities
        .iter()
        .zip(temperature.into_iter().zip(humidity))
        .zip(dates())
        .map(|((c, (t, h)), d)| {
            vec![
                CellValue::String(c.to_string()),
                CellValue::Integer(t),
                CellValue::Integer(h),
                d,
            ]
        })
        .collect();
    Dataset::new(
        vec![
            Column::new("City", ColumnKind::String),
            Column::new(TEMPERATURE.column, ColumnKind::Integer),
            Column::new(HUMIDITY.column, ColumnKind::Integer),
            Column::new("Recorded Date", ColumnKind::Date),
        ],
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dataset_has_five_rows() {
        let data = SampleData::new();
        for kind in DatasetKind::ALL {
            assert_eq!(data.get(kind).len(), 5, "{}", kind.label());
        }
    }

    #[test]
    fn column_order_is_fixed() {
        let data = SampleData::new();
        assert_eq!(
            data.get(DatasetKind::Weather).column_names(),
            vec!["City", "Temperature (°C)", "Humidity (%)", "Recorded Date"]
        );
        assert_eq!(
            data.get(DatasetKind::Physics).column_names(),
            vec!["Experiment", "Energy (MeV)", "Date"]
        );
    }

    #[test]
    fn dates_run_consecutively() {
        let ds = SampleData::new();
        let astro = ds.get(DatasetKind::Astronomy);
        assert_eq!(
            astro.cell(0, "Observation Date"),
            Some(&CellValue::Date("2024-01-01".into()))
        );
        assert_eq!(
            astro.cell(4, "Observation Date"),
            Some(&CellValue::Date("2024-01-05".into()))
        );
    }

    #[test]
    fn controls_target_numeric_columns() {
        let data = SampleData::new();
        for kind in DatasetKind::ALL {
            let ds = data.get(kind);
            for control in kind.range_controls() {
                let idx = ds.column_index(control.column).expect("control column exists");
                assert!(ds.columns[idx].kind.is_numeric());
                assert!(control.min <= control.max);
            }
        }
        assert_eq!(DatasetKind::Weather.range_controls().len(), 2);
    }
}
