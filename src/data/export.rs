use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;

/// Write `dataset` as CSV: one header row of column names, then each row's
/// cells in column order. Dates stay ISO strings.
pub fn write_csv<W: Write>(dataset: &Dataset, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(dataset.column_names())
        .context("writing CSV header")?;
    for (i, row) in dataset.rows.iter().enumerate() {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .with_context(|| format!("writing CSV row {i}"))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

/// Save `dataset` to a CSV file at `path`.
pub fn save_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(dataset, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_range, RangeBound};
    use crate::data::samples::{DatasetKind, SampleData, TEMPERATURE};

    #[test]
    fn weather_subset_to_csv() {
        let data = SampleData::new();
        let hot = filter_range(
            data.get(DatasetKind::Weather),
            TEMPERATURE.column,
            RangeBound::new(20.0, 40.0),
        );
        let mut buf = Vec::new();
        write_csv(&hot, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "City,Temperature (°C),Humidity (%),Recorded Date\n\
             Cape Town,25,65,2024-01-01\n\
             Sydney,30,50,2024-01-05\n"
        );
    }

    #[test]
    fn empty_selection_still_has_header() {
        let data = SampleData::new();
        let none = filter_range(
            data.get(DatasetKind::Physics),
            "Energy (MeV)",
            RangeBound::new(9.0, 1.0),
        );
        let mut buf = Vec::new();
        write_csv(&none, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Experiment,Energy (MeV),Date\n");
    }

    #[test]
    fn save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("physics.csv");
        let data = SampleData::new();
        save_csv(data.get(DatasetKind::Physics), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("Higgs Boson,7.1,2024-01-05"));
    }

    #[test]
    fn save_into_missing_dir_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("x.csv");
        let data = SampleData::new();
        let err = save_csv(data.get(DatasetKind::Physics), &path).unwrap_err();
        assert!(format!("{err:#}").contains("creating"));
    }
}
