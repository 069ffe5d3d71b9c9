use crate::sweep::SweepPoint;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const CHART_WIDTH: usize = 50;

/// CSV of the sweep results, header first.
pub fn print_csv(points: &[SweepPoint], writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "layers,distance")?;
    for point in points {
        writeln!(writer, "{},{:.6}", point.layers, point.best_distance)?;
    }
    Ok(())
}

/// A terminal bar chart of distance to target versus circuit layers.
pub fn render_chart(points: &[SweepPoint]) -> String {
    let mut out = String::new();
    writeln!(out, "distance to target vs circuit layers").unwrap();

    let max = points
        .iter()
        .map(|p| p.best_distance)
        .fold(0.0_f64, f64::max);

    for point in points {
        let width = if max > 0.0 {
            ((point.best_distance / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        writeln!(
            out,
            "{:4} | {:<width$} {:.6}",
            point.layers,
            "#".repeat(width),
            point.best_distance,
            width = CHART_WIDTH
        )
        .unwrap();
    }
    out
}

/// Writes the sweep results as pretty JSON.
pub fn write_json(points: &[SweepPoint], path: &Path) -> io::Result<()> {
    let json_output = serde_json::to_string_pretty(points)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json_output.as_bytes())?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<SweepPoint> {
        vec![
            SweepPoint {
                layers: 1,
                best_distance: 0.8,
            },
            SweepPoint {
                layers: 2,
                best_distance: 0.4,
            },
            SweepPoint {
                layers: 3,
                best_distance: 0.1,
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let mut buf = Vec::new();
        print_csv(&sample_points(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "layers,distance");
        assert_eq!(lines[1], "1,0.800000");
        assert_eq!(lines[3], "3,0.100000");
    }

    #[test]
    fn test_chart_scales_bars_to_worst_point() {
        let chart = render_chart(&sample_points());
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 4);

        // The worst distance fills the full width; the rest are shorter.
        let bar_len = |line: &str| line.chars().filter(|&c| c == '#').count();
        assert_eq!(bar_len(lines[1]), CHART_WIDTH);
        assert!(bar_len(lines[2]) < bar_len(lines[1]));
        assert!(bar_len(lines[3]) < bar_len(lines[2]));
    }

    #[test]
    fn test_chart_handles_all_zero_distances() {
        let points = vec![SweepPoint {
            layers: 1,
            best_distance: 0.0,
        }];
        let chart = render_chart(&points);
        assert!(chart.contains("0.000000"));
    }

    #[test]
    fn test_json_round_trip_layout() {
        let dir = std::env::temp_dir().join("ansatz-fit-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sweep.json");

        write_json(&sample_points(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"layers\": 2"));
        assert!(text.contains("\"bestDistance\": 0.4"));

        std::fs::remove_file(&path).ok();
    }
}
