//! PNG rendering of signal bundles using plotters.
//!
//! [`PlottersSink`] draws every signal of a [`SignalBundle`] as one line against a shared time
//! axis, with a legend entry per label, and writes the chart to a PNG file.
//!
//! ```rust,no_run
//! use basic_signals::{PlotOptions, SignalBundle, generate_sine, plot_signals};
//!
//! # fn main() -> basic_signals::SignalResult<()> {
//! let (t, sine) = generate_sine(5.0_f64, 1.0, 0.0, 1.0, 1000.0)?;
//! let bundle = SignalBundle::new().with("sine", sine);
//! plot_signals(&t, &bundle, "Sine wave", "plots/sine.png", &PlotOptions::default())?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use ndarray::Array1;
use plotters::prelude::*;

use super::traits::VisualizationSink;
use super::types::SignalBundle;
use crate::{RealFloat, SignalError, SignalResult};

/// Configuration for signal plots
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Image size in pixels.
    pub figsize: (u32, u32),
    /// X axis description.
    pub xlabel: String,
    /// Y axis description.
    pub ylabel: String,
    /// Line colors, cycled over the bundle's labels.
    pub colors: Vec<RGBColor>,
    /// Image background.
    pub background_color: RGBColor,
    /// Draw the mesh grid.
    pub grid: bool,
    /// Caption font size.
    pub font_size: u32,
    /// Stroke width of each signal line.
    pub line_width: u32,
    /// Draw a legend with one entry per label.
    pub legend: bool,
    /// Create missing parent directories of the output path.
    pub create_parent: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            figsize: (1200, 900),
            xlabel: "Time [s]".to_string(),
            ylabel: "Amplitude".to_string(),
            colors: vec![BLUE, RED, GREEN, MAGENTA, CYAN],
            background_color: WHITE,
            grid: true,
            font_size: 24,
            line_width: 2,
            legend: true,
            create_parent: false,
        }
    }
}

/// A [`VisualizationSink`] that writes PNG line charts through the plotters bitmap backend.
#[derive(Debug, Clone, Default)]
pub struct PlottersSink {
    options: PlotOptions,
}

impl PlottersSink {
    /// Creates a sink with the given options.
    pub const fn new(options: PlotOptions) -> Self {
        Self { options }
    }

    /// The options used for every render.
    pub const fn options(&self) -> &PlotOptions {
        &self.options
    }
}

impl<F: RealFloat> VisualizationSink<F> for PlottersSink {
    fn render(
        &self,
        t: &Array1<F>,
        signals: &SignalBundle<F>,
        title: &str,
        path: &Path,
    ) -> SignalResult<()> {
        plot_signals(t, signals, title, path, &self.options)
    }
}

fn plot_error(err: impl std::fmt::Display) -> SignalError {
    SignalError::Plot(err.to_string())
}

fn to_plot_values<F: RealFloat>(values: &Array1<F>) -> Vec<f64> {
    values.iter().map(|v| v.to_f64().unwrap_or(f64::NAN)).collect()
}

/// Format time values for axis labels
fn format_time_label(t: f64) -> String {
    if t.abs() < 10.0 {
        format!("{t:.3}")
    } else {
        format!("{t:.2}")
    }
}

/// Amplitude range covering every finite sample, padded by 5%.
fn amplitude_range(series: &[Vec<f64>]) -> (f64, f64) {
    let (min_amp, max_amp) = series
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if min_amp > max_amp {
        return (-1.0, 1.0);
    }
    let amp_range = (max_amp - min_amp).max(0.1);
    let y_margin = amp_range * 0.05;
    (min_amp - y_margin, max_amp + y_margin)
}

/// Time range spanned by the axis; degenerate axes get a unit-wide window.
fn time_range(axis: &[f64]) -> (f64, f64) {
    match (axis.first(), axis.last()) {
        (Some(&start), Some(&end)) if end > start => (start, end),
        (Some(&start), _) => (start, start + 1.0),
        _ => (0.0, 1.0),
    }
}

/// Plot labelled signals over a shared time axis and save the chart as a PNG.
///
/// # Errors
/// - [`SignalError::LengthMismatch`] if any signal's length differs from `t`.
/// - [`SignalError::Io`] if `options.create_parent` is set and the directory cannot be created.
/// - [`SignalError::Plot`] if the backend fails to draw or write the image.
pub fn plot_signals<F: RealFloat>(
    t: &Array1<F>,
    signals: &SignalBundle<F>,
    title: &str,
    path: impl AsRef<Path>,
    options: &PlotOptions,
) -> SignalResult<()> {
    signals.check_lengths(t.len())?;

    let path = path.as_ref();
    if options.create_parent
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let time_axis = to_plot_values(t);
    let series: Vec<Vec<f64>> = signals.iter().map(|(_, x)| to_plot_values(x)).collect();
    let (t_start, t_end) = time_range(&time_axis);
    let (y_min, y_max) = amplitude_range(&series);

    let root = BitMapBackend::new(path, options.figsize).into_drawing_area();
    root.fill(&options.background_color).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", options.font_size))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(t_start..t_end, y_min..y_max)
        .map_err(plot_error)?;

    let x_formatter = |x: &f64| format_time_label(*x);
    let y_formatter = |y: &f64| format!("{y:.3}");
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(options.xlabel.as_str())
        .y_desc(options.ylabel.as_str())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);
    if !options.grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(plot_error)?;

    let palette: &[RGBColor] = if options.colors.is_empty() {
        &[BLUE]
    } else {
        &options.colors
    };
    for (idx, ((label, _), samples)) in signals.iter().zip(series.iter()).enumerate() {
        let color = palette[idx % palette.len()];
        let points: Vec<(f64, f64)> = time_axis
            .iter()
            .copied()
            .zip(samples.iter().copied())
            .collect();

        let drawn = chart
            .draw_series(LineSeries::new(
                points,
                color.stroke_width(options.line_width),
            ))
            .map_err(plot_error)?;
        if options.legend {
            drawn
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
    }

    if options.legend && !signals.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_error)?;
    }

    root.present().map_err(plot_error)?;
    tracing::debug!(
        path = %path.display(),
        signals = signals.len(),
        samples = t.len(),
        "rendered signal plot"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_sine;
    use ndarray::array;

    #[test]
    fn test_amplitude_range_pads_and_ignores_non_finite() {
        let (lo, hi) = amplitude_range(&[vec![-1.0, 1.0], vec![f64::NAN, 0.5]]);
        assert!((lo + 1.1).abs() < 1e-12);
        assert!((hi - 1.1).abs() < 1e-12);

        assert_eq!(amplitude_range(&[]), (-1.0, 1.0));
        let (lo, hi) = amplitude_range(&[vec![2.0, 2.0]]);
        assert!(lo < 2.0 && hi > 2.0);
    }

    #[test]
    fn test_time_range_degenerate_axes() {
        assert_eq!(time_range(&[]), (0.0, 1.0));
        assert_eq!(time_range(&[0.5]), (0.5, 1.5));
        assert_eq!(time_range(&[0.0, 0.5, 0.999]), (0.0, 0.999));
    }

    #[test]
    fn test_rejects_mismatched_signal_before_drawing() {
        let t = array![0.0, 0.1, 0.2];
        let bundle = SignalBundle::new().with("short", array![1.0, 2.0]);
        let path = std::env::temp_dir().join("basic_signals_never_written.png");

        let result = plot_signals(&t, &bundle, "mismatch", &path, &PlotOptions::default());
        assert!(matches!(
            result,
            Err(SignalError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        ));
        assert!(!path.exists());
    }

    #[test]
    #[ignore = "requires system fonts for caption and axis labels"]
    fn test_renders_png() {
        let dir = std::env::temp_dir().join(format!("basic_signals_plot_{}", std::process::id()));
        let path = dir.join("sine.png");

        let (t, sine) = generate_sine(5.0_f64, 1.0, 0.0, 1.0, 1000.0).unwrap();
        let bundle = SignalBundle::new().with("sine", sine);
        let sink = PlottersSink::new(PlotOptions {
            create_parent: true,
            ..PlotOptions::default()
        });

        sink.render(&t, &bundle, "Sine wave", &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
