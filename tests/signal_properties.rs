//! Integration tests for the generate -> transform -> sink pipeline.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use approx_eq::assert_approx_eq;
use basic_signals::{
    SignalBundle, SignalError, SignalResult, StepParams, VisualizationSink, generate_sine,
    generate_unit_step, generate_unit_step_with, time_base, time_scale, time_shift,
};
use ndarray::Array1;

/// Sink double that records what it was asked to render.
#[derive(Default)]
struct RecordingSink {
    renders: RefCell<Vec<(String, PathBuf, Vec<String>)>>,
}

impl VisualizationSink<f64> for RecordingSink {
    fn render(
        &self,
        t: &Array1<f64>,
        signals: &SignalBundle<f64>,
        title: &str,
        path: &Path,
    ) -> SignalResult<()> {
        signals.check_lengths(t.len())?;
        self.renders.borrow_mut().push((
            title.to_string(),
            path.to_path_buf(),
            signals.labels().map(str::to_string).collect(),
        ));
        Ok(())
    }
}

#[test]
fn test_time_base_properties() {
    for &(duration, fs) in &[
        (1.0_f64, 1000.0_f64),
        (0.25, 44100.0),
        (2.0, 8.0),
        (0.3, 100.0),
        (0.0105, 1000.0),
    ] {
        let t = time_base(duration, fs).unwrap();
        assert_eq!(t.len(), (duration * fs).floor() as usize);
        for pair in t.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - 1.0 / fs).abs() < 1e-9);
        }
    }
}

#[test]
fn test_delayed_sine_matches_phase_shifted_sine() {
    let fs = 1000.0_f64;
    let (t, sine) = generate_sine(5.0, 1.0, 0.0, 1.0, fs).unwrap();
    let (t_shifted, shifted) = time_shift(&t, &sine, 0.1, fs).unwrap();
    let (_, reference) = generate_sine(5.0, 1.0, -2.0 * PI * 5.0 * 0.1, 1.0, fs).unwrap();

    assert_eq!(t_shifted, t);
    assert!(shifted.iter().take(100).all(|&v| v == 0.0));
    for i in 100..1000 {
        assert!(
            (shifted[i] - reference[i]).abs() < 1e-9,
            "sample {i}: {} vs {}",
            shifted[i],
            reference[i]
        );
    }
}

#[test]
fn test_shift_round_trip_restores_interior() {
    let fs = 1000.0_f64;
    let (t, x) = generate_sine(3.0, 0.5, 0.7, 1.0, fs).unwrap();
    let a = 0.05_f64;
    let k = 50;

    let (_, there) = time_shift(&t, &x, a, fs).unwrap();
    let (_, back) = time_shift(&t, &there, -a, fs).unwrap();

    for i in 0..x.len() {
        if i >= x.len() - k {
            assert_eq!(back[i], 0.0, "sample {i} should be in the zero strip");
        } else {
            assert_eq!(back[i], x[i]);
        }
    }

    let (_, there) = time_shift(&t, &x, -a, fs).unwrap();
    let (_, back) = time_shift(&t, &there, a, fs).unwrap();
    for i in 0..x.len() {
        if i < k {
            assert_eq!(back[i], 0.0, "sample {i} should be in the zero strip");
        } else {
            assert_eq!(back[i], x[i]);
        }
    }
}

#[test]
fn test_unit_scale_reproduces_sine() {
    let (t, x) = generate_sine(5.0_f64, 1.0, 0.0, 1.0, 1000.0).unwrap();
    let (_, y) = time_scale(&t, &x, 1.0).unwrap();
    for (a, b) in x.iter().zip(y.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_compressed_sine_doubles_frequency() {
    let fs = 1000.0_f64;
    let (t, x) = generate_sine(5.0, 1.0, 0.0, 1.0, fs).unwrap();
    let (_, y) = time_scale(&t, &x, 2.0).unwrap();
    let (_, faster) = generate_sine(10.0, 1.0, 0.0, 1.0, fs).unwrap();

    // Within the first half every query lands on an original grid point.
    for i in 0..500 {
        assert!((y[i] - faster[i]).abs() < 1e-9, "sample {i}");
    }
    assert!(y.iter().skip(500).all(|&v| v == 0.0));
}

#[test]
fn test_stretched_step_moves_edge_later() {
    let (t, u) = generate_unit_step(1.0_f64, 1000.0, 0.2).unwrap();
    let (_, y) = time_scale(&t, &u, 0.5).unwrap();

    let first_on = y.iter().position(|&v| v > 0.0).unwrap();
    assert!((399..=401).contains(&first_on), "first on sample at {first_on}");
    assert_approx_eq!(y[999], 1.0, 1e-12);
}

#[test]
fn test_compressed_step_halves_edge() {
    let (t, u) = generate_unit_step_with(StepParams::new(0.2_f64), 1.0, 1000.0).unwrap();
    let original_edge = u.iter().position(|&v| v == 1.0).unwrap();

    let (_, y) = time_scale(&t, &u, 2.0).unwrap();
    let scaled_edge = y.iter().position(|&v| v == 1.0).unwrap();
    assert!(scaled_edge.abs_diff(original_edge / 2) <= 1);
}

#[test]
fn test_pipeline_feeds_sink() {
    let fs = 1000.0_f64;
    let (t, sine) = generate_sine(5.0, 1.0, 0.0, 1.0, fs).unwrap();
    let (_, shifted) = time_shift(&t, &sine, 0.1, fs).unwrap();
    let (_, scaled) = time_scale(&t, &sine, 2.0).unwrap();

    let sink = RecordingSink::default();
    sink.render(
        &t,
        &SignalBundle::new()
            .with("sine", sine.clone())
            .with("sine shifted", shifted),
        "Time shift",
        Path::new("plots/sine_shift.png"),
    )
    .unwrap();
    sink.render(
        &t,
        &SignalBundle::new()
            .with("sine", sine)
            .with("sine scaled", scaled),
        "Time scaling",
        Path::new("plots/sine_scaled.png"),
    )
    .unwrap();

    let renders = sink.renders.borrow();
    assert_eq!(renders.len(), 2);
    assert_eq!(renders[0].0, "Time shift");
    assert_eq!(renders[0].1, PathBuf::from("plots/sine_shift.png"));
    assert_eq!(renders[0].2, vec!["sine", "sine shifted"]);
    assert_eq!(renders[1].2, vec!["sine", "sine scaled"]);
}

#[test]
fn test_sink_rejects_signal_from_other_time_base() {
    let (t, sine) = generate_sine(5.0_f64, 1.0, 0.0, 1.0, 1000.0).unwrap();
    let (_, coarse) = generate_sine(5.0_f64, 1.0, 0.0, 1.0, 100.0).unwrap();

    let sink = RecordingSink::default();
    let result = sink.render(
        &t,
        &SignalBundle::new().with("sine", sine).with("coarse", coarse),
        "mismatch",
        Path::new("unused.png"),
    );
    assert!(matches!(
        result,
        Err(SignalError::LengthMismatch {
            expected: 1000,
            actual: 100
        })
    ));
    assert!(sink.renders.borrow().is_empty());
}
