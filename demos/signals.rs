use std::path::Path;

use basic_signals::{
    PlotOptions, PlottersSink, SignalBundle, SignalResult, SineParams, StepParams,
    VisualizationSink, generate_sine_with, generate_unit_step_with, time_scale, time_shift,
};

pub fn main() -> SignalResult<()> {
    let out_dir = Path::new("plots");
    std::fs::create_dir_all(out_dir)?;

    let fs = 1000.0; // Sampling frequency in Hz
    let duration = 1.0; // Signal duration in seconds

    let sink = PlottersSink::new(PlotOptions::default());

    let (t, sine) = generate_sine_with(SineParams::new(5.0, 1.0, 0.0), duration, fs)?;
    sink.render(
        &t,
        &SignalBundle::new().with("sine", sine.clone()),
        "Sine wave",
        &out_dir.join("sine.png"),
    )?;

    let (t_u, u) = generate_unit_step_with(StepParams::new(0.2), duration, fs)?;
    sink.render(
        &t_u,
        &SignalBundle::new().with("unit step", u),
        "Unit step",
        &out_dir.join("unit_step.png"),
    )?;

    let (_, sine_shift) = time_shift(&t, &sine, 0.1, fs)?;
    sink.render(
        &t,
        &SignalBundle::new()
            .with("sine", sine.clone())
            .with("sine shifted", sine_shift),
        "Time shift",
        &out_dir.join("sine_shift.png"),
    )?;

    let (_, sine_scaled) = time_scale(&t, &sine, 2.0)?;
    sink.render(
        &t,
        &SignalBundle::new()
            .with("sine", sine)
            .with("sine scaled", sine_scaled),
        "Time scaling",
        &out_dir.join("sine_scaled.png"),
    )?;

    println!("Plots saved in '{}/' folder.", out_dir.display());
    Ok(())
}
