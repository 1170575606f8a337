//! Buffer summaries printed by the commands.

use plectrum_core::min_max;

/// Print sample count, rate, duration and min/max/mean of a buffer.
pub fn print_summary(samples: &[f64], sample_rate: f64) {
    let stats = min_max(samples);
    let duration = if sample_rate > 0.0 {
        samples.len() as f64 / sample_rate
    } else {
        0.0
    };

    println!("  Samples:     {}", samples.len());
    println!("  Sample rate: {} Hz", sample_rate);
    println!("  Duration:    {:.3}s", duration);
    println!("  Min:         {:.6}", stats.min);
    println!("  Max:         {:.6}", stats.max);
    println!("  Mean:        {:.6}", stats.mean);
}
