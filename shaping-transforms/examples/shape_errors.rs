//! Example: shaping tracking errors with differently calibrated transforms

use shaping_core::RewardTransform;
use shaping_transforms::TransformConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // An error of 0.2 (say, metres from the target) is bad, 0 is good
    let configs = [
        r#"{"kind": "linear_clipped", "bad_value": 0.2}"#,
        r#"{"kind": "soft_plus", "bad_value": 0.2}"#,
        r#"{"kind": "neg_exp", "bad_value": 0.2}"#,
        r#"{"kind": "sigmoid", "bad_value": 0.2, "good_value": 0.0}"#,
    ];

    // NaN marks a step where the metric did not apply; it survives shaping
    let errors = vec![0.3, 0.2, 0.1, 0.05, 0.0, f64::NAN];
    println!("errors:         {errors:?}");

    for json in configs {
        let config = TransformConfig::from_json(json)?;
        let transform = config.build()?;
        let rewards = transform.apply(&errors);
        println!("{:>14}: {rewards:?}", config.kind());
    }

    Ok(())
}
