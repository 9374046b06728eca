//! Captioning trajectories loaded from dataset-style JSON records.
//!
//! Records follow the loader schema: an `observations` list whose entries hold
//! a `state` array. Other fields are carried by the loader and ignored here.

#![cfg(feature = "serde")]

use proprio_caption::{
    analyze_captions, ActionStatistics, CaptionConfig, CaptionError, Captioner, Trajectory,
};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct CaptionedStep<'a> {
    state: &'a [f64],
    caption: &'a str,
}

fn record(states: &[[f64; 7]]) -> String {
    let observations: Vec<_> = states
        .iter()
        .enumerate()
        .map(|(i, s)| json!({ "state": s, "images0": format!("img_{i}.jpg") }))
        .collect();
    json!({ "observations": observations, "language": ["put the spoon in the pot"] }).to_string()
}

#[test]
fn test_caption_json_record() {
    let states: Vec<[f64; 7]> = (0..8)
        .map(|i| [0.0, 0.02 * i as f64, 0.0, 0.0, 0.0, 0.0, 1.0])
        .collect();
    let traj = Trajectory::from_json(&record(&states)).unwrap();
    assert_eq!(traj.len(), 8);

    let captions = Captioner::bridge().caption(&traj, 5).unwrap();
    assert_eq!(captions[0], "move left; ");
    assert_eq!(captions[7], "");

    // Downstream export pairs each state with its caption.
    let export: Vec<CaptionedStep<'_>> = traj
        .observations
        .iter()
        .zip(&captions)
        .map(|(obs, caption)| CaptionedStep {
            state: &obs.state,
            caption,
        })
        .collect();
    let exported = serde_json::to_value(&export).unwrap();
    assert_eq!(exported[0]["caption"], "move left; ");
    assert_eq!(exported.as_array().map(Vec::len), Some(8));
}

#[test]
fn test_malformed_state_in_record() {
    let json = r#"{"observations": [{"state": [0, 0, 0, 0, 0, 0, 0]}, {"state": [0, 0]}]}"#;
    let traj = Trajectory::from_json(json).unwrap();
    let err = Captioner::bridge().caption(&traj, 5).unwrap_err();
    assert!(matches!(err, CaptionError::DimensionMismatch { index: 1, .. }));
}

#[test]
fn test_record_without_observations_is_rejected() {
    let err = Trajectory::from_json(r#"{"steps": []}"#).unwrap_err();
    assert!(matches!(err, CaptionError::Json(_)));
}

#[test]
fn test_dataset_specific_statistics() {
    let stats = ActionStatistics::from_json(
        r#"{
            "mean": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5],
            "std": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]
        }"#,
    )
    .unwrap();
    let captioner = Captioner::new(CaptionConfig::default().with_statistics(stats)).unwrap();

    // Large std: the same motion that captions under bridge statistics is now quiet.
    let states: Vec<[f64; 7]> = (0..8)
        .map(|i| [0.0, 0.02 * i as f64, 0.0, 0.0, 0.0, 0.0, 1.0])
        .collect();
    let traj = Trajectory::from_json(&record(&states)).unwrap();
    let captions = captioner.caption(&traj, 5).unwrap();

    let analysis = analyze_captions(&captions);
    assert_eq!(analysis.empty_steps, 8);
}

#[test]
fn test_config_from_json() {
    let config = CaptionConfig::from_json(r#"{"gripper_threshold": 0.1}"#).unwrap();
    let captioner = Captioner::new(config).unwrap();
    let traj = Trajectory::from_states(vec![
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.2],
    ]);
    assert_eq!(captioner.caption(&traj, 1).unwrap()[0], "open gripper; ");
}
