//! Model tests — JSON hand-off format and normalization behavior through
//! the public API.

use pretty_assertions::assert_eq;
use pyogi::{
    render_json_to_svg, score_from_json, score_to_json, Accidental, Note, RenderOptions, Score,
    Voice,
};

fn sample_score() -> Score {
    Score {
        voices: vec![
            Voice::new(vec![
                Note { degree: 0, time: 0.0, accidental: Accidental::Natural },
                Note { degree: 6, time: 1.0, accidental: Accidental::Sharp },
            ]),
            Voice::new(vec![Note { degree: 9, time: 0.5, accidental: Accidental::Natural }]),
        ],
    }
}

#[test]
fn score_round_trips_through_json() {
    let score = sample_score();
    let json = score_to_json(&score).expect("serialize");
    let parsed = score_from_json(&json).expect("deserialize");
    assert_eq!(parsed, score);
}

#[test]
fn score_parses_from_ingestion_style_json() {
    let json = r#"{
        "voices": [
            { "notes": [
                { "degree": -3, "time": 0.0, "accidental": "natural" },
                { "degree": 4, "time": 1.0, "accidental": "sharp" },
                { "degree": 11, "time": 2.0, "accidental": "flat" }
            ] }
        ]
    }"#;
    let score = score_from_json(json).expect("parse");
    assert_eq!(score.note_count(), 3);
    assert_eq!(score.voices[0].notes[2].accidental, Accidental::Flat);
}

#[test]
fn unknown_accidental_spellings_are_rejected_at_parse_time() {
    let json = r#"{ "voices": [ { "notes": [
        { "degree": 0, "time": 0.0, "accidental": "quarter-flat" }
    ] } ] }"#;
    let err = score_from_json(json).unwrap_err();
    assert!(err.starts_with("Invalid score JSON"), "{err}");
}

#[test]
fn render_json_to_svg_combines_parse_and_render() {
    let json = r#"{ "voices": [ { "notes": [
        { "degree": 0, "time": 0.0, "accidental": "natural" }
    ] } ] }"#;
    let svg = render_json_to_svg(json, &RenderOptions::default()).expect("render");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<circle"));
}

#[test]
fn normalization_bound_holds_across_voices() {
    let voices = [
        Voice::new(vec![Note { degree: -20, time: 0.0, accidental: Accidental::Natural }]),
        Voice::new(vec![
            Note { degree: 5, time: 0.0, accidental: Accidental::Natural },
            Note { degree: 40, time: 1.0, accidental: Accidental::Sharp },
        ]),
        Voice::new(vec![
            Note { degree: 7, time: 0.0, accidental: Accidental::Natural },
            Note { degree: 13, time: 1.0, accidental: Accidental::Natural },
        ]),
    ];
    for voice in &voices {
        let normalized = voice.normalized().expect("non-empty");
        let min = normalized.notes.iter().map(|n| n.degree).min().unwrap();
        assert!((0..7).contains(&min), "min degree {min} out of band");

        // Relative octave positions are preserved.
        for (a, b) in voice.notes.iter().zip(&normalized.notes) {
            assert_eq!(
                a.degree - voice.notes[0].degree,
                b.degree - normalized.notes[0].degree
            );
        }
    }
}

#[test]
fn normalization_through_public_api_is_idempotent() {
    let voice = Voice::new(vec![
        Note { degree: -9, time: 0.0, accidental: Accidental::Natural },
        Note { degree: 15, time: 1.0, accidental: Accidental::Sharp },
    ]);
    let once = voice.normalized().unwrap();
    assert_eq!(once.normalized().unwrap(), once);
}
