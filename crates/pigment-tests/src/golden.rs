//! Golden conversion fixtures.
//!
//! Hand-checked input/output pairs for every routed direction, kept as
//! embedded JSON so the table reads as data and deserializes through
//! the same serde names the `ColorSpace` feature exposes.

use pigment::{convert, ColorSpace};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    from: ColorSpace,
    to: ColorSpace,
    input: Vec<f64>,
    expected: Vec<f64>,
}

/// One fixture per routed direction at minimum. Values are exact under
/// the engine's wrap and quantization rules; nothing here depends on
/// rounding luck.
const FIXTURES: &str = r#"[
    {"from": "RGB",  "to": "HSV",  "input": [255, 0, 0],           "expected": [0, 100, 100, 1]},
    {"from": "RGB",  "to": "HSV",  "input": [0, 255, 0],           "expected": [120, 100, 100, 1]},
    {"from": "RGB",  "to": "HSV",  "input": [0, 0, 255],           "expected": [240, 100, 100, 1]},
    {"from": "RGB",  "to": "HSV",  "input": [255, 255, 0],         "expected": [60, 100, 100, 1]},
    {"from": "RGB",  "to": "HSL",  "input": [0, 0, 0],             "expected": [0, 0, 0, 1]},
    {"from": "RGB",  "to": "HSL",  "input": [255, 0, 0],           "expected": [0, 100, 50, 1]},
    {"from": "RGB",  "to": "CMYK", "input": [0, 0, 0],             "expected": [0, 0, 0, 1]},
    {"from": "RGB",  "to": "CMYK", "input": [255, 0, 0],           "expected": [0, 100, 100, 0, 1]},
    {"from": "CMYK", "to": "RGB",  "input": [50, 0, 0, 0],         "expected": [0, 255, 255, 1]},
    {"from": "CMYK", "to": "RGB",  "input": [100, 100, 100, 100],  "expected": [255, 255, 255, 1]},
    {"from": "CMYK", "to": "RGB",  "input": [0, 0, 0, 40],         "expected": [0, 0, 0, 1]},
    {"from": "HSV",  "to": "RGB",  "input": [0, 100, 100],         "expected": [255, 0, 0, 1]},
    {"from": "HSV",  "to": "RGB",  "input": [90, 100, 100],        "expected": [127.5, 255, 0, 1]},
    {"from": "HSV",  "to": "RGB",  "input": [300, 100, 100],       "expected": [255, 0, 255, 1]},
    {"from": "HSV",  "to": "RGB",  "input": [0, 0, 101],           "expected": [0, 0, 0, 1]},
    {"from": "HSL",  "to": "RGB",  "input": [0, 100, 50],          "expected": [255, 0, 0, 1]},
    {"from": "HSL",  "to": "RGB",  "input": [0, 0, 50],            "expected": [127.5, 127.5, 127.5, 1]},
    {"from": "HSL",  "to": "RGB",  "input": [0, 50, 60],           "expected": [0, 0, 0, 1]},
    {"from": "HSL",  "to": "RGB",  "input": [120, 100, 50],        "expected": [0, 255, 0, 1]},
    {"from": "HSV",  "to": "HSL",  "input": [240, 100, 100],       "expected": [240, 100, 50, 1]},
    {"from": "HSL",  "to": "HSV",  "input": [0, 100, 50],          "expected": [0, 100, 100, 1]},
    {"from": "CMYK", "to": "HSV",  "input": [50, 0, 0, 0],         "expected": [180, 100, 100, 1]},
    {"from": "CMYK", "to": "HSL",  "input": [50, 0, 0, 0],         "expected": [180, 100, 50, 1]},
    {"from": "HSV",  "to": "CMYK", "input": [0, 100, 100],         "expected": [0, 100, 100, 0, 1]},
    {"from": "HSL",  "to": "CMYK", "input": [0, 50, 60],           "expected": [0, 0, 0, 1]}
]"#;

fn assert_close(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < 1e-9,
            "{context}: element {i} is {a}, expected {e}"
        );
    }
}

#[test]
fn golden_conversions() {
    let fixtures: Vec<Fixture> = serde_json::from_str(FIXTURES).unwrap();
    assert!(!fixtures.is_empty());

    for fixture in &fixtures {
        let out = convert(fixture.from, fixture.to, &fixture.input)
            .unwrap_or_else(|e| panic!("{} -> {}: {e}", fixture.from, fixture.to));
        assert_close(
            &out,
            &fixture.expected,
            &format!("{} -> {} {:?}", fixture.from, fixture.to, fixture.input),
        );
    }
}

#[test]
fn golden_covers_every_direction() {
    let fixtures: Vec<Fixture> = serde_json::from_str(FIXTURES).unwrap();

    for from in ColorSpace::ALL {
        for to in ColorSpace::ALL {
            if from == to {
                continue;
            }
            assert!(
                fixtures.iter().any(|f| f.from == from && f.to == to),
                "no fixture for {from} -> {to}"
            );
        }
    }
}
