use daylight_almanac::{compute, DisplaySettings};

fn main() -> Result<(), serde_json::Error> {
    let settings: DisplaySettings =
        serde_json::from_str(r#"{"show_time_elapsed": true, "coordinate_precision": 3}"#)?;
    println!("{}", serde_json::to_string_pretty(&settings)?);

    let result = compute(2024, 3, 20, 0.0, 0.0, 0);
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
