use olc_rs::{
    CodeArea, NeighborDirection, OlcError, Precision, encode, get_neighbors,
    optimal_code_length_for, shorten, size_meters,
};

fn main() -> Result<(), OlcError> {
    tracing_subscriber::fmt::init();

    let lon = -2.2479699500757597;
    let lat = 53.48082746395233;

    let length = optimal_code_length_for(&(lon, lat), Precision::Meters);
    let code = encode(&(lon, lat), length);
    let area = CodeArea::from_code(&code)?;
    let (width, height) = size_meters(&area)?;

    println!("Plus Code: {}", code);
    println!("Short form near Manchester: {}", shorten(&code, &(-2.24, 53.48))?);
    println!("Cell size: {:.2} m x {:.2} m", width, height);

    let json = serde_json::to_string_pretty(&area).map_err(|e| OlcError::IoError(e.to_string()))?;
    println!("Area: {}", json);

    for (direction, neighbor) in get_neighbors(&code, &NeighborDirection::ALL)? {
        println!("{:?}: {}", direction, neighbor);
    }

    Ok(())
}
