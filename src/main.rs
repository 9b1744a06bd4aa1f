use quadkey_distance::{
    QuadkeyError, TileDistance, geo_to_quadkey, horizontal_distance, vertical_distance,
};
use std::time::Instant;

fn main() -> Result<(), QuadkeyError> {
    // (lon, lat) of Big Ben and the Burj Khalifa
    let big_ben = (-0.12463100110988065, 51.500752147795716);
    let burj_khalifa = (55.27452867387456, 25.197258440146513);

    let big_ben_qk = geo_to_quadkey(&big_ben, 22)?;
    let burj_khalifa_qk = geo_to_quadkey(&burj_khalifa, 22)?;

    println!("Big Ben: {}", big_ben_qk);
    println!("Burj Khalifa: {}", burj_khalifa_qk);

    let start = Instant::now();
    let horizontal = horizontal_distance(&big_ben_qk, &burj_khalifa_qk);
    println!(
        "Horizontal Distance: {} Execution Time: {:?}",
        horizontal,
        start.elapsed()
    );

    let start = Instant::now();
    let vertical = vertical_distance(&big_ben_qk, &burj_khalifa_qk);
    println!(
        "Vertical Distance: {} Execution Time: {:?}",
        vertical,
        start.elapsed()
    );

    let distance = TileDistance::between(&big_ben_qk, &burj_khalifa_qk);
    let json = serde_json::to_string_pretty(&distance)
        .map_err(|e| QuadkeyError::IoError(e.to_string()))?;
    println!("{}", json);

    Ok(())
}
