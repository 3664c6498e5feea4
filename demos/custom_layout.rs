use snowfield::{SnowflakeConfig, SnowflakeError, SnowflakeGenerator};

fn main() -> Result<(), SnowflakeError> {
    let config = SnowflakeConfig::builder()
        .epoch(1704067200000) // 2024-01-01
        .sequence_bits(10)
        .field("region", 3)
        .field("datacenter", 4)
        .field("worker", 6)
        .build()?;

    let layout = config.layout().clone();
    println!("Timestamp bits: {}", layout.timestamp_bits());
    for field in layout.fields() {
        println!(
            "  {:<10} bits={:<2} offset={:<2} max={}",
            field.name(),
            field.bits(),
            field.offset(),
            field.max()
        );
    }

    let generator = SnowflakeGenerator::with_config(config);
    let id = generator.next_id_named(&[("region", 2), ("datacenter", 9), ("worker", 33)]);
    println!("\nID {} => {:?}", id, id);

    // Range checked generation
    match generator.try_next_id(&[8, 0, 0]) {
        Ok(id) => println!("unexpected: {id}"),
        Err(e) => println!("rejected: {e}"),
    }

    // Invalid layouts fail at build time
    let err = SnowflakeConfig::builder()
        .sequence_bits(60)
        .field("x", 10)
        .build()
        .unwrap_err();
    println!("rejected layout: {err}");

    Ok(())
}
