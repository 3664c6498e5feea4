use snowfield::{SnowflakeGenerator, SnowflakeId};

fn main() {
    // Twitter layout: 1 spare bit, 10 machine bits, 12 sequence bits
    let generator = SnowflakeGenerator::new();

    let id1 = generator.next_id_named(&[("machine", 1)]);
    let id2 = generator.next_id_named(&[("machine", 1)]);
    let id3 = generator.next_id_named(&[("machine", 1)]);

    println!("Generated IDs (ordered within this generator):");
    print_id(&id1);
    print_id(&id2);
    print_id(&id3);

    // Every form parses back to the same components
    let from_int = generator.parse_i64(id2.to_i64());
    let from_bytes = generator.parse_bytes(&id2.to_bytes()).unwrap();
    let from_hex = generator.parse_hex(&id2.to_hex()).unwrap();
    assert_eq!(from_int, id2);
    assert_eq!(from_bytes, id2);
    assert_eq!(from_hex, id2);

    // Or extract components individually
    let raw = id2.to_u64();
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {} ms since epoch", generator.extract().timestamp(raw));
    println!("  Machine: {:?}", generator.extract().field(raw, "machine"));
    println!("  Sequence: {}", generator.extract().sequence(raw));
}

fn print_id(id: &SnowflakeId) {
    let date = id
        .created_at()
        .map(|d| d.to_rfc3339())
        .unwrap_or_else(|| "out of range".to_string());

    println!(
        "  ID: {}, Hex: {}, Created: {}, Human date: {}, Machine: {:?}, Sequence: {}",
        id.to_i64(),
        id,
        id.create_time(),
        date,
        id.field("machine"),
        id.sequence()
    );
}
