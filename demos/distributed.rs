use snowfield::SnowflakeGenerator;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn main() {
    // One generator per machine, each shared by several worker threads
    let machines = 3u64;
    let threads_per_machine = 4;
    let ids_per_thread = 1000;

    let mut handles = Vec::new();
    for machine in 0..machines {
        let generator = Arc::new(SnowflakeGenerator::new());
        for _ in 0..threads_per_machine {
            let generator = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                (0..ids_per_thread)
                    .map(|_| generator.next_i64(&[0, machine]))
                    .collect::<Vec<_>>()
            }));
        }
    }

    let mut unique = HashSet::new();
    let mut total = 0;
    for handle in handles {
        for id in handle.join().unwrap() {
            unique.insert(id);
            total += 1;
        }
    }

    println!("Generated {} IDs across {} machines", total, machines);
    println!("Unique IDs: {}", unique.len());
    assert_eq!(total, unique.len());
}
