//! Basic usage example for linkdeque
//!
//! Walks through both ends, bounded eviction, indexed peeks, rotation and
//! iteration, then shares one deque between producer and consumer threads.
//!
//! Run with `RUST_LOG=trace cargo run --example basic_usage` to see evictions.

use linkdeque::{Capacity, Deque, Error, MetricsCollector, PopError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("linkdeque Usage Example");
    println!("=======================");

    // Both ends
    println!("\n1. Basic Operations:");
    let deque: Deque<i32> = Deque::unbounded();
    deque.append(42);
    deque.append_left(24);
    println!("   Deque: {}", deque);
    println!("   Popped right: {}", deque.try_pop()?);
    println!("   Popped left: {}", deque.try_pop_left()?);

    // Bounded eviction
    println!("\n2. Bounded Deque:");
    let recent = Deque::new(Capacity::Bounded(3));
    for i in 1..=5 {
        if let Some(evicted) = recent.append(i) {
            println!("   Appended {}, evicted {}", i, evicted);
        }
    }
    println!("   Deque: {} (full: {})", recent, recent.is_full());

    // Peek and rotate
    println!("\n3. Peek and Rotate:");
    println!("   peek(0) = {}, peek(2) = {}", recent.peek(0), recent.peek(2));
    recent.rotate(1);
    println!("   After rotate(1): {}", recent);
    recent.rotate(-2);
    println!("   After rotate(-2): {}", recent);
    for (index, value) in recent.all() {
        println!("   [{}] = {}", index, value);
    }

    // Shared between threads
    println!("\n4. Producers and Consumers:");
    let shared: Arc<Deque<i32>> = Arc::new(Deque::bounded(64));
    let producers: Vec<_> = (0..4)
        .map(|p| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut evicted = 0;
                for j in 0..25 {
                    if shared.append(p * 25 + j).is_some() {
                        evicted += 1;
                    }
                }
                evicted
            })
        })
        .collect();

    let consumer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            let mut consumed = 0;
            let mut misses = 0;
            while misses < 20 {
                match shared.try_pop_left() {
                    Ok(_) => consumed += 1,
                    Err(PopError) => {
                        misses += 1;
                        thread::sleep(Duration::from_micros(100));
                    }
                }
            }
            consumed
        })
    };

    let evicted: i32 = producers.into_iter().map(|h| h.join().unwrap()).sum();
    let consumed = consumer.join().unwrap();
    println!("   Consumed: {}, evicted: {}, left over: {}", consumed, evicted, shared.len());

    // Error handling
    println!("\n5. Error Handling:");
    let empty: Deque<i32> = Deque::bounded(10);
    match empty.try_pop() {
        Err(err) => println!("   try_pop on empty deque: {}", Error::from(err)),
        Ok(value) => println!("   Unexpected value {}", value),
    }
    match empty.try_peek(3) {
        Err(err) => println!("   try_peek(3): {}", Error::from(err)),
        Ok(value) => println!("   Unexpected value {}", value),
    }
    match Deque::<i32>::try_from_signed(-5) {
        Err(err) => println!("   capacity -5: {}", Error::from(err)),
        Ok(_) => println!("   Unexpected success"),
    }

    println!("\n6. Metrics:");
    let metrics = shared.metrics();
    println!("   appends: {}, evictions: {}", metrics.appends, metrics.evictions);
    println!("   empty pops: {:.1}%", metrics.empty_pop_rate());

    Ok(())
}
