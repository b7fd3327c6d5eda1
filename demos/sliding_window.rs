//! Sliding window example
//!
//! Keeps the last N latency samples from several worker threads in a bounded
//! deque and periodically reports a moving average from a consistent
//! snapshot. The window size comes from `WINDOW_SIZE` (default 50, `unbounded`
//! accepted).

use linkdeque::{Capacity, Deque, MetricsCollector};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn window_capacity() -> Result<Capacity, linkdeque::Error> {
    match env::var("WINDOW_SIZE") {
        Ok(raw) => Ok(raw.parse()?),
        Err(_) => Ok(Capacity::Bounded(50)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let capacity = window_capacity()?;
    println!("Sliding window of {} samples", capacity);

    let window: Arc<Deque<u64>> = Arc::new(Deque::new(capacity));
    let running = Arc::new(AtomicBool::new(true));

    let workers: Vec<_> = (0..4u64)
        .map(|worker_id| {
            let window = Arc::clone(&window);
            let running = Arc::clone(&running);
            thread::spawn(move || {
                let mut sample = worker_id * 7 + 3;
                while running.load(Ordering::Relaxed) {
                    // Cheap pseudo-random latency in microseconds
                    sample = (sample * 1_103_515_245 + 12_345) % 10_000;
                    window.append(sample);
                    thread::sleep(Duration::from_micros(200));
                }
            })
        })
        .collect();

    for tick in 1..=5 {
        thread::sleep(Duration::from_millis(100));

        let snapshot: Vec<u64> = window.values().collect();
        if snapshot.is_empty() {
            continue;
        }
        let average = snapshot.iter().sum::<u64>() as f64 / snapshot.len() as f64;
        let newest = window.try_peek(snapshot.len() - 1).ok();
        println!(
            "tick {}: {} samples, average {:.1}us, newest {:?}",
            tick,
            snapshot.len(),
            average,
            newest
        );
    }

    running.store(false, Ordering::Relaxed);
    for worker in workers {
        worker.join().unwrap();
    }

    let metrics = window.metrics();
    println!(
        "{} samples recorded, {} evicted ({:.1}%), peak window {}",
        metrics.appends,
        metrics.evictions,
        metrics.eviction_rate(),
        metrics.peak_len
    );
    Ok(())
}
