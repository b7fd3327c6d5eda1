//! Round-robin scheduling example
//!
//! A fixed set of tasks lives in an unbounded deque. Each scheduling tick runs
//! the task at the head and rotates it to the back; finished tasks are removed
//! from the left end.

use linkdeque::{Deque, MetricsCollector};

#[derive(Debug)]
struct Task {
    name: &'static str,
    remaining: u32,
}

fn main() {
    env_logger::init();

    let tasks: Deque<Task> = [("parse", 3), ("compile", 5), ("link", 2), ("test", 4)]
        .into_iter()
        .map(|(name, remaining)| Task { name, remaining })
        .collect();

    let mut tick = 0;
    while let Ok(mut task) = tasks.try_pop_left() {
        tick += 1;
        task.remaining -= 1;
        if task.remaining == 0 {
            println!("tick {:2}: {} finished", tick, task.name);
            continue;
        }

        println!("tick {:2}: ran {} ({} slices left)", tick, task.name, task.remaining);
        // Back at the head, then one left rotation sends it to the back
        tasks.append_left(task);
        tasks.rotate(-1);
    }

    let metrics = tasks.metrics();
    println!(
        "{} ticks, {} rotations, peak queue length {}",
        tick, metrics.rotations, metrics.peak_len
    );
}
