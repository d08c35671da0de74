//! Simple Example
//!
//! Declares a pipeline, lists the registry, then pauses and resumes it.
//!
//! # Usage
//!
//! 1. Start a jobs server with RPC enabled on `127.0.0.1:6001`
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package jobq-rpc --example simple
//!    ```

use jobq_core::domain::{CreateInfo, MemoryOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("jobq - Simple Example");
    println!("=====================\n");

    // 1. Connect
    println!("1. Connecting to RPC endpoint...");
    let jobs = jobq_rpc::connect("http://127.0.0.1:6001")?;

    if !jobs.is_available().await {
        println!("   ✗ jobs plugin is not available on this server");
        return Ok(());
    }
    println!("   ✓ jobs plugin available\n");

    // 2. Declare a pipeline
    println!("2. Declaring pipeline...");
    let info = CreateInfo::with_options("example-emails", MemoryOptions { prefetch: 20 })
        .priority(5)
        .build()?;
    let queue = jobs.create(&info).await?;
    println!("   ✓ Declared: {}\n", queue.name());

    // 3. List pipelines
    println!("3. Listing pipelines...");
    for queue in jobs.queues().await? {
        println!("     - {}", queue);
    }
    println!("   ✓ {} pipeline(s)\n", jobs.count().await?);

    // 4. Pause and resume
    println!("4. Pausing and resuming...");
    queue.pause().await?;
    if let Some(stat) = queue.stat().await? {
        println!("     - ready after pause: {}", stat.ready);
    }
    queue.resume().await?;
    println!("   ✓ Done\n");

    println!("✓ Example completed successfully!");

    Ok(())
}
