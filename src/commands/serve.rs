use crate::config::Config;
use crate::server;

pub fn run(port: Option<u16>) {
    let config = Config::from_env();
    let port = port.unwrap_or(config.port);

    println!("🚀 Starting kurtakip server on port {}", port);
    println!("   Open in browser: http://localhost:{}", port);
    println!("   To stop: CTRL+C");

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    runtime.block_on(async {
        if let Err(e) = server::serve(config, port).await {
            eprintln!("❌ Server error: {}", e);
            std::process::exit(1);
        }
    });
}
