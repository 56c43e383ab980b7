use std::fs::File;

use rafter::{Runtime, RuntimeConfig};
use simplelog::{Config, LevelFilter, WriteLogger};
use useref_demo::{UseRefExample, paths};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_path = paths::log_file();
    match File::create(&log_path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", log_path.display(), e),
    }

    if let Err(e) = Runtime::with_config(RuntimeConfig::new("useref-demo"))
        .run(UseRefExample::new)
        .await
    {
        log::error!("runtime stopped: {e}");
        eprintln!("Error: {}", e);
    }
}
