use health_compass::startup;

#[tokio::main]
async fn main() {
    if let Err(err) = startup::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
