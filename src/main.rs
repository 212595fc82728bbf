use chrono::Local;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use timegrid_render::config::RenderConfig;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = RenderConfig::from_env()?;

    // Initialize logging; stdout is reserved for the rendered calendar
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(view = %config.view, events = config.events.len(), "Starting TimeGrid");

    let today = Local::now().date_naive();
    let output = timegrid_render::run(&config, today)?;
    println!("{output}");

    Ok(())
}
