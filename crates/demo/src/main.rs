use hotelchain_demo::{DemoConfig, run};

fn main() -> anyhow::Result<()> {
    hotelchain_observability::init();

    let config = DemoConfig::from_env()?;
    if let Some(today) = config.today {
        tracing::info!(%today, "reservation dates pinned");
    }

    let stdout = std::io::stdout();
    let summary = run(&mut stdout.lock(), &config)?;
    tracing::debug!(?summary, "done");
    Ok(())
}
