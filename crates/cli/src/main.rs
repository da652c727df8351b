use anyhow::Context;

fn main() -> anyhow::Result<()> {
    stockledger_observability::init();

    let config = stockledger_cli::DemoConfig::from_env();
    tracing::info!(file = %config.inventory_file.display(), "starting demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    stockledger_cli::run_demo(&config, &mut out).context("demo run failed")?;
    Ok(())
}
