use anyhow::Context;

use vanity_infra::{InMemoryProductStore, IntakeConfig};
use vanity_products::IntakeEngine;

fn main() -> anyhow::Result<()> {
    vanity_observability::init();

    let config = IntakeConfig::from_env().context("invalid configuration")?;
    let registry = config
        .build_registry()
        .context("failed to build category registry")?;
    tracing::info!(categories = registry.len(), first_id = config.first_id, "intake ready");

    let engine = IntakeEngine::new(registry);
    let store = InMemoryProductStore::starting_at(config.first_id);

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let summary = vanity_cli::run(&engine, &store, stdin, stdout)?;

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        skipped = summary.skipped,
        "intake finished"
    );
    Ok(())
}
