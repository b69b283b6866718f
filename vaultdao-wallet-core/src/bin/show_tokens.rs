use vaultdao_wallet_core::{init, init_token_registry, RegistryConfig};

fn main() -> anyhow::Result<()> {
    init()?;
    let config = RegistryConfig::from_env()?;
    let core = init_token_registry(config)?;
    let registry = core.registry();

    println!("VaultDAO Token Registry:\n");
    println!("  Storage directory: {}", core.storage.base_dir().display());
    println!("  Storage key: {}", registry.storage_key());
    println!("  Sample balance: {}", core.format_amount("1234567.891"));
    println!();

    for token in registry.get_all_tracked() {
        let origin = if registry.is_custom(&token.address) { "custom" } else { "default" };
        println!(
            "  {} {:<8} {:<24} {:>2} decimals  {:<7}  {}",
            token.display_icon(),
            token.symbol,
            token.name,
            token.decimals,
            origin,
            token.address
        );
    }
    Ok(())
}
