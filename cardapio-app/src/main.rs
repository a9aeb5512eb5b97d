use std::sync::Arc;

use cardapio_app::core::views::{menu_count_by_unit, team_for_unit};
use cardapio_app::utils::format_price;
use cardapio_app::{RestaurantStore, StaticConfirm, StoreOptions, init_logger};
use cardapio_client::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging)
    let _ = dotenv::dotenv();
    init_logger();

    // 2. Configuration and remote clients
    let config = ClientConfig::from_env();
    tracing::info!(provider = ?config.provider, "Cardápio starting");

    let data = config.build_data_client()?;
    let weather = Arc::new(config.build_weather_provider()?);

    // Nothing here deletes, so refuse any confirmation
    let store = RestaurantStore::new(
        data,
        weather,
        Arc::new(StaticConfirm(false)),
        StoreOptions::from_config(&config),
    );

    // 3. Initial loads
    store.load_units(false).await;
    store.load_team(false).await;
    store.load_menu().await;

    if let Some(city) = std::env::args().nth(1) {
        store.set_weather_city(&city).await;
    }

    // 4. Report
    let state = store.snapshot();
    let view = store.menu_view();

    println!("Cardápio ({})", state.weather_city);
    for item in &view.items {
        let marker = if item.available { ' ' } else { 'x' };
        println!(
            "[{marker}] {:<30} {:<18} {:<16} {}",
            item.name,
            item.category,
            item.unit.as_deref().unwrap_or("-"),
            format_price(item.price)
        );
    }
    println!(
        "{} de {} itens disponíveis",
        view.available_count,
        view.items.len()
    );

    for (unit, count) in menu_count_by_unit(&state.menu_items) {
        println!("  {unit}: {count}");
    }
    println!(
        "Equipe: {} pessoa(s)",
        team_for_unit(&state.team_members, &state.units, &state.weather_city).len()
    );

    match &state.weather_info {
        Some(info) => {
            let observed = info
                .observed_at()
                .map(|at| at.format("%d/%m %H:%M").to_string())
                .unwrap_or_else(|| info.time.clone());
            println!(
                "Clima: {:.1} °C, vento {:.1} km/h ({observed})",
                info.temperature, info.windspeed
            );
        }
        None => println!("Clima: {}", state.weather_message),
    }

    if !state.status_message.is_empty() {
        println!("{}", state.status_message);
    }

    Ok(())
}
