use paimon_action::Action;

pub fn print_json(action: &Action) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(action)?);
    Ok(())
}

pub fn print_text(action: &Action) {
    let Action::Expire(request) = action;

    println!(
        "  {} {} {}",
        console::style("✓").green().bold(),
        action.identifier(),
        request.table(),
    );
    println!(
        "  {} retain min {}, max {}, older than {} ms",
        console::style("✓").green().bold(),
        request.retained_min(),
        request.retained_max(),
        request.retained_millis(),
    );

    if request.catalog_config().is_empty() {
        return;
    }
    let pairs: Vec<String> = request
        .catalog_config()
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    println!(
        "  {} catalog {}",
        console::style("✓").green().bold(),
        pairs.join(", "),
    );
}
