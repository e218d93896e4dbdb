//! CLI handler: route an action to its factory and print the request.

use anyhow::Context;
use paimon_action::action::expire;
use paimon_action::{Action, ActionParams, ActionRegistry, Created};

use super::render;
use super::{Cli, Command, OutputFormat};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let registry = ActionRegistry::default();

    match cli.command {
        Command::List => {
            for id in registry.identifiers() {
                println!("{id}");
            }
        }
        Command::Expire(args) => {
            if args.help {
                return print_help(&registry, expire::IDENTIFIER);
            }
            let params = args
                .into_params()
                .with_context(|| invalid_arguments(expire::IDENTIFIER))?;
            run_action(&registry, expire::IDENTIFIER, &params, cli.output)?;
        }
        Command::Unknown(argv) => {
            let name = argv.first().context("missing action name")?;
            return Err(unsupported(&registry, name));
        }
    }
    Ok(())
}

fn print_help(registry: &ActionRegistry, name: &str) -> anyhow::Result<()> {
    let factory = registry
        .find(name)
        .ok_or_else(|| unsupported(registry, name))?;
    factory.print_help();
    Ok(())
}

fn run_action(
    registry: &ActionRegistry,
    name: &str,
    params: &ActionParams,
    output: OutputFormat,
) -> anyhow::Result<()> {
    tracing::debug!(action = name, ?params, "parsed action arguments");

    let action = match registry
        .create(name, params)
        .with_context(|| invalid_arguments(name))?
    {
        Created::Built(action) => action,
        Created::NotRecognized => return Err(unsupported(registry, name)),
    };
    tracing::info!(action = action.identifier(), "built action request");

    let Action::Expire(request) = &action;
    if request.retained_max() < request.retained_min() {
        tracing::warn!(
            retained_min = request.retained_min(),
            retained_max = request.retained_max(),
            "retained max is below retained min; passing through to the expire action"
        );
    }

    match output {
        OutputFormat::Text => render::print_text(&action),
        OutputFormat::Json => render::print_json(&action)?,
    }
    Ok(())
}

fn invalid_arguments(name: &str) -> String {
    format!("invalid arguments for action \"{name}\"")
}

fn unsupported(registry: &ActionRegistry, name: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "unsupported action \"{name}\". Available actions: {}",
        registry.identifiers().join(", ")
    )
}
