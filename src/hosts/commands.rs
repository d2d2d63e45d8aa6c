use std::io::{BufRead, Write};

use super::error::{Result, SshExtError};
use super::registry::HostRegistry;
use super::HostTool;
use crate::prompt::{Console, Selection};
use crate::shared::command::program_available;
use crate::shared::outcome::Outcome;
use crate::shell::{Shell, quote};

pub fn register<S, R, W>(tool: &HostTool<S>, console: &mut Console<R, W>) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let mut registry = HostRegistry::load(&tool.registry_path)?;

    let hostname = console.ask_non_empty("Enter host (hostname or IP address): ")?;
    let nickname = console.ask_non_empty("Enter nickname for entry: ")?;

    if registry.get_by_nickname(&nickname).is_some() {
        console.say(format_args!("Nickname '{nickname}' is already registered."))?;
        return Ok(Outcome::Fatal);
    }

    let prompt = format!("Register host '{hostname}' with nickname '{nickname}'? (y/n): ");
    if !console.confirm(&prompt)? {
        console.say("Cancelled.")?;
        return Ok(Outcome::Cancelled);
    }

    console.say(format_args!("Adding '{hostname}' as '{nickname}'..."))?;
    registry.insert(&nickname, &hostname)?;
    registry.save(&tool.registry_path)?;
    tracing::info!(%nickname, %hostname, "host registered");

    console.say("Done.")?;
    Ok(Outcome::Success)
}

pub fn list<S, R, W>(tool: &HostTool<S>, console: &mut Console<R, W>) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let registry = HostRegistry::load(&tool.registry_path)?;
    if registry.is_empty() {
        console.say("No hosts registered.")?;
        return Ok(Outcome::Success);
    }

    for (index, entry) in registry.iter().enumerate() {
        console.say(format_args!(
            "[{index}] {}: {}",
            entry.nickname, entry.hostname
        ))?;
    }
    Ok(Outcome::Success)
}

pub fn connect<S, R, W>(
    tool: &HostTool<S>,
    console: &mut Console<R, W>,
    nickname: Option<&str>,
) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let registry = HostRegistry::load(&tool.registry_path)?;

    let hostname = match nickname {
        Some(nickname) => registry
            .get_by_nickname(nickname)
            .map(|entry| entry.hostname.clone())
            .ok_or_else(|| SshExtError::UnknownNickname(nickname.to_string()))?,
        None => {
            let labels: Vec<String> = registry
                .iter()
                .map(|e| format!("{} ({})", e.nickname, e.hostname))
                .collect();
            match console.select_from(&labels, "Hosts:")? {
                Selection::Chosen { index, .. } => registry
                    .get_by_index(index)
                    .map(|entry| entry.hostname.clone())
                    .ok_or_else(|| SshExtError::UnknownNickname(index.to_string()))?,
                Selection::Cancelled => {
                    console.say("Cancelled.")?;
                    return Ok(Outcome::Cancelled);
                }
            }
        }
    };

    if !program_available(&tool.connect_command) {
        return Err(SshExtError::ClientNotFound(tool.connect_command.clone()));
    }

    let command = format!("{} {}", tool.connect_command, quote(&hostname)?);
    console.say(format_args!("Connecting: '{command}'"))?;
    tracing::info!(%command, "connecting");
    let status = tool.shell.call(&command)?;

    console.say("Done.")?;
    if status.success() {
        Ok(Outcome::Success)
    } else {
        tracing::debug!(%command, code = ?status.code, "connect exited non-zero");
        Ok(Outcome::Fatal)
    }
}
