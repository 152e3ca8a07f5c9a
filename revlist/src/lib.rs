use std::io::Write;

use anyhow::{Context, Result};
use slist::{ArenaList, List};

pub mod cli;

use cli::Cli;

/// Builds the list, reverses it and writes the values to `out`, each one
/// followed by a space. Nothing else is written to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let values = cli.values();
    cli.log(1, &format!("building a {}-node list", values.len()));

    let rendered = if cli.arena {
        reverse_arena(cli, values)?
    } else {
        reverse_boxed(cli, values)
    };

    out.write_all(rendered.as_bytes())
        .context("Failed to write reversed list")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn reverse_boxed(cli: &Cli, values: &[i32]) -> String {
    let mut list = List::from_values(values);
    cli.log(2, &format!("before: {list:?}"));

    list.reverse();
    cli.log(1, &format!("reversed {} boxed nodes", list.len()));

    list.to_string()
}

fn reverse_arena(cli: &Cli, values: &[i32]) -> Result<String> {
    let mut arena = ArenaList::from_values(values);
    cli.log(2, &format!("before: {:?}", arena.values().collect::<Vec<_>>()));

    arena
        .reverse()
        .context("Failed to reverse arena list")?;
    cli.log(
        1,
        &format!("reversed {} arena nodes, head is {:?}", arena.len(), arena.head()),
    );

    Ok(slist::render(arena.values()))
}
