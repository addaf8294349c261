//! Implementation of the `traycraft list` command.

use serde_json::json;
use traycraft_core::{application::ARTIFACTS, domain::ICON_SIZES};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header("Artifacts:")?;
            for artifact in &ARTIFACTS {
                output.print(&format!("  {:<28} {}", artifact.path, artifact.role))?;
            }
            output.print("")?;
            output.header("Icons:")?;
            for target in &ICON_SIZES {
                output.print(&format!(
                    "  {:<28} {}x{}",
                    target.path().as_str(),
                    target.width,
                    target.height
                ))?;
            }
        }

        // Machine formats go straight to stdout so they survive --quiet and pipes.
        ListFormat::Json => {
            let artifacts: Vec<_> = ARTIFACTS
                .iter()
                .map(|a| json!({ "path": a.path, "role": a.role }))
                .collect();
            let icons: Vec<_> = ICON_SIZES
                .iter()
                .map(|t| json!({ "path": t.path().as_str(), "width": t.width, "height": t.height }))
                .collect();
            output.json(&json!({ "artifacts": artifacts, "icons": icons }))?;
        }

        ListFormat::List => {
            for artifact in &ARTIFACTS {
                println!("{}", artifact.path);
            }
            for target in &ICON_SIZES {
                println!("{}", target.path());
            }
        }

        ListFormat::Csv => {
            println!("path,kind,detail");
            for artifact in &ARTIFACTS {
                println!("{},artifact,{}", artifact.path, artifact.role);
            }
            for target in &ICON_SIZES {
                println!("{},icon,{}x{}", target.path(), target.width, target.height);
            }
        }
    }

    Ok(())
}
