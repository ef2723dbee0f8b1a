//! `render` command.

use anyhow::{Context, Result};
use std::fs;
use tola_head::config::HeadConfig;
use tola_head::{debug, log};

use super::RenderArgs;

/// Render the configured head and write it to stdout or `--output`.
pub fn run_render(config: &HeadConfig, args: &RenderArgs) -> Result<()> {
    let mut builder = config.to_builder()?;
    if args.no_auto_og {
        builder.set_automatic_open_graph(false);
    }

    let html = match &args.only {
        Some(groups) => builder.render_named(groups),
        None => builder.render(),
    };
    debug!("render"; "rendered {} bytes", html.len());

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{html}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_to_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("head.html");
        let config = HeadConfig::parse("[head]\ntitle = \"Out\"\n").unwrap();
        let args = RenderArgs {
            only: Some(vec!["title".into(), "og".into()]),
            no_auto_og: false,
            output: Some(output.clone()),
        };

        run_render(&config, &args).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<title>Out</title>\n<meta property=\"og:title\" content=\"Out\">\n"
        );
    }
}
