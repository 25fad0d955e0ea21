use std::process::ExitCode;

use optextract::{extract, render, Settings};

fn main() -> anyhow::Result<ExitCode> {
    let settings = Settings::from_env()?;
    if let Some(path) = optextract::logging::init_tracing(&settings) {
        tracing::info!("Logging to {}", path.display());
    }

    let tokens = collect_tokens();
    tracing::debug!(count = tokens.len(), "Extracting options");

    match extract(&tokens) {
        Ok(extraction) => {
            println!("{}", render(&extraction, settings.output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::warn!(token = err.token(), "{}", err);
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn collect_tokens() -> Vec<String> {
    collect_tokens_from(std::env::args_os().skip(1))
}

fn collect_tokens_from<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = std::ffi::OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
