use std::io;
use std::path::{Path, PathBuf};

use anagrouper::{run, Config, ConfigError, OutputFmt, RunError};
use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use log::{debug, info};

fn main() -> Result<(), RunError> {
    let matches = App::new("anagrouper")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Groups the words of each input file into anagram classes.")
        .args(&[
            Arg::from_usage("-c --config=[FILE] 'Reads settings from the given TOML file instead of the built-in defaults.'"),
            Arg::from_usage("-m --max-per-group=[N] 'Maximum number of words printed per group.'"),
            Arg::from_usage("-f --format=[FORMAT] 'Output format.'")
                .possible_values(&["text", "json", "csv"])
                .case_insensitive(true),
            Arg::from_usage("[PATH]... 'Word list files or directories. Replaces the files listed in the config.'"),
        ])
        .get_matches();

    let config = build_config(&matches)?;

    let env = Env::default()
        .filter_or(
            "ANAGROUPER_LOG_LEVEL",
            config.log_level.as_deref().unwrap_or("info"),
        )
        .write_style_or("ANAGROUPER_LOG_STYLE", "auto");

    env_logger::init_from_env(env);

    info!("starting up");
    debug!("{:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;

    Ok(())
}

fn build_config(matches: &ArgMatches) -> Result<Config, ConfigError> {
    let mut config = Config::load(matches.value_of("config").map(Path::new))?;

    if let Some(max) = matches.value_of("max-per-group") {
        config.max_per_group = max
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "max-per-group",
                value: max.to_string(),
            })?;
    }
    if let Some(fmt) = matches.value_of("format") {
        config.output_format = fmt.parse::<OutputFmt>()?;
    }
    if let Some(paths) = matches.values_of("PATH") {
        config.files = paths.map(PathBuf::from).collect();
    }

    config.validate()?;
    Ok(config)
}
