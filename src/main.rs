mod demo;

use clap::{arg, command, value_parser, ArgAction};
use log::info;

fn main() {
    env_logger::init();
    let matches = command!()
        .args(&[
            arg!(--demo "run the scripted stack session and the sample bracket checks"),
            arg!(--random <N> "check N randomly generated texts")
                .value_parser(value_parser!(usize)),
            arg!(--seed <SEED> "seed for --random")
                .value_parser(value_parser!(u64))
                .default_value("0"),
            arg!([text] ... "texts to check for balanced brackets").action(ArgAction::Append),
        ])
        .get_matches();

    let texts: Vec<&String> = matches
        .get_many::<String>("text")
        .map(|t| t.collect())
        .unwrap_or_default();
    let random = matches.get_one::<usize>("random").copied();
    let run_demo = matches.get_flag("demo") || (texts.is_empty() && random.is_none());

    if run_demo {
        if let Err(err) = demo::scripted_session() {
            log::error!("demo session failed: {err}");
        }
    }

    demo::check(&texts);

    if let Some(count) = random {
        let seed = matches.get_one::<u64>("seed").copied().unwrap_or(0);
        info!("Checking {count} random texts with seed {seed}");
        demo::check(&demo::random_samples(count, seed));
    }
}
