use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use maxdefense_algorithms::Strategy;
use maxdefense_challenges::{generate_catalog, save_armor_database, Track};
use maxdefense_runtime::*;
use maxdefense_utils::{init_tracing, save_json};
use std::path::PathBuf;

fn solve_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            arg!(<SETTINGS> "Settings json string, path to json file, or '-' for stdin")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--budget [BUDGET] "Overrides the gold budget from the settings")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"max-items" [MAX_ITEMS] "Overrides the maximum number of candidate armors")
                .value_parser(clap::value_parser!(usize)),
        )
}

fn cli() -> Command {
    Command::new("maxdefense")
        .about("Chooses the armor with the most defense within a gold budget")
        .arg_required_else_help(true)
        .arg(
            arg!(-v --verbose "Log solver progress to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            solve_command("greedy", "Picks armor greedily by defense per gold")
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the selection will be saved to this file path as json")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--json "Print the selection as json instead of the armor report")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            solve_command("exhaustive", "Tries every subset of the candidate armor")
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the selection will be saved to this file path as json")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--json "Print the selection as json instead of the armor report")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(solve_command(
            "compare",
            "Runs both solvers and compares their selections",
        ))
        .subcommand(
            Command::new("generate")
                .about("Writes a random armor database")
                .arg(
                    arg!(<NUM_ITEMS> "Number of armor items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(arg!(<OUTPUT> "Database file path").value_parser(clap::value_parser!(PathBuf)))
                .arg(
                    arg!(--seed [SEED] "Random seed")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--"max-cost" [MAX_COST] "Maximum cost of an item in gold")
                        .default_value("100")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    arg!(--"max-defense" [MAX_DEFENSE] "Maximum defense points of an item")
                        .default_value("2500")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    arg!(--density [DENSITY] "Probability that an item has any defense")
                        .default_value("0.9")
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = init_tracing(matches.get_flag("verbose")) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    if let Err(e) = match matches.subcommand() {
        Some(("greedy", sub_m)) => solve(Strategy::Greedy, sub_m),
        Some(("exhaustive", sub_m)) => solve(Strategy::Exhaustive, sub_m),
        Some(("compare", sub_m)) => compare(sub_m),
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            sub_m.get_one::<PathBuf>("OUTPUT").unwrap().clone(),
            *sub_m.get_one::<u64>("seed").unwrap(),
            *sub_m.get_one::<f64>("max-cost").unwrap(),
            *sub_m.get_one::<f64>("max-defense").unwrap(),
            *sub_m.get_one::<f64>("density").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_settings(sub_m: &ArgMatches) -> Result<Settings> {
    Settings::load(sub_m.get_one::<String>("SETTINGS").unwrap())?.with_overrides(
        sub_m.get_one::<f64>("budget").cloned(),
        sub_m.get_one::<usize>("max-items").cloned(),
    )
}

pub fn solve(strategy: Strategy, sub_m: &ArgMatches) -> Result<()> {
    let settings = load_settings(sub_m)?;
    let candidates = load_candidates(&settings)?;
    let run = run_strategy(strategy, &candidates, settings.budget)?;
    print!("{}", format_run(&run, sub_m.get_flag("json")));

    if let Some(path) = sub_m.get_one::<PathBuf>("output") {
        save_json(path, &run.selection)?;
    }
    Ok(())
}

pub fn compare(sub_m: &ArgMatches) -> Result<()> {
    let settings = load_settings(sub_m)?;
    let candidates = load_candidates(&settings)?;
    let greedy = run_strategy(Strategy::Greedy, &candidates, settings.budget)?;
    let exhaustive = run_strategy(Strategy::Exhaustive, &candidates, settings.budget)?;
    print!("{}", format_run(&greedy, false));
    print!("{}", format_run(&exhaustive, false));

    let greedy_defense = greedy.selection.total_defense;
    let exhaustive_defense = exhaustive.selection.total_defense;
    if greedy_defense > exhaustive_defense {
        return Err(anyhow!(
            "Greedy defense ({}) exceeds exhaustive defense ({})",
            greedy_defense,
            exhaustive_defense
        ));
    }
    if exhaustive_defense > 0.0 {
        println!(
            "Greedy reached {:.2}% of the optimal defense",
            greedy_defense / exhaustive_defense * 100.0
        );
    }
    Ok(())
}

pub fn generate(
    num_items: usize,
    output: PathBuf,
    seed: u64,
    max_cost: f64,
    max_defense: f64,
    density: f64,
) -> Result<()> {
    let track = Track {
        num_items,
        max_cost,
        max_defense,
        density,
    };
    let catalog = generate_catalog(seed, &track)?;
    save_armor_database(&output, &catalog)?;
    println!("Wrote {} armor items to {}", catalog.len(), output.display());
    Ok(())
}
