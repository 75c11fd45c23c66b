use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use lutnet_rs::circuit::Circuit;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Circuit description file (token format); reads stdin when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write a Graphviz rendering of the circuit to this file.
    #[clap(long, value_name = "FILE")]
    dot: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Diagnostics go to stderr; stdout carries only the two result lines.
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    info!("args = {:?}", args);

    let circuit = match &args.input {
        Some(path) => Circuit::load(path)?,
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Circuit::from_circuit_string(&content)?
        }
    };
    info!("circuit = {:?}", circuit);
    info!(
        "output cone covers {} of {} gates",
        circuit.cone(circuit.output()).len(),
        circuit.num_gates()
    );

    if let Some(path) = &args.dot {
        std::fs::write(path, circuit.to_dot()?)?;
        info!("Wrote {}", path.display());
    }

    println!("{}", circuit.depth());
    println!("{}", circuit.tabulate());

    let time_total = time_total.elapsed();
    info!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
