// Sat Jan 17 2026 - Alex

use arm64_branch_generator::{
    address::Address,
    encoder::BranchEncoder,
    output::EncodeReport,
    utils::logging,
};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "AArch64 branch opcode generator", long_about = None)]
struct Args {
    current: String,

    target: String,

    mnemonic: String,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if std::env::var_os("RUST_LOG").is_some() {
        logging::init_from_env();
    } else {
        logging::init_logger(args.verbose);
    }

    println!("{}", "AArch64 Branch Opcode Generator".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let current = match Address::parse_hex(&args.current) {
        Some(a) => a,
        None => {
            eprintln!("{} Addresses must be valid hexadecimal numbers", "[!]".red());
            std::process::exit(1);
        }
    };

    let target = match Address::parse_hex(&args.target) {
        Some(a) => a,
        None => {
            eprintln!("{} Addresses must be valid hexadecimal numbers", "[!]".red());
            std::process::exit(1);
        }
    };

    log::debug!(
        "encoding {} from {} to {}",
        args.mnemonic,
        current,
        target
    );

    let word = match BranchEncoder::encode(current, target, &args.mnemonic) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let mnemonic = args.mnemonic.trim().to_uppercase();

    println!("{} {} opcode: 0x{}", "[+]".green(), mnemonic.cyan(), word.to_hex());
    println!(
        "{} {} opcode (little endian): 0x{}",
        "[+]".green(),
        mnemonic.cyan(),
        word.to_le_hex()
    );
    println!();
    println!(
        "{} Write the 4 bytes starting at address {}",
        "[*]".blue(),
        current
    );

    if let Some(path) = &args.output {
        let report = EncodeReport::new(&mnemonic, current, target, word);
        if let Err(e) = report.save_json(path) {
            eprintln!("{} Failed to save report: {}", "[!]".red(), e);
            std::process::exit(1);
        }
        println!("{} Report saved to: {}", "[+]".green(), path.display());
    }
}
