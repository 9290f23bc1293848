use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Please provide an address as a command-line argument\n\
                     Usage: pulse-balances <address>";

#[derive(Parser, Debug)]
#[command(name = "pulse-balances", version)]
#[command(about = "List the token balances of a PulseChain address", long_about = None)]
struct Args {
    /// The address to query
    #[arg(allow_hyphen_values = true)]
    address: String,

    /// Anything after the address is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    init_tracing();
    if !args.rest.is_empty() {
        tracing::debug!(ignored = ?args.rest, "ignoring extra arguments");
    }

    match pulse_balances::get_balance_table(&args.address).await {
        Ok(table) => {
            for skipped in table.skipped() {
                println!("{}", skipped);
            }
            print!("{}", table);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_address_is_an_error() {
        let err = Args::try_parse_from(["pulse-balances"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_address_is_taken_verbatim() {
        let args = Args::try_parse_from(["pulse-balances", "0xAbC"]).unwrap();
        assert_eq!(args.address, "0xAbC");
        assert!(args.rest.is_empty());
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = Args::try_parse_from(["pulse-balances", "0xabc", "extra", "-x"]).unwrap();
        assert_eq!(args.address, "0xabc");
        assert_eq!(args.rest, vec!["extra", "-x"]);
    }

    #[test]
    fn test_address_may_start_with_hyphen() {
        let args = Args::try_parse_from(["pulse-balances", "-0xabc"]).unwrap();
        assert_eq!(args.address, "-0xabc");
    }

    #[test]
    fn test_usage_names_the_address_argument() {
        assert!(USAGE.ends_with("Usage: pulse-balances <address>"));
        assert_eq!(USAGE.lines().count(), 2);
    }
}
