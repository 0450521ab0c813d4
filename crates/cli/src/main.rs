use clap::Parser;
use spyglass_dns_domain::{CliOverrides, Message};
use spyglass_dns_wire::MessageDecoder;
use tracing::{debug, error};

mod bootstrap;

#[derive(Parser)]
#[command(name = "spyglass-dns")]
#[command(version)]
#[command(about = "Spyglass DNS - Decode raw DNS messages into structured records")]
struct Cli {
    /// File holding one raw DNS message (the UDP payload)
    #[arg(value_name = "FILE", conflicts_with = "hex")]
    input: Option<String>,

    /// Message given inline as hex (whitespace ignored)
    #[arg(long, value_name = "HEX")]
    hex: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Compression pointer hops to allow before rejecting a name
    #[arg(long)]
    max_pointer_hops: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the decoded message as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        max_pointer_hops: cli.max_pointer_hops,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let buf = read_message(&cli)?;
    debug!(bytes = buf.len(), "message buffer loaded");

    let decoder = MessageDecoder::with_limits(config.limits);
    let message = match decoder.decode(&buf) {
        Ok(message) => message,
        Err(e) => {
            error!(error = %e, "decode failed");
            return Err(e.into());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&message)?);
    } else {
        print_text(&message);
    }

    Ok(())
}

fn read_message(cli: &Cli) -> anyhow::Result<Vec<u8>> {
    if let Some(hex_str) = &cli.hex {
        let compact: String = hex_str.split_whitespace().collect();
        return Ok(hex::decode(compact)?);
    }
    if let Some(path) = &cli.input {
        return Ok(std::fs::read(path)?);
    }
    anyhow::bail!("either FILE or --hex is required");
}

fn print_text(message: &Message) {
    let header = &message.header;

    let mut flags = Vec::new();
    if header.response {
        flags.push("qr");
    }
    if header.authoritative {
        flags.push("aa");
    }
    if header.truncated {
        flags.push("tc");
    }
    if header.recursion_desired {
        flags.push("rd");
    }
    if header.recursion_available {
        flags.push("ra");
    }

    println!(
        ";; {}, id {}, opcode {}, status {}",
        header.kind(),
        header.id,
        header.opcode,
        header.response_code
    );
    println!(
        ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
        flags.join(" "),
        header.question_count,
        header.answer_count,
        header.authority_count,
        header.additional_count
    );

    if !message.questions.is_empty() {
        println!(";; QUESTION SECTION:");
        for question in &message.questions {
            println!("{}", question);
        }
    }

    for (records, title) in [
        (&message.answers, "ANSWER"),
        (&message.authorities, "AUTHORITY"),
        (&message.additionals, "ADDITIONAL"),
    ] {
        if records.is_empty() {
            continue;
        }
        println!(";; {} SECTION:", title);
        for record in records {
            println!("{}", record);
        }
    }
}
