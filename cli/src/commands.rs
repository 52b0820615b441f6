pub mod lookup;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cepr")]
#[command(about = "Races two CEP lookup services and prints the fastest answer.")]
pub struct CommandLine {
    /// CEP to resolve, e.g. 01001000
    pub cep: String,

    /// Deadline for the whole race, in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    pub timeout_ms: u64,

    /// Suppress the header and spinner, print results only
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
