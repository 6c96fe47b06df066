use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "poly-demo")]
#[command(about = "A small demo of typed, structural, and operator polymorphism")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
