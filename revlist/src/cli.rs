use clap::Parser;

/// Values used when none are given on the command line.
pub const DEFAULT_VALUES: [i32; 5] = [1, 2, 3, 4, 5];

#[derive(Parser, Debug)]
#[command(name = "revlist")]
#[command(version, about = "Reverse a singly-linked list in place and print it", long_about = None)]
pub struct Cli {
    /// List values in link order, defaults to 1 2 3 4 5
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<i32>,

    /// Use the index-linked arena instead of boxed nodes
    #[arg(short, long)]
    pub arena: bool,

    /// Print diagnostics to stderr, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn values(&self) -> &[i32] {
        if self.values.is_empty() {
            &DEFAULT_VALUES
        } else {
            &self.values
        }
    }

    /// Writes `message` to stderr when `-v` was given at least `level` times.
    pub fn log(&self, level: u8, message: &str) {
        if self.verbose >= level {
            eprintln!("[revlist] {message}");
        }
    }
}
