use std::fmt;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pullstack::{filter, ints, max, Seq, Seq2, SeqExt, Stack};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pullstack", about = "Push and pull iteration over a linked stack")]
struct Cli {
    /// Default log directive when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Push values, drain them, then walk the stack every supported way.
    Stack {
        /// Values pushed in order.
        #[arg(default_values_t = [10, 20, 30])]
        values: Vec<i64>,
    },
    /// Print the stack traversal filtered by the given conditions.
    Filter {
        /// Keep only values strictly greater than this.
        #[arg(long)]
        min: Option<i64>,
        /// Keep only even values.
        #[arg(long)]
        even: bool,
        /// Values pushed in order.
        #[arg(default_values_t = [10, 20, 30])]
        values: Vec<i64>,
    },
    /// Maximum of `0..count`, or of the given values.
    Max {
        /// Length of the integer range used when no values are given.
        #[arg(long, default_value_t = 3)]
        count: usize,
        /// Explicit values; overrides --count.
        values: Vec<i64>,
    },
    /// Filter a fixed list of login events down to the valid ones.
    Events,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Stack { values } => run_stack(&values),
        Commands::Filter { min, even, values } => run_filter(&values, min, even),
        Commands::Max { count, values } => run_max(count, &values),
        Commands::Events => run_events(),
    }

    Ok(())
}

fn init_tracing(default_directive: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .with_context(|| format!("invalid log level '{}'", default_directive))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run_stack(values: &[i64]) {
    let mut stack = Stack::new();
    stack.extend(values.iter().copied());

    println!("pop");
    loop {
        match stack.pop() {
            Ok(value) => println!("{}", value),
            Err(err) => {
                println!("ERROR: {}", err);
                break;
            }
        }
    }

    stack.extend(values.iter().copied());

    println!("cursor");
    let mut cursor = stack.cursor();
    while let Some(value) = cursor.advance() {
        println!("{}", value);
    }

    println!("for_each");
    stack.for_each(|value| println!("{}", value));

    println!("seq");
    stack.seq().produce(|value| {
        println!("{}", value);
        true
    });

    println!("indexed");
    stack.indexed().produce2(|index, value| {
        println!("{} {}", index, value);
        true
    });

    report_max(max(stack.seq()));
}

fn run_filter(values: &[i64], min: Option<i64>, even: bool) {
    let stack: Stack<i64> = values.iter().copied().collect();
    let selected = filter(stack.seq(), |value| {
        min.map_or(true, |min| **value > min) && (!even || **value % 2 == 0)
    });
    selected.produce(|value| {
        println!("{}", value);
        true
    });
}

fn run_max(count: usize, values: &[i64]) {
    if values.is_empty() {
        report_max(max(ints(count)));
    } else {
        let stack: Stack<i64> = values.iter().copied().collect();
        report_max(max(stack.seq()));
    }
}

fn report_max<T: fmt::Display>(result: Result<T, pullstack::SequenceError>) {
    match result {
        Ok(value) => println!("max: {}", value),
        Err(err) => println!("ERROR: {}", err),
    }
}

#[derive(Debug)]
struct Event {
    user: &'static str,
    kind: &'static str,
}

impl Event {
    fn is_valid(&self) -> bool {
        !self.user.is_empty() && !self.kind.is_empty()
    }
}

fn run_events() {
    let events = [
        Event {
            user: "elliot",
            kind: "login",
        },
        Event {
            user: "",
            kind: "access",
        },
        Event {
            user: "elliot",
            kind: "logout",
        },
    ];

    pullstack::from_slice(&events)
        .filter(|event| event.is_valid())
        .produce(|event| {
            println!("{:?}", event);
            true
        });
}
